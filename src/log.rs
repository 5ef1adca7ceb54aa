//! Run log with rotation.
//!
//! Appends timestamped lines for each pipeline phase to a log file and
//! rotates it once it exceeds a configurable line limit.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Default maximum number of lines before rotation.
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Name written in the source column of every log line.
pub const SOURCE_NAME: &str = "backlog";

/// A file-backed logger for pipeline runs.
#[derive(Debug, Clone)]
pub struct RunLogger {
    /// Path to the log file.
    pub path: PathBuf,
    /// Maximum lines before rotation.
    pub max_lines: usize,
}

impl RunLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    /// Create a logger with a custom max lines setting.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Write a log entry.
    ///
    /// Format: `YYYY-MM-DD HH:MM:SS | backlog | <message>`
    pub fn log(&self, message: &str) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} | {} | {}\n", timestamp, SOURCE_NAME, message);
        self.append(&line)?;
        self.rotate_if_needed()
    }

    /// Write a separator for a new run.
    pub fn log_session_start(&self) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = format!(
            "\n======================================================================\n\
             === Backlog run started at {} ===\n\
             ======================================================================\n\n",
            timestamp
        );
        self.append(&separator)
    }

    /// Read all lines from the log file.
    pub fn read_all(&self) -> io::Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        BufReader::new(file).lines().collect()
    }

    fn append(&self, text: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }

    fn rotate_if_needed(&self) -> io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        if count_lines(&self.path)? <= self.max_lines {
            return Ok(());
        }
        rotate_log(&self.path)
    }
}

/// Count lines in a file.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).lines().count())
}

/// Rotate a log file.
///
/// Moves it to a timestamped `.bak` sibling and leaves an empty file behind.
pub fn rotate_log(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup_name = format!(
        "{}.{}.bak",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("log"),
        timestamp
    );
    fs::rename(path, path.with_file_name(backup_name))?;
    File::create(path)?;

    Ok(())
}
