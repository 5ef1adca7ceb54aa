//! The backlog pipeline: load → partition → render → save.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::color::{self, emoji};
use crate::config::Config;
use crate::error::BacklogError;
use crate::hierarchy::{self, Hierarchy, PartitionSummary};
use crate::issue;
use crate::log::RunLogger;
use crate::render;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub summary: PartitionSummary,
    /// Categories present in the backlog.
    pub categories: usize,
    pub output: PathBuf,
}

/// Generates a Markdown backlog from a cached issues export.
pub struct BacklogGenerator {
    config: Config,
    logger: Option<RunLogger>,
}

impl BacklogGenerator {
    pub fn new(config: Config) -> Self {
        let logger = config.log_path().map(RunLogger::new);
        Self { config, logger }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the issues export into raw records.
    pub fn load(&self) -> Result<Vec<Value>, BacklogError> {
        let path = self.config.input_path();
        self.progress(&format!(
            "{} Loading issues from {}",
            emoji::FOLDER,
            color::path(&path.display().to_string())
        ));
        let records = issue::load_records(&path)?;
        self.record(&format!("loaded {} records from {}", records.len(), path.display()));
        Ok(records)
    }

    /// Classify records into a hierarchy, skipping pull requests.
    pub fn partition(
        &self,
        records: Vec<Value>,
    ) -> Result<(Hierarchy, PartitionSummary), BacklogError> {
        let (hierarchy, summary) = hierarchy::partition(records, &self.config.taxonomy)?;
        self.progress(&format!(
            "{} Categorized {} issues into {} categories ({} pull requests skipped)",
            emoji::TASK,
            color::number(summary.issues),
            color::number(hierarchy.category_count()),
            color::number(summary.pull_requests)
        ));
        self.record(&format!(
            "categorized {} issues, skipped {} pull requests",
            summary.issues, summary.pull_requests
        ));
        Ok((hierarchy, summary))
    }

    /// Render the backlog document.
    pub fn render(&self, hierarchy: &Hierarchy) -> String {
        render::render(hierarchy)
    }

    /// Write the document to the output path, replacing any previous content.
    ///
    /// The parent directory must already exist.
    pub fn save(&self, content: &str) -> Result<PathBuf, BacklogError> {
        let path = self.config.output_path();
        write_output(&path, content)?;
        self.record(&format!("wrote {} bytes to {}", content.len(), path.display()));

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!(
            "{} {}",
            emoji::CHECK,
            color::success(&format!("{} has been generated successfully.", name))
        );
        Ok(path)
    }

    /// Run the full pipeline once.
    pub fn run(&self) -> Result<RunReport, BacklogError> {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.log_session_start() {
                self.warn_log_failure(&e);
            }
        }

        let records = self.load()?;
        let (hierarchy, summary) = self.partition(records)?;
        let content = self.render(&hierarchy);
        let output = self.save(&content)?;

        Ok(RunReport {
            summary,
            categories: hierarchy.category_count(),
            output,
        })
    }

    fn progress(&self, message: &str) {
        if !self.config.quiet {
            println!("{}", message);
        }
    }

    fn record(&self, message: &str) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.log(message) {
                self.warn_log_failure(&e);
            }
        }
    }

    fn warn_log_failure(&self, err: &std::io::Error) {
        eprintln!(
            "{} {}",
            emoji::WARNING,
            color::warning(&format!("warning: failed to write run log: {}", err))
        );
    }
}

/// Write rendered content to a path.
pub fn write_output(path: &Path, content: &str) -> Result<(), BacklogError> {
    fs::write(path, content).map_err(|source| BacklogError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
