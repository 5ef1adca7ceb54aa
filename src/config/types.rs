use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::taxonomy::Taxonomy;

use super::cli::CliArgs;
use super::{env, toml};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "backlog.toml";

/// Default location of the cached issues export.
pub const DEFAULT_INPUT: &str = "/tmp/all_open_issues.json";

/// Default location of the generated backlog.
pub const DEFAULT_OUTPUT: &str = "BACKLOG.md";

/// Backlog configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the issues export (JSON array).
    pub files_input: String,
    /// Path to the generated Markdown file.
    pub files_output: String,
    /// Path to the run log, if logging to a file.
    pub files_log: Option<String>,
    /// Suppress progress output on stdout.
    pub quiet: bool,
    /// Taxonomy used for classification.
    pub taxonomy: Taxonomy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files_input: DEFAULT_INPUT.to_string(),
            files_output: DEFAULT_OUTPUT.to_string(),
            files_log: None,
            quiet: false,
            taxonomy: Taxonomy::default(),
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults.
    ///
    /// A config file named with `--config` must load; an implicit
    /// `backlog.toml` that fails to load is skipped.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Load from config file if present
        if let Some(ref path) = cli_args.config {
            let file_config = Self::load_from_file(path)?;
            config.merge_from(&file_config);
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            if let Ok(file_config) = Self::load_from_file(DEFAULT_CONFIG_FILE) {
                config.merge_from(&file_config);
            }
        }

        // Apply environment variables
        config.apply_env();

        // Apply CLI args (highest precedence)
        config.apply_cli(cli_args);

        Ok(config)
    }

    /// Replace the taxonomy used for classification.
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Input path.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(&self.files_input)
    }

    /// Output path.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.files_output)
    }

    /// Run log path, if configured.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.files_log.as_ref().map(PathBuf::from)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        toml::load_from_file(path)
    }

    /// Parse TOML content into configuration.
    pub(super) fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::parse_toml(content)
    }

    /// Apply environment variables.
    fn apply_env(&mut self) {
        env::apply_env(self);
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.input {
            self.files_input = path.clone();
        }
        if let Some(ref path) = args.output {
            self.files_output = path.clone();
        }
        if let Some(ref path) = args.log_file {
            self.files_log = Some(path.clone());
        }
        if args.quiet {
            self.quiet = true;
        }
    }

    /// Merge values from another config (for file-based config).
    fn merge_from(&mut self, other: &Self) {
        self.files_input = other.files_input.clone();
        self.files_output = other.files_output.clone();
        self.files_log = other.files_log.clone();
    }

    /// Generate default backlog.toml content.
    pub fn default_toml() -> String {
        format!(
            r#"# Backlog configuration

[files]
input = "{}"
output = "{}"
# log = "backlog.log"
"#,
            DEFAULT_INPUT, DEFAULT_OUTPUT
        )
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("config I/O error: {0}")]
    Io(String),
    /// Parse error in config file.
    #[error("config parse error: {0}")]
    Parse(String),
}
