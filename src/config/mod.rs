//! Configuration loading for backlog.
//!
//! Supports backlog.toml, CLI flags, and environment variables.
//! Precedence (highest to lowest): CLI flags > env vars > config file > defaults.
//! The taxonomy is compiled in and only replaceable through the library API.

mod cli;
mod env;
mod toml;
mod types;

pub use cli::{parse_args, CliArgs};
pub use types::{Config, ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[cfg(test)]
mod tests;
