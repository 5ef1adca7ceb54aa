//! Terminal color utilities using ANSI escape codes.
//!
//! Used for the progress and status lines printed by the CLI. The generated
//! Markdown never contains escape codes.

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

/// Color success messages (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Color error messages (red).
pub fn error(text: &str) -> String {
    format!("{}{}{}", RED, text, RESET)
}

/// Color warning messages (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

/// Color a path (dim).
pub fn path(text: &str) -> String {
    format!("{}{}{}", DIM, text, RESET)
}

/// Color a number/count (bright cyan).
pub fn number(n: impl std::fmt::Display) -> String {
    format!("{}{}{}", BRIGHT_CYAN, n, RESET)
}

/// Emoji constants for consistent usage
pub mod emoji {
    pub const CHECK: &str = "✅";
    pub const WARNING: &str = "⚠️";
    pub const TASK: &str = "📋";
    pub const FOLDER: &str = "📁";
}
