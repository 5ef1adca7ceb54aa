use std::env;

use super::types::Config;

pub(super) fn apply_env(config: &mut Config) {
    if let Ok(val) = env::var("BACKLOG_INPUT") {
        config.files_input = val;
    }
    if let Ok(val) = env::var("BACKLOG_OUTPUT") {
        config.files_output = val;
    }
    if let Ok(val) = env::var("BACKLOG_LOG_FILE") {
        config.files_log = if val.is_empty() { None } else { Some(val) };
    }
}
