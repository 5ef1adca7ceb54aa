use std::fs;
use std::path::Path;

use super::types::{Config, ConfigError};

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
    Config::parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let mut current_section = String::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Handle section headers like [files]
        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].trim().to_string();
            continue;
        }

        let Some((key, value)) = parse_toml_line(line) else {
            return Err(ConfigError::Parse(format!(
                "line {}: expected key = value",
                line_num + 1
            )));
        };

        let full_key = if current_section.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", current_section, key)
        };

        match full_key.as_str() {
            "files.input" => {
                config.files_input = parse_string(&full_key, value)?;
            }
            "files.output" => {
                config.files_output = parse_string(&full_key, value)?;
            }
            "files.log" => {
                let path = parse_string(&full_key, value)?;
                config.files_log = if path.is_empty() { None } else { Some(path) };
            }
            _ => {} // Ignore unknown keys
        }
    }

    Ok(config)
}

/// Parse a TOML line into key-value pair, dropping a trailing comment.
fn parse_toml_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = match value.strip_prefix('"').and_then(|rest| rest.find('"')) {
        Some(end) => &value[..end + 2],
        None => value.split('#').next().unwrap_or(value).trim(),
    };
    Some((key.trim(), value))
}

/// Parse a double-quoted string value.
fn parse_string(key: &str, value: &str) -> Result<String, ConfigError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(value[1..value.len() - 1].to_string())
    } else {
        Err(ConfigError::Parse(format!("invalid {}: {}", key, value)))
    }
}
