//! GitHub issue records as found in a cached issues export.
//!
//! Records stay as raw JSON values until partitioning so that pull requests
//! can be skipped without requiring them to have an issue's shape.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::BacklogError;

/// Key whose presence marks a record as a pull request.
pub const PULL_REQUEST_KEY: &str = "pull_request";

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

/// A single issue record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    /// Issue number, unique within an export.
    pub number: u64,
    pub title: String,
    /// Issue body; `null` and absent are both `None`.
    #[serde(default)]
    pub body: Option<String>,
    /// Link to the issue on GitHub.
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Issue {
    /// Decode an issue from a raw record.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Body text, empty when the issue has none.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Label names in their original order.
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|l| l.name.as_str()).collect()
    }
}

/// Check whether a raw record is a pull request.
///
/// Only the presence of the key matters, not its value.
pub fn is_pull_request(record: &Value) -> bool {
    record
        .as_object()
        .is_some_and(|obj| obj.contains_key(PULL_REQUEST_KEY))
}

/// Parse export content into raw records.
pub fn parse_records(content: &str) -> Result<Vec<Value>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Read and parse an issues export file.
pub fn load_records(path: &Path) -> Result<Vec<Value>, BacklogError> {
    let content = fs::read_to_string(path).map_err(|source| BacklogError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content).map_err(|source| BacklogError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}
