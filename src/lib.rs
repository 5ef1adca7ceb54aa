//! Backlog: generates a Markdown backlog from a cached GitHub issues export.
//!
//! The pipeline runs once per invocation:
//! - load the export (a JSON array of issue records)
//! - partition the issues into a category → subcategory hierarchy by
//!   first-match keyword classification, skipping pull requests
//! - render the hierarchy as Markdown with a table of contents
//! - save the document, replacing any previous version

pub mod classify;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod hierarchy;
pub mod issue;
pub mod log;
pub mod render;
pub mod taxonomy;
#[doc(hidden)]
pub mod testutil;

pub use error::BacklogError;
pub use generator::{BacklogGenerator, RunReport};
