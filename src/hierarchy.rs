//! Grouping of classified issues into categories and subcategories.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::classify;
use crate::error::BacklogError;
use crate::issue::{self, Issue};
use crate::taxonomy::Taxonomy;

/// Issues grouped by category, then subcategory.
///
/// Both levels iterate in lexicographic order. Buckets keep issues in input
/// order; sorting by number is left to rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    categories: BTreeMap<String, BTreeMap<String, Vec<Issue>>>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an issue to a bucket, creating it if needed.
    pub fn insert(&mut self, category: &str, subcategory: &str, issue: Issue) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .entry(subcategory.to_string())
            .or_default()
            .push(issue);
    }

    /// Categories with their subcategory buckets, in lexicographic order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, Vec<Issue>>)> {
        self.categories.iter().map(|(name, subs)| (name.as_str(), subs))
    }

    /// Issues in a bucket, if it exists.
    pub fn bucket(&self, category: &str, subcategory: &str) -> Option<&[Issue]> {
        self.categories
            .get(category)
            .and_then(|subs| subs.get(subcategory))
            .map(Vec::as_slice)
    }

    /// Number of categories with at least one issue.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of issues across all buckets.
    pub fn issue_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|subs| subs.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Counts gathered during a partition pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionSummary {
    /// Records in the input.
    pub records: usize,
    /// Records skipped as pull requests.
    pub pull_requests: usize,
    /// Issues placed into a bucket.
    pub issues: usize,
}

/// Classify every non-pull-request record into a hierarchy.
///
/// Pull requests are skipped before any shape check. Stops at the first
/// record that cannot be decoded as an issue.
pub fn partition(
    records: Vec<Value>,
    taxonomy: &Taxonomy,
) -> Result<(Hierarchy, PartitionSummary), BacklogError> {
    let mut hierarchy = Hierarchy::new();
    let mut summary = PartitionSummary {
        records: records.len(),
        ..Default::default()
    };

    for (index, record) in records.into_iter().enumerate() {
        if issue::is_pull_request(&record) {
            summary.pull_requests += 1;
            continue;
        }

        let issue = Issue::from_value(record)
            .map_err(|source| BacklogError::RecordShape { index, source })?;
        let class = classify::classify(&issue, taxonomy);
        hierarchy.insert(class.category, class.subcategory, issue);
        summary.issues += 1;
    }

    Ok((hierarchy, summary))
}
