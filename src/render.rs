//! Markdown rendering of a backlog hierarchy.
//!
//! Output format:
//! ```text
//! # AI Primitives Backlog
//!
//! <description>
//!
//! ## Table of Contents
//!
//! - [Category](#category)
//!   - [Sub.do](#subdo)
//!
//! ## Category
//!
//! ### Sub.do
//!
//! - [#42](https://...): Title [label, label]
//! ```

use std::fmt::Write;

use crate::hierarchy::Hierarchy;
use crate::issue::Issue;

/// Document title line.
pub const TITLE: &str = "# AI Primitives Backlog";

/// Paragraph under the title.
pub const DESCRIPTION: &str = "This document organizes all open issues in the drivly/ai repository \
into a hierarchical structure, providing a comprehensive view of the current development backlog.";

/// Anchor for a category heading.
pub fn category_anchor(name: &str) -> String {
    name.to_lowercase().replace(' ', "-").replace('&', "and")
}

/// Anchor for a subcategory heading. Periods are dropped as well.
pub fn subcategory_anchor(name: &str) -> String {
    category_anchor(name).replace('.', "")
}

/// Format one issue as a list line.
pub fn issue_line(issue: &Issue) -> String {
    let labels = issue.label_names();
    let label_suffix = if labels.is_empty() {
        String::new()
    } else {
        format!(" [{}]", labels.join(", "))
    };
    format!(
        "- [#{}]({}): {}{}",
        issue.number, issue.html_url, issue.title, label_suffix
    )
}

/// Render the full backlog document.
pub fn render(hierarchy: &Hierarchy) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}\n", TITLE);
    let _ = writeln!(out, "{}\n", DESCRIPTION);
    let _ = writeln!(out, "## Table of Contents\n");

    for (category, subcategories) in hierarchy.categories() {
        let _ = writeln!(out, "- [{}](#{})", category, category_anchor(category));
        for subcategory in subcategories.keys() {
            let _ = writeln!(out, "  - [{}](#{})", subcategory, subcategory_anchor(subcategory));
        }
    }
    out.push('\n');

    for (category, subcategories) in hierarchy.categories() {
        let _ = writeln!(out, "## {}\n", category);

        for (subcategory, issues) in subcategories {
            let _ = writeln!(out, "### {}\n", subcategory);

            let mut sorted: Vec<&Issue> = issues.iter().collect();
            sorted.sort_by_key(|issue| issue.number);
            for issue in sorted {
                out.push_str(&issue_line(issue));
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out
}
