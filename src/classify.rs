//! Keyword classification of issues.
//!
//! Rules are evaluated in taxonomy declaration order and the first match
//! wins. A rule matches when its clean or raw keyword occurs anywhere in the
//! lowercased title or body, so incidental substrings count as matches.

use crate::issue::Issue;
use crate::taxonomy::{Taxonomy, FALLBACK_CATEGORY, FALLBACK_SUBCATEGORY};

/// The bucket an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub category: &'a str,
    pub subcategory: &'a str,
}

impl Classification<'static> {
    /// The catch-all bucket.
    pub const FALLBACK: Self = Self {
        category: FALLBACK_CATEGORY,
        subcategory: FALLBACK_SUBCATEGORY,
    };
}

/// Classify an issue against a taxonomy.
pub fn classify<'a>(issue: &Issue, taxonomy: &'a Taxonomy) -> Classification<'a> {
    classify_text(&issue.title, issue.body_text(), taxonomy)
}

/// Classify a title/body pair against a taxonomy.
pub fn classify_text<'a>(title: &str, body: &str, taxonomy: &'a Taxonomy) -> Classification<'a> {
    let title = title.to_lowercase();
    let body = body.to_lowercase();

    for rule in taxonomy.rules() {
        let matched = [&rule.clean_keyword, &rule.keyword]
            .iter()
            .any(|kw| title.contains(kw.as_str()) || body.contains(kw.as_str()));
        if matched {
            return Classification {
                category: &rule.category,
                subcategory: &rule.subcategory,
            };
        }
    }

    Classification::FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Category;

    fn check(title: &str, body: &str) -> (String, String) {
        let taxonomy = Taxonomy::default();
        let c = classify_text(title, body, &taxonomy);
        (c.category.to_string(), c.subcategory.to_string())
    }

    #[test]
    fn test_clean_keyword_in_title() {
        assert_eq!(
            check("Add retry support to Workflows.do", ""),
            ("Core Primitives".to_string(), "Workflows.do".to_string())
        );
        assert_eq!(
            check("LLM gateway rate limits", ""),
            ("Foundation Components".to_string(), "LLM.do".to_string())
        );
    }

    #[test]
    fn test_match_in_body() {
        assert_eq!(
            check("Something is broken", "It happens in the website footer"),
            ("Documentation & Website".to_string(), "Website".to_string())
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            check("DOMAIN ROUTING fails", ""),
            ("Infrastructure".to_string(), "Domain Routing".to_string())
        );
    }

    #[test]
    fn test_first_match_wins_by_declaration_order() {
        // "agents" is declared before "database" regardless of text position.
        assert_eq!(
            check("Database schema for agents", ""),
            ("Core Primitives".to_string(), "Agents.do".to_string())
        );
        // A body match on an earlier rule beats a title match on a later one.
        assert_eq!(
            check("Evals dashboard", "needed by functions"),
            ("Core Primitives".to_string(), "Functions.do".to_string())
        );
    }

    #[test]
    fn test_substring_false_positive_is_preserved() {
        // "transactions" contains "actions".
        assert_eq!(
            check("Transactions are slow", ""),
            ("Event System".to_string(), "Actions.do".to_string())
        );
    }

    #[test]
    fn test_no_match_falls_back() {
        assert_eq!(
            check("Improve build speed", "nothing relevant here"),
            ("Uncategorized".to_string(), "Other".to_string())
        );
    }

    #[test]
    fn test_classify_issue_without_body() {
        let taxonomy = Taxonomy::default();
        let issue = Issue {
            number: 7,
            title: "SDK general cleanup".to_string(),
            body: None,
            html_url: "https://x/7".to_string(),
            labels: Vec::new(),
        };
        let c = classify(&issue, &taxonomy);
        assert_eq!(c.category, "SDK Development");
        assert_eq!(c.subcategory, "SDK General");
    }

    #[test]
    fn test_custom_taxonomy_without_fallback_category() {
        let taxonomy = Taxonomy::new(vec![Category::new("Only", &["Widgets"])]);
        assert_eq!(classify_text("widgets!", "", &taxonomy).subcategory, "Widgets");
        assert_eq!(classify_text("gadgets", "", &taxonomy), Classification::FALLBACK);
    }
}
