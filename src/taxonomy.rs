//! Two-level category/subcategory taxonomy and its classification rules.

use once_cell::sync::Lazy;

/// Category that absorbs issues matching no rule.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";
/// Subcategory that absorbs issues matching no rule.
pub const FALLBACK_SUBCATEGORY: &str = "Other";

/// Suffix stripped from a keyword to get its clean form.
const KEYWORD_DECORATION: &str = ".do";

/// A category and its subcategories, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub subcategories: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, subcategories: &[&str]) -> Self {
        Self {
            name: name.into(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A keyword rule mapping a subcategory name to its place in the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Lowercase subcategory name.
    pub keyword: String,
    /// `keyword` with the `.do` decoration removed.
    pub clean_keyword: String,
    pub category: String,
    /// Subcategory name with its original casing.
    pub subcategory: String,
}

impl Rule {
    fn new(category: &str, subcategory: &str) -> Self {
        let keyword = subcategory.to_lowercase();
        let clean_keyword = keyword.replace(KEYWORD_DECORATION, "");
        Self {
            keyword,
            clean_keyword,
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        }
    }
}

/// The category tree plus the ordered rules derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<Category>,
    rules: Vec<Rule>,
}

impl Taxonomy {
    /// Build a taxonomy and its rule list.
    ///
    /// Rules follow declaration order: categories first, then subcategories
    /// within each category. When two subcategories share a lowercase keyword
    /// the rule stays at the first position but points at the later one.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut rules: Vec<Rule> = Vec::new();
        for category in &categories {
            for subcategory in &category.subcategories {
                let rule = Rule::new(&category.name, subcategory);
                match rules.iter_mut().find(|r| r.keyword == rule.keyword) {
                    Some(existing) => *existing = rule,
                    None => rules.push(rule),
                }
            }
        }
        Self { categories, rules }
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Classification rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Taxonomy::clone(&DEFAULT_TAXONOMY)
    }
}

/// The built-in product taxonomy.
pub static DEFAULT_TAXONOMY: Lazy<Taxonomy> = Lazy::new(|| {
    Taxonomy::new(vec![
        Category::new("Core Primitives", &["Functions.do", "Workflows.do", "Agents.do"]),
        Category::new("Event System", &["Triggers.do", "Searches.do", "Actions.do"]),
        Category::new(
            "Foundation Components",
            &["LLM.do", "Database.do", "Evals.do", "Integrations.do"],
        ),
        Category::new("API Experience", &["APIs.do"]),
        Category::new("SDK Development", &["SDK General"]),
        Category::new("Documentation & Website", &["Docs", "Website"]),
        Category::new("Infrastructure", &["Domain Routing", "Analytics & Monitoring"]),
        Category::new(FALLBACK_CATEGORY, &[FALLBACK_SUBCATEGORY]),
    ])
});
