use serde::{Deserialize, Serialize};
use serde_with::{formats::PreferOne, serde_as, OneOrMany};

/// Keywords that assign a description to a category
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordRule {
    /// Category name for this rule
    pub category: String,
    /// Lowercase substrings checked in order against the description
    #[serde_as(as = "OneOrMany<_, PreferOne>")]
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<C, K, I>(category: C, keywords: I) -> Self
    where
        C: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        Self {
            category: category.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// First keyword contained in an already lowercased description
    pub fn find_match(&self, lowercase_description: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| lowercase_description.contains(keyword))
    }

    /// Check if an already lowercased description is a match
    pub fn matches(&self, lowercase_description: &str) -> bool {
        self.find_match(lowercase_description).is_some()
    }
}
