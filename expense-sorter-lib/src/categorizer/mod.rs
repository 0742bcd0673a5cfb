use std::{
    collections::HashSet,
    fs::File,
    io::{BufReader, Cursor, Read},
    path::Path,
};

use displaydoc::Display;
use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{category::UNCATEGORIZED, util};

pub use keyword_rule::*;

mod defaults;
mod keyword_rule;

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// serde_yaml: {0}
    SerdeYaml(#[from] serde_yaml::Error),
    /// duplicate categories in keyword rules: {0:?}
    DuplicateCategories(HashSet<String>),
    /// empty keyword in rule for category `{0}`
    EmptyKeyword(String),
}

/// Keyword categorizer
///
/// Rules are checked in declaration order and the keywords of each rule in their declared order.
/// The first keyword found in a description decides its category, so an earlier rule always
/// takes precedence over a later one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Categorizer {
    rules: Vec<KeywordRule>,
}

impl Default for Categorizer {
    /// Categorizer using the built-in keyword table
    fn default() -> Self {
        Self {
            rules: defaults::DEFAULT_RULES
                .iter()
                .map(|(category, keywords)| KeywordRule::new(*category, keywords.iter().copied()))
                .collect(),
        }
    }
}

impl Categorizer {
    /// Create a new categorizer from rules, lowercasing their keywords
    pub fn from_rules(rules: Vec<KeywordRule>) -> Result<Self, Error> {
        let mut categorizer = Self { rules };
        categorizer.validate_rules()?;
        for rule in &mut categorizer.rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        Ok(categorizer)
    }

    /// Create a new categorizer from a yaml file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Create a new categorizer from a yaml buffer
    pub fn from_yaml_buffer<B: AsRef<[u8]>>(buffer: B) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(buffer))
    }

    /// Create a new categorizer from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let reader = BufReader::new(reader);
        let categorizer = serde_yaml::from_reader::<_, Self>(reader)?;
        Self::from_rules(categorizer.rules)
    }

    /// Validate rules:
    /// * no duplicate categories
    /// * no empty keywords, which would match every description
    pub fn validate_rules(&self) -> Result<(), Error> {
        let (_, duplicates) = util::vec_to_hashsets(self.rules.iter().map(|r| r.category.as_str()));
        if !duplicates.is_empty() {
            return Err(Error::DuplicateCategories(
                duplicates.into_iter().map(Into::into).collect(),
            ));
        }
        if let Some(rule) = self
            .rules
            .iter()
            .find(|r| r.keywords.iter().any(|k| k.trim().is_empty()))
        {
            return Err(Error::EmptyKeyword(rule.category.clone()));
        }
        Ok(())
    }

    /// Rules in precedence order
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Category of the first rule with a keyword contained in the description, ignoring case
    pub fn classify(&self, description: &str) -> &str {
        let description = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&description))
            .map(|rule| rule.category.as_str())
            .unwrap_or_else(|| {
                trace!("no keyword matched {description:?}");
                UNCATEGORIZED
            })
    }
}
