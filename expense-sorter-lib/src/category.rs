use log::debug;
use serde::{Deserialize, Serialize};

use crate::transaction::TransactionStore;

#[cfg(test)]
mod tests;

/// Fallback category for transactions no rule matched
///
/// It is always available for assignment and never stored in a [`CategoryRegistry`].
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Categories a fresh registry starts with
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Office Supplies",
    "Travel",
    "Meals & Entertainment",
    "Professional Services",
    "Marketing & Advertising",
    "Utilities",
    "Rent/Lease",
    "Insurance",
    "Software & Subscriptions",
    "Equipment",
    "Bank Fees",
    "Other",
];

/// Ordered set of user editable categories
///
/// Names are case sensitive and unique. Insertion order is display order. Renames and removals
/// cascade into the [`TransactionStore`] they are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    categories: Vec<String>,
}

impl CategoryRegistry {
    /// Empty registry, every transaction then shows as uncategorized
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_categories() -> Self {
        let mut registry = Self::new();
        for category in DEFAULT_CATEGORIES {
            registry.add(category);
        }
        registry
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories a transaction can be assigned to, starting with [`UNCATEGORIZED`]
    pub fn options(&self) -> impl Iterator<Item = &str> {
        std::iter::once(UNCATEGORIZED).chain(self.categories.iter().map(String::as_str))
    }

    /// Append a category
    ///
    /// Returns false without changes when the trimmed name is empty, reserved or already present.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == UNCATEGORIZED || self.contains(name) {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }

    /// Rename a category in place and retag its transactions
    ///
    /// Nothing happens when the trimmed new name is empty or equal to the old name, or when the
    /// old name is [`UNCATEGORIZED`]. Renaming onto an existing category merges the two. Renaming
    /// onto [`UNCATEGORIZED`] is a [`remove`](Self::remove).
    pub fn rename(&mut self, old_name: &str, new_name: &str, store: &mut TransactionStore) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() || new_name == old_name || old_name == UNCATEGORIZED {
            return false;
        }
        if new_name == UNCATEGORIZED {
            return self.remove(old_name, store);
        }

        if self.contains(new_name) {
            self.categories.retain(|c| c != old_name);
        } else if let Some(category) = self.categories.iter_mut().find(|c| *c == old_name) {
            *category = new_name.to_string();
        }
        let retagged = store.rename_category_everywhere(old_name, new_name);
        debug!("renamed category {old_name:?} to {new_name:?}, retagged {retagged} transactions");
        true
    }

    /// Remove a category, its transactions become [`UNCATEGORIZED`]
    ///
    /// Transactions are cleared even when the name was not registered, so a category assigned
    /// by a custom rule table can still be dropped. Returns whether the registry changed.
    pub fn remove(&mut self, name: &str, store: &mut TransactionStore) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        let cleared = store.clear_category_everywhere(name);
        debug!("removed category {name:?}, cleared {cleared} transactions");
        self.categories.len() != before
    }
}
