use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::{CategoryRegistry, DEFAULT_CATEGORIES, UNCATEGORIZED};
use crate::transaction::{Transaction, TransactionStore};

fn store(categories: &[&str]) -> TransactionStore {
    let mut store = TransactionStore::new();
    store.append(
        categories
            .iter()
            .enumerate()
            .map(|(i, category)| Transaction {
                id: (i as u64 + 1).into(),
                date: "2024-05-01".into(),
                description: format!("transaction {i}"),
                amount: BigDecimal::from_str("9.99").unwrap(),
                category: category.to_string(),
            })
            .collect(),
    );
    store
}

fn registry(categories: &[&str]) -> CategoryRegistry {
    let mut registry = CategoryRegistry::new();
    for category in categories {
        assert!(registry.add(category));
    }
    registry
}

fn categories(store: &TransactionStore) -> Vec<&str> {
    store
        .transactions()
        .iter()
        .map(|t| t.category.as_str())
        .collect()
}

#[test]
fn test_default_categories() {
    let registry = CategoryRegistry::with_default_categories();
    assert_eq!(registry.categories(), DEFAULT_CATEGORIES);
    assert!(!registry.contains(UNCATEGORIZED));
    assert!(CategoryRegistry::new().is_empty());
}

#[test]
fn test_add() {
    let mut registry = registry(&["Travel"]);
    assert!(registry.add("  Hobbies "));
    assert!(!registry.add("Hobbies"));
    assert!(!registry.add("   "));
    assert!(!registry.add(UNCATEGORIZED));
    assert!(registry.add("hobbies"));
    assert_eq!(registry.categories(), ["Travel", "Hobbies", "hobbies"]);
}

#[test]
fn test_options() {
    let registry = registry(&["Travel", "Meals"]);
    assert_eq!(
        registry.options().collect::<Vec<_>>(),
        [UNCATEGORIZED, "Travel", "Meals"]
    );
}

#[test]
fn test_rename_cascades() {
    let mut registry = registry(&["Meals", "Travel", "Other"]);
    let mut store = store(&["Travel", "Meals", "Travel"]);

    assert!(registry.rename("Travel", " Trips ", &mut store));

    assert_eq!(registry.categories(), ["Meals", "Trips", "Other"]);
    assert_eq!(categories(&store), ["Trips", "Meals", "Trips"]);
}

#[test]
fn test_rename_no_ops() {
    let mut registry = registry(&["Travel"]);
    let mut store = store(&["Travel", UNCATEGORIZED]);

    assert!(!registry.rename("Travel", "  ", &mut store));
    assert!(!registry.rename("Travel", "Travel ", &mut store));
    assert!(!registry.rename(UNCATEGORIZED, "Misc", &mut store));

    assert_eq!(registry.categories(), ["Travel"]);
    assert_eq!(categories(&store), ["Travel", UNCATEGORIZED]);
}

#[test]
fn test_rename_onto_existing_merges() {
    let mut registry = registry(&["Taxi", "Travel"]);
    let mut store = store(&["Taxi", "Travel"]);

    assert!(registry.rename("Taxi", "Travel", &mut store));

    assert_eq!(registry.categories(), ["Travel"]);
    assert_eq!(categories(&store), ["Travel", "Travel"]);
}

#[test]
fn test_rename_onto_uncategorized_removes() {
    let mut registry = registry(&["Travel", "Meals"]);
    let mut store = store(&["Travel", "Meals"]);

    assert!(registry.rename("Travel", UNCATEGORIZED, &mut store));

    assert_eq!(registry.categories(), ["Meals"]);
    assert_eq!(categories(&store), [UNCATEGORIZED, "Meals"]);
}

#[test]
fn test_remove_cascades() {
    let mut registry = registry(&["Travel", "Meals"]);
    let mut store = store(&["Travel", "Meals", "Travel"]);

    assert!(registry.remove("Travel", &mut store));

    assert_eq!(registry.categories(), ["Meals"]);
    assert_eq!(categories(&store), [UNCATEGORIZED, "Meals", UNCATEGORIZED]);
    assert_eq!(store.uncategorized().count(), 2);
}

#[test]
fn test_remove_unknown() {
    let mut registry = registry(&["Meals"]);
    let mut store = store(&["Meals", "Coffee"]);

    assert!(!registry.remove("Travel", &mut store));
    assert_eq!(registry.categories(), ["Meals"]);
    assert_eq!(categories(&store), ["Meals", "Coffee"]);

    assert!(!registry.remove("Coffee", &mut store));
    assert_eq!(categories(&store), ["Meals", UNCATEGORIZED]);
}

#[test]
fn test_empty_registry_is_valid() {
    let mut registry = registry(&["Travel"]);
    let mut store = store(&["Travel"]);
    assert!(registry.remove("Travel", &mut store));
    assert!(registry.is_empty());
    assert_eq!(registry.options().collect::<Vec<_>>(), [UNCATEGORIZED]);
    assert_eq!(categories(&store), [UNCATEGORIZED]);
}
