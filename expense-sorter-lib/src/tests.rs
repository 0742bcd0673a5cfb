use anyhow::Result;
use insta::assert_snapshot;
use test_case::test_case;

use crate::{
    categorizer::Categorizer,
    category::CategoryRegistry,
    export::encode_summary_csv,
    summary::Summary,
    transaction::{ColumnMapping, CsvTable, TransactionStore},
    util::format_percentage,
};

fn import(categorizer: &Categorizer, statement: &str) -> Result<TransactionStore> {
    let mapping = ColumnMapping::from_yaml_file("tests/column_mapping_simple.yaml")?;
    let table = CsvTable::from_csv_file(statement)?;
    let mut store = TransactionStore::new();
    store.import(&table, &mapping, categorizer)?;
    Ok(store)
}

#[test_case(None, "tests/statement_simple.csv", "default_simple"; "default simple")]
#[test_case(Some("tests/categorizer_custom.yaml"), "tests/statement_simple.csv", "custom_simple"; "custom simple")]
#[test_case(None, "tests/statement_empty.csv", "default_empty"; "default empty")]
fn test_export(categorizer: Option<&str>, statement: &str, name: &str) -> Result<()> {
    let categorizer = match categorizer {
        Some(path) => Categorizer::from_yaml_file(path)?,
        None => Categorizer::default(),
    };
    let store = import(&categorizer, statement)?;
    let summary = Summary::from_transactions(store.transactions());
    assert_snapshot!(name, encode_summary_csv(&summary.categories));
    Ok(())
}

#[test]
fn test_import_statement() -> Result<()> {
    let store = import(&Categorizer::default(), "tests/statement_simple.csv")?;
    let imported = store
        .transactions()
        .iter()
        .map(|t| (u64::from(t.id), t.description.as_str(), t.category.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        imported,
        [
            (1, "STARBUCKS #123", "Meals & Entertainment"),
            (2, "Uber Trip", "Travel"),
            (3, "Office Depot", "Office Supplies"),
            (5, "Mystery Vendor", "Uncategorized"),
            (6, "Delta Airline", "Travel"),
            (7, "STARBUCKS #456", "Meals & Entertainment"),
        ]
    );

    let summary = Summary::from_transactions(store.transactions());
    let percentages = summary
        .categories
        .iter()
        .map(|c| format_percentage(&summary.percentage(&c.total)))
        .collect::<Vec<_>>();
    assert_eq!(percentages, ["83.5", "11.1", "3.0", "2.5"]);
    assert_eq!(summary.uncategorized_count, 1);
    Ok(())
}

#[test]
fn test_edit_categories() -> Result<()> {
    let mut store = import(&Categorizer::default(), "tests/statement_simple.csv")?;
    let mut registry = CategoryRegistry::with_default_categories();

    assert!(registry.rename("Travel", "Trips", &mut store));
    assert_eq!(registry.categories()[1], "Trips");
    assert!(registry.remove("Office Supplies", &mut store));
    assert!(store.set_category(5u64.into(), "Other"));

    assert_eq!(
        registry.categories(),
        [
            "Trips",
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
        ]
    );

    let summary = Summary::from_transactions(store.transactions());
    assert_eq!(summary.uncategorized_count, 1);
    assert_eq!(
        encode_summary_csv(&summary.categories),
        "Category,Total Amount
Trips,338.20
Uncategorized,45.00
Other,12.05
Meals & Entertainment,10.00"
    );
    Ok(())
}
