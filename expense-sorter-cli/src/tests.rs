use clap::Parser;
use test_case::test_case;

use crate::{column_mapping, parse_pair, Args, Command};

#[test_case("Travel=Trips", Some(("Travel", "Trips")))]
#[test_case("12=Rent/Lease", Some(("12", "Rent/Lease")))]
#[test_case("a=b=c", Some(("a", "b=c")))]
#[test_case("Travel", None)]
fn test_parse_pair(input: &str, expected: Option<(&str, &str)>) {
    let parsed = parse_pair(input).ok();
    assert_eq!(
        parsed.as_ref().map(|(k, v)| (k.as_str(), v.as_str())),
        expected
    );
}

#[test]
fn test_args_edits_and_export() {
    let args = Args::try_parse_from([
        "expense-sorter",
        "--statement-path-pattern",
        "statements/*.csv",
        "--rename-category",
        "Travel=Trips",
        "--rename-category",
        "Other=Misc",
        "--assign",
        "3=Equipment",
        "export",
    ])
    .unwrap();
    assert_eq!(
        args.rename_category,
        [
            ("Travel".to_string(), "Trips".to_string()),
            ("Other".to_string(), "Misc".to_string()),
        ]
    );
    assert_eq!(args.assign, [("3".to_string(), "Equipment".to_string())]);
    match args.command {
        Command::Export { output } => assert_eq!(output.to_str(), Some("expense-summary.csv")),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_column_mapping_flags() {
    let args = Args::try_parse_from([
        "expense-sorter",
        "--statement-path-pattern",
        "*.csv",
        "--date-column",
        "Posted Date",
        "--description-column",
        "Payee",
        "--amount-column",
        "Debit",
        "summary",
    ])
    .unwrap();
    let mapping = column_mapping(&args).unwrap();
    assert_eq!(mapping.date, "Posted Date");
    assert_eq!(mapping.description, "Payee");
    assert_eq!(mapping.amount, "Debit");
}

#[test]
fn test_column_mapping_incomplete() {
    let args = Args::try_parse_from([
        "expense-sorter",
        "--statement-path-pattern",
        "*.csv",
        "--date-column",
        "Posted Date",
        "summary",
    ])
    .unwrap();
    let error = column_mapping(&args).unwrap_err().to_string();
    assert!(error.contains("description, amount"), "{error}");
}
