use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use csv::Writer;
use expense_sorter_lib::{
    categorizer::Categorizer,
    category::{CategoryRegistry, UNCATEGORIZED},
    export::{self, SUMMARY_FILE_NAME},
    summary::Summary,
    transaction::{ColumnMapping, CsvTable, TransactionId, TransactionStore},
    util::{format_bigdecimal, format_percentage},
};
use slog::{info, warn, Logger};
use sloggers::{
    terminal::{Destination, TerminalLoggerBuilder},
    types::{Severity, SourceLocation},
    Build,
};

#[cfg(test)]
mod tests;

/// Categorize csv bank and credit card statements by keyword
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// File glob pattern of statement csv files to import
    #[arg(long)]
    statement_path_pattern: String,
    /// Path to yaml config file mapping statement columns to transaction fields
    #[arg(long)]
    column_mapping_path: Option<PathBuf>,
    /// Column holding the transaction date
    #[arg(long)]
    date_column: Option<String>,
    /// Column holding the transaction description
    #[arg(long)]
    description_column: Option<String>,
    /// Column holding the transaction amount
    #[arg(long)]
    amount_column: Option<String>,
    /// Path to yaml config file replacing the built-in keyword rules
    #[arg(long)]
    categorizer_path: Option<PathBuf>,
    /// Category to add after the default categories
    #[arg(long)]
    add_category: Vec<String>,
    /// Category to rename, as OLD=NEW
    #[arg(long, value_parser = parse_pair)]
    rename_category: Vec<(String, String)>,
    /// Category to delete, its transactions become uncategorized
    #[arg(long)]
    delete_category: Vec<String>,
    /// Category to assign to a transaction, as ID=CATEGORY
    #[arg(long, value_parser = parse_pair)]
    assign: Vec<(String, String)>,
    /// Log level
    #[arg(long)]
    log_level: Option<Severity>,
    // Subcommands
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
#[command()]
enum Command {
    /// Output the columns of each statement file
    #[command()]
    Headers,
    /// Output the categorized transactions csv
    #[command()]
    Transactions {
        /// Only output transactions no rule or edit categorized
        #[arg(long)]
        uncategorized_only: bool,
    },
    /// Output the per category summary
    #[command()]
    Summary,
    /// Write the per category summary csv
    #[command()]
    Export {
        /// Path of the written csv file
        #[arg(long, default_value = SUMMARY_FILE_NAME)]
        output: PathBuf,
    },
}

fn parse_pair(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got `{s}`"))?;
    Ok((key.to_string(), value.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let logger = TerminalLoggerBuilder::new()
        .level(args.log_level.unwrap_or_default())
        .destination(Destination::Stderr)
        .source_location(SourceLocation::None)
        .build()?;
    let _scope_guard = slog_scope::set_global_logger(logger.clone());
    slog_stdlog::init().context("failed to forward library logs")?;

    let statement_files = glob::glob(&args.statement_path_pattern)?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to find statement files")?;
    let statement_files = statement_files
        .iter()
        .filter(|f| f.is_file())
        .map(|f| f.as_path())
        .collect::<Vec<_>>();
    if statement_files.is_empty() {
        warn!(logger, "no statement files matched"; "pattern" => &args.statement_path_pattern);
    }

    match &args.command {
        Command::Headers => {
            for path in statement_files {
                let table = read_statement(path)?;
                println!("{}: {}", path.display(), table.headers().join(", "));
            }
        }
        Command::Transactions { uncategorized_only } => {
            let store = load(&args, &logger, &statement_files)?;
            let mut writer = Writer::from_writer(io::stdout());
            for transaction in store.transactions() {
                if !uncategorized_only || transaction.category == UNCATEGORIZED {
                    writer.serialize(transaction)?;
                }
            }
            writer.flush()?;
        }
        Command::Summary => {
            let store = load(&args, &logger, &statement_files)?;
            print_summary(&Summary::from_transactions(store.transactions()));
        }
        Command::Export { output } => {
            let store = load(&args, &logger, &statement_files)?;
            let summary = Summary::from_transactions(store.transactions());
            export::write_summary_csv(output, &summary.categories)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!(logger, "exported summary"; "path" => %output.display(), "categories" => summary.categories.len());
        }
    }
    Ok(())
}

/// Import every statement and apply the category edits
fn load(args: &Args, logger: &Logger, statement_files: &[&Path]) -> Result<TransactionStore> {
    let categorizer = match &args.categorizer_path {
        Some(path) => Categorizer::from_yaml_file(path).context("failed to parse categorizer")?,
        None => Categorizer::default(),
    };
    let mapping = column_mapping(args)?;

    let mut store = TransactionStore::new();
    for path in statement_files {
        let table = read_statement(path)?;
        if table.is_empty() {
            warn!(logger, "statement has no rows"; "path" => %path.display());
            continue;
        }
        let imported = store
            .import(&table, &mapping, &categorizer)
            .with_context(|| format!("failed to import {}", path.display()))?;
        info!(logger, "imported statement"; "path" => %path.display(), "transactions" => imported);
    }

    let mut registry = CategoryRegistry::with_default_categories();
    apply_edits(args, logger, &mut registry, &mut store)?;
    Ok(store)
}

fn read_statement(path: &Path) -> Result<CsvTable> {
    CsvTable::from_csv_file(path).with_context(|| format!("failed to parse {}", path.display()))
}

/// Mapping from the config file, overridden by the column flags
fn column_mapping(args: &Args) -> Result<ColumnMapping> {
    let mut mapping = match &args.column_mapping_path {
        Some(path) => {
            ColumnMapping::from_yaml_file(path).context("failed to parse column mapping")?
        }
        None => ColumnMapping::default(),
    };
    if let Some(date) = &args.date_column {
        mapping.date = date.clone();
    }
    if let Some(description) = &args.description_column {
        mapping.description = description.clone();
    }
    if let Some(amount) = &args.amount_column {
        mapping.amount = amount.clone();
    }
    let missing = mapping.missing_fields();
    if !missing.is_empty() {
        let missing = missing.iter().map(ToString::to_string).collect::<Vec<_>>();
        bail!(
            "select a column for {} with --{{field}}-column or --column-mapping-path, \
             the `headers` command lists the available columns",
            missing.join(", ")
        );
    }
    Ok(mapping)
}

/// Apply category edits in order: additions, renames, deletions, assignments
fn apply_edits(
    args: &Args,
    logger: &Logger,
    registry: &mut CategoryRegistry,
    store: &mut TransactionStore,
) -> Result<()> {
    for name in &args.add_category {
        if !registry.add(name) {
            info!(logger, "category not added"; "category" => name);
        }
    }
    for (old_name, new_name) in &args.rename_category {
        if !registry.rename(old_name, new_name, store) {
            info!(logger, "category not renamed"; "from" => old_name, "to" => new_name);
        }
    }
    for name in &args.delete_category {
        if !registry.remove(name, store) {
            info!(logger, "category not registered"; "category" => name);
        }
    }
    for (id, category) in &args.assign {
        let id = id
            .parse::<u64>()
            .map(TransactionId::from)
            .with_context(|| format!("invalid transaction id `{id}`"))?;
        if !registry.options().any(|option| option == category) {
            info!(logger, "assigning unregistered category"; "category" => category);
        }
        if !store.set_category(id, category) {
            info!(logger, "transaction not found"; "id" => %id);
        }
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("Total expenses: {}", format_bigdecimal(&summary.total));
    println!("Uncategorized transactions: {}", summary.uncategorized_count);
    for category in &summary.categories {
        println!(
            "{:>14}  {:>5}%  {:>4}  {}",
            format_bigdecimal(&category.total),
            format_percentage(&summary.percentage(&category.total)),
            category.count,
            category.category
        );
    }
}
