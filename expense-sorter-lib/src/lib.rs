//! Keyword based expense categorization for csv bank and credit card statements
//!
//! A statement is parsed into a [`transaction::CsvTable`], its columns are mapped to transactions
//! with a [`transaction::ColumnMapping`] and every transaction is categorized by the first
//! matching rule of a [`categorizer::Categorizer`]. Transactions live in a
//! [`transaction::TransactionStore`], categories can be edited through a
//! [`category::CategoryRegistry`] and the result is reduced to a [`summary::Summary`] which
//! [`export`] encodes as csv.

pub mod categorizer;
pub mod category;
pub mod export;
pub mod summary;
pub mod transaction;
pub mod util;

#[cfg(test)]
mod tests;
