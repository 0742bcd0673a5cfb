use bigdecimal::BigDecimal;
use derive_more::{Display, From, Into};
use displaydoc::Display as DisplayDoc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use mapping::*;
pub use parser::*;
pub use store::*;

mod mapping;
mod parser;
mod store;

#[derive(Error, Debug, DisplayDoc)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// csv: {0}
    Csv(#[from] csv::Error),
    /// serde_yaml: {0}
    SerdeYaml(#[from] serde_yaml::Error),
    /// column mapping is missing: {0:?}
    IncompleteMapping(Vec<Field>),
}

/// Session unique transaction identifier
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deserialize,
    Serialize,
)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl Default for TransactionId {
    /// Ids start at one
    fn default() -> Self {
        Self(1)
    }
}

impl TransactionId {
    pub(crate) fn offset(self, by: usize) -> Self {
        Self(self.0.saturating_add(by as u64))
    }
}

/// Transaction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    /// Identifier assigned on import
    pub id: TransactionId,
    /// Date of the transaction as written in the statement
    pub date: String,
    /// Description of the transaction
    pub description: String,
    /// Absolute amount of the transaction, always positive
    pub amount: BigDecimal,
    /// Category the transaction is assigned to
    pub category: String,
}
