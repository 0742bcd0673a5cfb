use std::{
    fs::File,
    io::{BufReader, Cursor, Read},
    path::Path,
};

use bigdecimal::{BigDecimal, Zero};
use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::{Error, RawValue, Row, Transaction, TransactionId};
use crate::{categorizer::Categorizer, util};

/// Logical transaction field a statement column is mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Deserialize, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Date,
    Description,
    Amount,
}

/// Which statement column holds each transaction field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnMapping {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: String,
}

impl ColumnMapping {
    pub fn new<D, S, A>(date: D, description: S, amount: A) -> Self
    where
        D: Into<String>,
        S: Into<String>,
        A: Into<String>,
    {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Create a new column mapping from a yaml file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Create a new column mapping from a yaml buffer
    pub fn from_yaml_buffer<B: AsRef<[u8]>>(buffer: B) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(buffer))
    }

    /// Create a new column mapping from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let reader = BufReader::new(reader);
        Ok(serde_yaml::from_reader::<_, Self>(reader)?)
    }

    /// Column selected for a field
    pub fn column(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Description => &self.description,
            Field::Amount => &self.amount,
        }
    }

    /// Fields without a selected column
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::iter()
            .filter(|field| self.column(*field).trim().is_empty())
            .collect()
    }

    /// Every field has a column, importing is possible
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Turn parsed rows into categorized transactions
    ///
    /// Row `i` gets the id `first_id + i`. Amounts that are missing, unparsable, out of range or
    /// zero drop the row, others keep their absolute value. An incomplete mapping fails before
    /// any row is read.
    pub fn map_rows(
        &self,
        rows: &[Row],
        categorizer: &Categorizer,
        first_id: TransactionId,
    ) -> Result<Vec<Transaction>, Error> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::IncompleteMapping(missing));
        }

        let transactions = rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                let amount = self.amount(row).abs();
                if amount.is_zero() {
                    return None;
                }
                let description = self.text(row, Field::Description);
                let category = categorizer.classify(&description).to_string();
                Some(Transaction {
                    id: first_id.offset(i),
                    date: self.text(row, Field::Date),
                    description,
                    amount,
                    category,
                })
            })
            .collect::<Vec<_>>();
        debug!(
            "mapped {} of {} rows to transactions",
            transactions.len(),
            rows.len()
        );
        Ok(transactions)
    }

    fn text(&self, row: &Row, field: Field) -> String {
        row.get(self.column(field))
            .map(RawValue::to_text)
            .unwrap_or_default()
    }

    fn amount(&self, row: &Row) -> BigDecimal {
        match row.get(self.column(Field::Amount)) {
            Some(RawValue::Number(number)) if util::within_scale_bounds(number) => number.clone(),
            Some(RawValue::Text(text)) => util::parse_leading_decimal(text).unwrap_or_default(),
            Some(RawValue::Number(_) | RawValue::Empty) | None => BigDecimal::zero(),
        }
    }
}
