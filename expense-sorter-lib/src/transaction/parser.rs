use std::{
    collections::HashMap,
    fs::File,
    io::{Cursor, Read},
    path::Path,
};

use bigdecimal::BigDecimal;
use derive_more::From;
use log::debug;

use super::Error;
use crate::util;

/// Field value with its type inferred from the csv text
#[derive(Debug, Clone, PartialEq, From)]
pub enum RawValue {
    /// Field that is a decimal number in its entirety, with an exponent in range
    Number(BigDecimal),
    /// Any other non empty field
    Text(String),
    /// Empty field
    #[from(ignore)]
    Empty,
}

impl RawValue {
    /// Infer the type of a csv field
    pub fn infer(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if let Some(number) = util::parse_decimal(trimmed) {
            Self::Number(number)
        } else {
            Self::Text(field.to_string())
        }
    }

    /// Text form of the value, empty for [`RawValue::Empty`]
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
            Self::Empty => String::new(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<i32> for RawValue {
    fn from(number: i32) -> Self {
        Self::Number(number.into())
    }
}

/// Record keyed by column name
pub type Row = HashMap<String, RawValue>;

/// Parsed csv statement
///
/// The first record is the header row, empty lines are skipped and short records leave their
/// trailing columns out of the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Create a new table from a csv file
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Create a new table from a csv buffer
    pub fn from_csv_buffer<B: AsRef<[u8]>>(buffer: B) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(buffer))
    }

    /// Create a new table from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);
        let headers = reader
            .headers()?
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            rows.push(
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, field)| (header.clone(), RawValue::infer(field)))
                    .collect(),
            );
        }
        debug!("parsed {} rows with columns {headers:?}", rows.len());
        Ok(Self { headers, rows })
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// No data rows, only a header or nothing at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
