use std::{fs, path::Path};

use displaydoc::Display;
use log::debug;
use thiserror::Error;

use crate::{summary::CategoryTotal, util};


/// Default file name of an exported summary
pub const SUMMARY_FILE_NAME: &str = "expense-summary.csv";

const SUMMARY_HEADER: &str = "Category,Total Amount";

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
}

/// Encode category totals as csv
///
/// One `category,amount` line per entry after a header, amounts with exactly two decimals. Lines
/// are joined with `\n` and there is no trailing newline. Fields are not quoted, a category name
/// containing a comma produces an extra column.
pub fn encode_summary_csv(categories: &[CategoryTotal]) -> String {
    std::iter::once(SUMMARY_HEADER.to_string())
        .chain(
            categories
                .iter()
                .map(|c| format!("{},{}", c.category, util::format_amount(&c.total))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the encoded category totals to a file
pub fn write_summary_csv<P: AsRef<Path>>(path: P, categories: &[CategoryTotal]) -> Result<(), Error> {
    fs::write(path.as_ref(), encode_summary_csv(categories))?;
    debug!(
        "wrote {} category totals to {}",
        categories.len(),
        path.as_ref().display()
    );
    Ok(())
}
