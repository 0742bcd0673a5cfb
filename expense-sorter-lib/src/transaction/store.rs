use log::debug;

use super::{ColumnMapping, CsvTable, Error, Transaction, TransactionId};
use crate::{categorizer::Categorizer, category::UNCATEGORIZED};

/// In-memory transactions in import order
///
/// Transactions are only ever appended. Their category can be changed but they are never
/// removed individually.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next imported row will get
    pub fn next_id(&self) -> TransactionId {
        self.next_id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions still in [`UNCATEGORIZED`]
    pub fn uncategorized(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.category == UNCATEGORIZED)
    }

    /// Add transactions after the existing ones
    pub fn append(&mut self, transactions: Vec<Transaction>) {
        if let Some(max) = transactions.iter().map(|t| t.id).max() {
            self.next_id = self.next_id.max(max.offset(1));
        }
        self.transactions.extend(transactions);
    }

    /// Map, categorize and append the rows of a parsed statement
    ///
    /// Returns the number of transactions added. Ids are reserved for every row, including
    /// dropped ones.
    pub fn import(
        &mut self,
        table: &CsvTable,
        mapping: &ColumnMapping,
        categorizer: &Categorizer,
    ) -> Result<usize, Error> {
        let transactions = mapping.map_rows(table.rows(), categorizer, self.next_id)?;
        let imported = transactions.len();
        self.next_id = self.next_id.offset(table.rows().len());
        self.append(transactions);
        debug!("imported {imported} transactions, {} in total", self.len());
        Ok(imported)
    }

    /// Assign a category to a transaction, unknown ids are ignored
    pub fn set_category(&mut self, id: TransactionId, category: &str) -> bool {
        let mut found = false;
        for transaction in self.transactions.iter_mut().filter(|t| t.id == id) {
            transaction.category = category.to_string();
            found = true;
        }
        found
    }

    /// Move every transaction of one category to another, returns how many moved
    pub fn rename_category_everywhere(&mut self, old_name: &str, new_name: &str) -> usize {
        let mut count = 0;
        for transaction in self
            .transactions
            .iter_mut()
            .filter(|t| t.category == old_name)
        {
            transaction.category = new_name.to_string();
            count += 1;
        }
        count
    }

    /// Move every transaction of a category to [`UNCATEGORIZED`], returns how many moved
    pub fn clear_category_everywhere(&mut self, name: &str) -> usize {
        self.rename_category_everywhere(name, UNCATEGORIZED)
    }
}
