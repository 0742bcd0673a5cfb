use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::{category::UNCATEGORIZED, transaction::Transaction};


/// Total of the transactions in one category
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Count of transactions in this category
    pub count: u64,
    /// Total amount in this category
    pub total: BigDecimal,
}

impl CategoryTotal {
    pub fn new<C: Into<String>>(category: C, count: u64, total: BigDecimal) -> Self {
        Self {
            category: category.into(),
            count,
            total,
        }
    }
}

/// Per category totals, largest first
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Summary {
    /// Category totals sorted by total descending, ties in order of first appearance
    pub categories: Vec<CategoryTotal>,
    /// Sum of every transaction amount
    pub total: BigDecimal,
    /// Count of transactions in the uncategorized category
    pub uncategorized_count: u64,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut total = BigDecimal::zero();
        let mut uncategorized_count = 0;

        for transaction in transactions {
            total += transaction.amount.clone();
            if transaction.category == UNCATEGORIZED {
                uncategorized_count += 1;
            }
            match categories
                .iter_mut()
                .find(|c| c.category == transaction.category)
            {
                Some(category) => {
                    category.count += 1;
                    category.total += transaction.amount.clone();
                }
                None => categories.push(CategoryTotal::new(
                    transaction.category.clone(),
                    1,
                    transaction.amount.clone(),
                )),
            }
        }
        // stable, so equal totals keep first appearance order
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            categories,
            total,
            uncategorized_count,
        }
    }

    /// Share of the overall total in percent, zero when there is nothing to share
    pub fn percentage(&self, amount: &BigDecimal) -> BigDecimal {
        if self.total.is_zero() {
            BigDecimal::zero()
        } else {
            amount * BigDecimal::from(100) / &self.total
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
