//! Expense totals per category label, ranked by spend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fintrack_domain::Transaction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

impl CategoryTotal {
    /// Fraction of `overall` this category represents; zero when `overall` is not positive.
    pub fn share_of(&self, overall: f64) -> f64 {
        if overall > 0.0 {
            self.total / overall
        } else {
            0.0
        }
    }
}

/// Sums expense magnitudes per category label, largest first.
///
/// Income never contributes. Labels with no expenses are omitted, and equal
/// totals keep the order in which their labels were first seen.
pub fn spending_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut rows: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        match index.get(txn.category.as_str()) {
            Some(&slot) => rows[slot].total += txn.magnitude(),
            None => {
                index.insert(txn.category.as_str(), rows.len());
                rows.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.magnitude(),
                });
            }
        }
    }

    rows.sort_by(|a, b| b.total.total_cmp(&a.total));
    tracing::debug!(categories = rows.len(), "aggregated spending by category");
    rows
}

/// Expense total for a single label, zero when nothing matches.
pub fn spent_in_category(transactions: &[Transaction], label: &str) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_expense() && txn.category == label)
        .map(Transaction::magnitude)
        .sum()
}
