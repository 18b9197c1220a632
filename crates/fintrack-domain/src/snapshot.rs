//! Frozen record collections handed to the aggregation engine.

use serde::{Deserialize, Serialize};

use crate::{account::Account, category::BudgetCategory, transaction::Transaction};

/// Point-in-time copy of every record one computation reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FinanceSnapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budget_categories: Vec<BudgetCategory>,
}

impl FinanceSnapshot {
    pub fn new(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        budget_categories: Vec<BudgetCategory>,
    ) -> Self {
        Self {
            accounts,
            transactions,
            budget_categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
            && self.transactions.is_empty()
            && self.budget_categories.is_empty()
    }
}
