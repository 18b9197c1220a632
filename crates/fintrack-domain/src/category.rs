//! Domain types representing budget categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spending envelope with a budgeted amount.
///
/// Transactions are associated with a budget category by label: a
/// transaction counts toward this budget when its `category` equals `name`
/// exactly. Renaming a category therefore detaches historical transactions
/// recorded under the old label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub id: Uuid,
    pub name: String,
    pub budget_amount: f64,
    #[serde(default)]
    pub color: String,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, budget_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            budget_amount,
            color: String::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Returns `true` when `label` is the join key for this category.
    pub fn matches_label(&self, label: &str) -> bool {
        self.name == label
    }
}
