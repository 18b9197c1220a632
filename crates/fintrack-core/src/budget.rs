//! Budget utilization per category.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fintrack_domain::{BudgetCategory, Transaction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Spend against one budget category.
pub struct BudgetProgress {
    pub category_id: Uuid,
    pub category: String,
    pub spent: f64,
    pub budget: f64,
    pub remaining: f64,
    /// `spent / budget`, capped at `1.0`.
    pub utilization: f64,
    /// Computed from the uncapped ratio.
    pub over_budget: bool,
}

impl BudgetProgress {
    pub fn from_parts(category: &BudgetCategory, spent: f64) -> Self {
        let budget = category.budget_amount;
        let (utilization, over_budget) = if budget > 0.0 {
            ((spent / budget).min(1.0), spent > budget)
        } else {
            tracing::warn!(
                category = %category.name,
                budget,
                "non-positive budget amount; reporting zero utilization"
            );
            (0.0, false)
        };
        Self {
            category_id: category.id,
            category: category.name.clone(),
            spent,
            budget,
            remaining: budget - spent,
            utilization,
            over_budget,
        }
    }

    pub fn utilization_percent(&self) -> f64 {
        self.utilization * 100.0
    }
}

/// Builds one [`BudgetProgress`] per budget category, in input order.
///
/// Transactions are joined to budgets by exact category label.
pub fn budget_progress(
    categories: &[BudgetCategory],
    transactions: &[Transaction],
) -> Vec<BudgetProgress> {
    let expenses: Vec<&Transaction> = transactions.iter().filter(|txn| txn.is_expense()).collect();

    categories
        .iter()
        .map(|category| {
            let spent: f64 = expenses
                .iter()
                .filter(|txn| category.matches_label(&txn.category))
                .map(|txn| txn.magnitude())
                .sum();
            BudgetProgress::from_parts(category, spent)
        })
        .collect()
}

/// Budget categories whose spend exceeds the budgeted amount.
pub fn over_budget(progress: &[BudgetProgress]) -> Vec<&BudgetProgress> {
    progress.iter().filter(|entry| entry.over_budget).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, amount: f64) -> Transaction {
        Transaction::expense(
            Uuid::nil(),
            "Item",
            amount,
            category,
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        )
    }

    #[test]
    fn caps_utilization_but_flags_overspend() {
        let dining = BudgetCategory::new("Dining", 200.0);
        let progress = budget_progress(&[dining], &[expense("Dining", 250.0)]);
        assert_eq!(progress[0].utilization, 1.0);
        assert!(progress[0].over_budget);
        assert_eq!(progress[0].remaining, -50.0);
    }

    #[test]
    fn zero_budget_reports_zero_utilization() {
        let misc = BudgetCategory::new("Misc", 0.0);
        let progress = budget_progress(&[misc], &[expense("Misc", 50.0)]);
        assert_eq!(progress[0].spent, 50.0);
        assert_eq!(progress[0].utilization, 0.0);
        assert!(!progress[0].over_budget);
    }

    #[test]
    fn exact_budget_is_not_over() {
        let rent = BudgetCategory::new("Rent", 900.0);
        let progress = budget_progress(&[rent], &[expense("Rent", 900.0)]);
        assert_eq!(progress[0].utilization, 1.0);
        assert!(!progress[0].over_budget);
    }

    #[test]
    fn keeps_input_order_and_fills_unmatched_with_zero() {
        let categories = vec![
            BudgetCategory::new("Travel", 500.0),
            BudgetCategory::new("Groceries", 400.0),
        ];
        let txns = vec![
            expense("Groceries", 100.0),
            expense("Groceries", 50.0),
            expense("Uncategorized", 75.0),
        ];
        let progress = budget_progress(&categories, &txns);
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0].category, "Travel");
        assert_eq!(progress[0].spent, 0.0);
        assert_eq!(progress[1].spent, 150.0);
        assert_eq!(progress[1].utilization, 0.375);
        assert_eq!(progress[1].utilization_percent(), 37.5);
        assert!(over_budget(&progress).is_empty());
    }

    #[test]
    fn income_does_not_count_as_spend() {
        let salary = BudgetCategory::new("Salary", 100.0);
        let income = Transaction::income(
            Uuid::nil(),
            "Paycheck",
            4000.0,
            "Salary",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        let progress = budget_progress(&[salary], &[income]);
        assert_eq!(progress[0].spent, 0.0);
        assert!(!progress[0].over_budget);
    }

    #[test]
    fn label_join_is_case_sensitive() {
        let groceries = BudgetCategory::new("Groceries", 100.0);
        let txns = vec![
            expense("Groceries", 30.0),
            expense("groceries", 500.0),
            expense("Groceries ", 500.0),
        ];
        let progress = budget_progress(&[groceries], &txns);
        assert_eq!(progress[0].spent, 30.0);
        assert!(!progress[0].over_budget);
    }
}
