//! Narrows transaction collections by date, kind, category, and account.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fintrack_domain::{DateWindow, Transaction, TransactionKind};

use crate::CoreError;

/// Kind constraint for [`TransactionFilter`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn accepts(self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl From<TransactionKind> for KindFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => KindFilter::Income,
            TransactionKind::Expense => KindFilter::Expense,
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KindFilter::All => "all",
            KindFilter::Income => "income",
            KindFilter::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for KindFilter {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(KindFilter::All),
            other => Ok(other.parse::<TransactionKind>()?.into()),
        }
    }
}

/// Criteria combined with logical AND. Unset fields impose no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Inclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub kind: KindFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new().with_start(start).with_end(end)
    }

    /// Date-only filter covering every day of a half-open window.
    pub fn within(window: &DateWindow) -> Self {
        Self::between(window.start, window.last_day())
    }

    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<KindFilter>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_account(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(start) = self.start_date {
            if txn.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if txn.date > end {
                return false;
            }
        }
        if !self.kind.accepts(txn.kind) {
            return false;
        }
        if let Some(category) = self.category.as_deref() {
            if txn.category != category {
                return false;
            }
        }
        if let Some(account_id) = self.account_id {
            if txn.account_id != account_id {
                return false;
            }
        }
        true
    }
}

/// Returns the transactions accepted by `criteria`, in input order.
pub fn filter_transactions(
    transactions: &[Transaction],
    criteria: &TransactionFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| criteria.matches(txn))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture() -> (Uuid, Uuid, Vec<Transaction>) {
        let checking = Uuid::new_v4();
        let card = Uuid::new_v4();
        let txns = vec![
            Transaction::income(checking, "Salary", 3000.0, "Salary", date(2024, 1, 5)),
            Transaction::expense(card, "Market", 120.0, "Groceries", date(2024, 1, 10)),
            Transaction::expense(checking, "Rent", 800.0, "Rent", date(2024, 2, 1)),
            Transaction::expense(card, "Deli", 30.0, "Groceries", date(2024, 2, 3)),
        ];
        (checking, card, txns)
    }

    #[test]
    fn empty_criteria_keeps_everything_in_order() {
        let (_, _, txns) = fixture();
        let filtered = filter_transactions(&txns, &TransactionFilter::new());
        assert_eq!(filtered, txns);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let (_, _, txns) = fixture();
        let criteria = TransactionFilter::between(date(2024, 1, 10), date(2024, 2, 1));
        let names: Vec<String> = filter_transactions(&txns, &criteria)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Market", "Rent"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let (_, card, txns) = fixture();
        let criteria = TransactionFilter::new()
            .with_kind(TransactionKind::Expense)
            .with_category("Groceries")
            .with_account(card)
            .with_start(date(2024, 2, 1));
        let filtered = filter_transactions(&txns, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Deli");
    }

    #[test]
    fn kind_filter_selects_direction() {
        let (_, _, txns) = fixture();
        let income_only = TransactionFilter::new().with_kind(KindFilter::Income);
        let income = filter_transactions(&txns, &income_only);
        assert_eq!(income.len(), 1);
        assert!(income[0].is_income());
    }

    #[test]
    fn category_match_is_exact() {
        let (_, _, txns) = fixture();
        let filtered =
            filter_transactions(&txns, &TransactionFilter::new().with_category("groceries"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn window_filter_excludes_next_month_boundary() {
        let (_, _, txns) = fixture();
        let jan = DateWindow::month_containing(date(2024, 1, 15));
        let filtered = filter_transactions(&txns, &TransactionFilter::within(&jan));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn parses_kind_filter_values() {
        assert_eq!("all".parse::<KindFilter>().unwrap(), KindFilter::All);
        assert_eq!("Expense".parse::<KindFilter>().unwrap(), KindFilter::Expense);
        assert!(matches!(
            "transfer".parse::<KindFilter>(),
            Err(CoreError::Domain(_))
        ));
    }
}
