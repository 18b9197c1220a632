//! Domain models for income and expense transactions.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::DomainError;

/// A single money movement recorded against an account.
///
/// `amount` is a magnitude. The direction of the movement is carried by
/// [`TransactionKind`] and never by the sign of the stored number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(
        account_id: Uuid,
        name: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            name: name.into(),
            amount,
            kind,
            category: category.into(),
            date,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn income(
        account_id: Uuid,
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(
            account_id,
            name,
            amount,
            TransactionKind::Income,
            category,
            date,
        )
    }

    pub fn expense(
        account_id: Uuid,
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(
            account_id,
            name,
            amount,
            TransactionKind::Expense,
            category,
            date,
        )
    }

    /// Returns the non-negative size of the movement regardless of stored sign.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    /// Returns the magnitude with the sign implied by the transaction kind.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.magnitude(),
            TransactionKind::Expense => -self.magnitude(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(DomainError::UnknownTransactionKind(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction::new(
            Uuid::new_v4(),
            "Sample",
            amount,
            kind,
            "Misc",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn sign_comes_from_kind_not_stored_amount() {
        assert_eq!(sample(TransactionKind::Expense, 40.0).signed_amount(), -40.0);
        assert_eq!(sample(TransactionKind::Expense, -40.0).signed_amount(), -40.0);
        assert_eq!(sample(TransactionKind::Income, -25.0).signed_amount(), 25.0);
    }

    #[test]
    fn parses_known_kinds_case_insensitively() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(" expense ".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "transfer".parse::<TransactionKind>().unwrap_err();
        assert_eq!(err, DomainError::UnknownTransactionKind("transfer".into()));
    }

    #[test]
    fn deserializing_unknown_kind_fails() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "account_id": "00000000-0000-0000-0000-000000000002",
            "name": "Mystery",
            "amount": 10.0,
            "kind": "refund",
            "category": "Misc",
            "date": "2024-01-01"
        }"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
