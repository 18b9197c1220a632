//! Data-integrity checks run before composed views are built.
//!
//! The aggregators themselves are infallible. These checks reject inputs that
//! would otherwise corrupt totals without any visible symptom.

use fintrack_domain::{Account, BudgetCategory, FinanceSnapshot, Transaction};

use crate::{CoreError, CoreResult};

pub fn validate_transactions(transactions: &[Transaction]) -> CoreResult<()> {
    for txn in transactions {
        if !txn.amount.is_finite() {
            return Err(CoreError::DataIntegrity(format!(
                "transaction {} has non-finite amount {}",
                txn.id, txn.amount
            )));
        }
        if txn.amount < 0.0 {
            tracing::debug!(
                transaction = %txn.id,
                amount = txn.amount,
                "negative stored amount; using its magnitude"
            );
        }
    }
    Ok(())
}

pub fn validate_accounts(accounts: &[Account]) -> CoreResult<()> {
    for account in accounts {
        if !account.balance.is_finite() {
            return Err(CoreError::DataIntegrity(format!(
                "account {} has non-finite balance {}",
                account.id, account.balance
            )));
        }
        if let Some(limit) = account.credit_limit {
            if !limit.is_finite() {
                return Err(CoreError::DataIntegrity(format!(
                    "account {} has non-finite credit limit {}",
                    account.id, limit
                )));
            }
        }
    }
    Ok(())
}

pub fn validate_budget_categories(categories: &[BudgetCategory]) -> CoreResult<()> {
    for category in categories {
        if !category.budget_amount.is_finite() {
            return Err(CoreError::DataIntegrity(format!(
                "budget category {} has non-finite amount {}",
                category.id, category.budget_amount
            )));
        }
    }
    Ok(())
}

pub fn validate_snapshot(snapshot: &FinanceSnapshot) -> CoreResult<()> {
    validate_accounts(&snapshot.accounts)?;
    validate_transactions(&snapshot.transactions)?;
    validate_budget_categories(&snapshot.budget_categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fintrack_domain::AccountType;
    use uuid::Uuid;

    fn expense(amount: f64) -> Transaction {
        Transaction::expense(
            Uuid::nil(),
            "Item",
            amount,
            "Misc",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn rejects_nan_amounts() {
        let err = validate_transactions(&[expense(f64::NAN)]).unwrap_err();
        assert!(matches!(err, CoreError::DataIntegrity(_)));
    }

    #[test]
    fn tolerates_negative_magnitudes() {
        assert!(validate_transactions(&[expense(-12.0)]).is_ok());
    }

    #[test]
    fn rejects_infinite_credit_limit() {
        let account =
            Account::new("Card", AccountType::Credit, 10.0).with_credit_limit(f64::INFINITY);
        assert!(validate_accounts(&[account]).is_err());
    }

    #[test]
    fn snapshot_checks_every_collection() {
        let mut snapshot = FinanceSnapshot::default();
        assert!(validate_snapshot(&snapshot).is_ok());
        snapshot
            .budget_categories
            .push(BudgetCategory::new("Broken", f64::NAN));
        let message = validate_snapshot(&snapshot).unwrap_err().to_string();
        assert!(message.contains("Broken") || message.contains("non-finite"));
    }
}
