//! Account balance totals and credit utilization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fintrack_domain::{Account, AccountType};

/// Credit utilization above this fraction raises a near-limit warning.
pub const NEAR_LIMIT_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountBalance {
    pub account_id: Uuid,
    pub name: String,
    pub account_type: AccountType,
    pub color: String,
    pub balance: f64,
    /// `balance / total`, or `0` when the total is zero.
    pub share_of_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    /// `balance / credit_limit` for accounts with a positive credit limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_utilization: Option<f64>,
    pub near_limit: bool,
}

impl AccountBalance {
    /// Ratio drawn on the overview bar: credit utilization when the account
    /// has a limit, otherwise its share of the total balance.
    pub fn display_ratio(&self) -> f64 {
        self.credit_utilization.unwrap_or(self.share_of_total)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BalanceOverview {
    pub total: f64,
    pub per_account: Vec<AccountBalance>,
}

impl BalanceOverview {
    pub fn near_limit_accounts(&self) -> impl Iterator<Item = &AccountBalance> {
        self.per_account.iter().filter(|entry| entry.near_limit)
    }
}

/// Sums signed balances and derives per-account ratios, in input order.
pub fn summarize_balances(accounts: &[Account]) -> BalanceOverview {
    let total: f64 = accounts.iter().map(|account| account.balance).sum();
    if total == 0.0 && !accounts.is_empty() {
        tracing::warn!(
            accounts = accounts.len(),
            "total balance is zero; reporting zero share for every account"
        );
    }

    let per_account = accounts
        .iter()
        .map(|account| {
            let share_of_total = if total != 0.0 {
                account.balance / total
            } else {
                0.0
            };
            let credit_limit = account.effective_credit_limit();
            let credit_utilization = credit_limit.map(|limit| account.balance / limit);
            AccountBalance {
                account_id: account.id,
                name: account.name.clone(),
                account_type: account.account_type,
                color: account.color.clone(),
                balance: account.balance,
                share_of_total,
                credit_limit,
                credit_utilization,
                near_limit: credit_utilization
                    .map(|ratio| ratio > NEAR_LIMIT_THRESHOLD)
                    .unwrap_or(false),
            }
        })
        .collect();

    BalanceOverview { total, per_account }
}
