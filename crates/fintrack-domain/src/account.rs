//! Account records and their type tags.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type", alias = "account_type")]
    pub account_type: AccountType,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    #[serde(default)]
    pub color: String,
}

impl Account {
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            account_type,
            balance,
            credit_limit: None,
            color: String::new(),
        }
    }

    pub fn with_credit_limit(mut self, limit: f64) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Returns the credit limit when one is set to a usable (positive) value.
    pub fn effective_credit_limit(&self) -> Option<f64> {
        self.credit_limit.filter(|limit| *limit > 0.0)
    }
}

/// Supported account types. Unrecognized tags map to [`AccountType::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Credit,
    Investment,
    Cash,
    #[serde(other)]
    Other,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::Credit => "Credit",
            AccountType::Investment => "Investment",
            AccountType::Cash => "Cash",
            AccountType::Other => "Other",
        };
        f.write_str(label)
    }
}

impl FromStr for AccountType {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "checking" => AccountType::Checking,
            "savings" => AccountType::Savings,
            "credit" => AccountType::Credit,
            "investment" => AccountType::Investment,
            "cash" => AccountType::Cash,
            _ => AccountType::Other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_credit_limit_is_ignored() {
        let card = Account::new("Card", AccountType::Credit, 100.0).with_credit_limit(0.0);
        assert_eq!(card.effective_credit_limit(), None);
        let card = card.with_credit_limit(500.0);
        assert_eq!(card.effective_credit_limit(), Some(500.0));
    }

    #[test]
    fn unknown_type_tag_deserializes_as_other() {
        let json = r##"{
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Wallet app",
            "type": "crypto",
            "balance": 12.5,
            "color": "#6E59A5"
        }"##;
        let account: Account = serde_json::from_str(json).expect("deserialize");
        assert_eq!(account.account_type, AccountType::Other);
        assert_eq!(account.credit_limit, None);
    }

    #[test]
    fn parses_type_tags() {
        assert_eq!("Credit".parse::<AccountType>(), Ok(AccountType::Credit));
        assert_eq!("loan".parse::<AccountType>(), Ok(AccountType::Other));
    }
}
