use std::collections::{BTreeSet, HashSet};

use fintrack_domain::FinanceSnapshot;

use crate::CoreResult;

/// Supplies the records one computation reads.
///
/// Implementations return an owned, frozen copy; the engine keeps no cache
/// and never asks a provider to invalidate anything.
pub trait SnapshotProvider: Send + Sync {
    fn snapshot(&self) -> CoreResult<FinanceSnapshot>;
}

/// Provider over a snapshot already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshot {
    snapshot: FinanceSnapshot,
}

impl InMemorySnapshot {
    pub fn new(snapshot: FinanceSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn into_inner(self) -> FinanceSnapshot {
        self.snapshot
    }
}

impl From<FinanceSnapshot> for InMemorySnapshot {
    fn from(snapshot: FinanceSnapshot) -> Self {
        Self::new(snapshot)
    }
}

impl SnapshotProvider for InMemorySnapshot {
    fn snapshot(&self) -> CoreResult<FinanceSnapshot> {
        Ok(self.snapshot.clone())
    }
}

/// Detects dangling references that make aggregates quietly incomplete.
///
/// Expense labels without a matching budget category are listed once each,
/// which is how a renamed category shows up.
pub fn snapshot_warnings(snapshot: &FinanceSnapshot) -> Vec<String> {
    let account_ids: HashSet<_> = snapshot.accounts.iter().map(|a| a.id).collect();
    let budget_labels: HashSet<&str> = snapshot
        .budget_categories
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    let mut unbudgeted: BTreeSet<&str> = BTreeSet::new();
    let mut warnings = Vec::new();

    for txn in &snapshot.transactions {
        if !account_ids.contains(&txn.account_id) {
            warnings.push(format!(
                "transaction {} references unknown account {}",
                txn.id, txn.account_id
            ));
        }
        if txn.is_expense()
            && !budget_labels.is_empty()
            && !budget_labels.contains(txn.category.as_str())
        {
            unbudgeted.insert(txn.category.as_str());
        }
    }

    warnings.extend(
        unbudgeted
            .into_iter()
            .map(|label| format!("expense category `{label}` has no budget category")),
    );
    warnings
}
