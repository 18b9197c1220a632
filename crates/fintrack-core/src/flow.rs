//! Income and expense reduction shared by every aggregator.

use serde::{Deserialize, Serialize};

use fintrack_domain::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
/// Magnitude totals split by transaction kind.
pub struct FlowTotals {
    pub income: f64,
    pub expenses: f64,
}

impl FlowTotals {
    pub fn new(income: f64, expenses: f64) -> Self {
        Self { income, expenses }
    }

    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }

    /// Share of income kept after expenses, in percent. Zero without income.
    pub fn savings_rate(&self) -> f64 {
        if self.income > 0.0 {
            (self.net() / self.income) * 100.0
        } else {
            0.0
        }
    }

    pub fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => self.income += txn.magnitude(),
            TransactionKind::Expense => self.expenses += txn.magnitude(),
        }
    }
}

/// Sums income and expense magnitudes. Empty input yields zero totals.
pub fn aggregate_flows<'a, I>(transactions: I) -> FlowTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(FlowTotals::default(), |mut totals, txn| {
            totals.record(txn);
            totals
        })
}
