//! Calendar-month bucketing of transaction flows.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fintrack_domain::{first_of_month, month_key, Period, Transaction};

use crate::{
    filter::{filter_transactions, TransactionFilter},
    flow::{aggregate_flows, FlowTotals},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Income and expense totals for one bucket of a time series.
pub struct PeriodFlow {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub income: f64,
    pub expenses: f64,
}

impl PeriodFlow {
    pub fn totals(&self) -> FlowTotals {
        FlowTotals::new(self.income, self.expenses)
    }

    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Produces one [`PeriodFlow`] per period, preserving the caller's period order.
///
/// A transaction belongs to a period when `start <= date < end`, so a date on
/// a shared boundary lands in the later period.
pub fn bucket_by_period(transactions: &[Transaction], periods: &[Period]) -> Vec<PeriodFlow> {
    periods
        .iter()
        .map(|period| {
            let in_period =
                filter_transactions(transactions, &TransactionFilter::within(&period.window));
            let totals = aggregate_flows(&in_period);
            PeriodFlow {
                label: period.label.clone(),
                start: period.start(),
                end: period.end(),
                income: totals.income,
                expenses: totals.expenses,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Expense total for one calendar month.
pub struct MonthlySpending {
    pub label: String,
    pub month_start: NaiveDate,
    pub amount: f64,
}

/// Expense totals per month that has expense activity, oldest first.
pub fn monthly_spending(transactions: &[Transaction]) -> Vec<MonthlySpending> {
    let mut months: BTreeMap<(i32, u32), (NaiveDate, f64)> = BTreeMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        let entry = months
            .entry(month_key(txn.date))
            .or_insert_with(|| (first_of_month(txn.date), 0.0));
        entry.1 += txn.magnitude();
    }
    months
        .into_values()
        .map(|(month_start, amount)| MonthlySpending {
            label: month_start.format("%b %Y").to_string(),
            month_start,
            amount,
        })
        .collect()
}
