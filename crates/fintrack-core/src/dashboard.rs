//! Composes the dashboard view model from a snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fintrack_domain::{shift_months, trailing_months, DateWindow, FinanceSnapshot, Transaction};

use crate::{
    balance::{summarize_balances, BalanceOverview},
    filter::{filter_transactions, TransactionFilter},
    flow::{aggregate_flows, FlowTotals},
    periods::{bucket_by_period, PeriodFlow},
    snapshot::SnapshotProvider,
    time::Clock,
    trend::{trend, Trend, TrendPolarity},
    validation::validate_snapshot,
    CoreResult,
};

pub const DEFAULT_TREND_MONTHS: u32 = 6;
pub const DEFAULT_RECENT_LIMIT: usize = 4;

/// Tunables for [`DashboardService`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Number of calendar months in the income/expense series.
    pub trend_months: u32,
    /// Number of recent transactions listed.
    pub recent_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            trend_months: DEFAULT_TREND_MONTHS,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub reference_date: NaiveDate,
    pub total_balance: f64,
    pub current_month: FlowTotals,
    pub previous_month: FlowTotals,
    pub income_trend: Trend,
    pub expense_trend: Trend,
    pub monthly_flows: Vec<PeriodFlow>,
    pub recent_transactions: Vec<Transaction>,
    pub accounts: BalanceOverview,
}

impl DashboardSummary {
    pub const INCOME_POLARITY: TrendPolarity = TrendPolarity::GrowthIsGood;
    pub const EXPENSE_POLARITY: TrendPolarity = TrendPolarity::GrowthIsBad;

    pub fn income_trend_is_favorable(&self) -> bool {
        self.income_trend.is_favorable(Self::INCOME_POLARITY)
    }

    pub fn expense_trend_is_favorable(&self) -> bool {
        self.expense_trend.is_favorable(Self::EXPENSE_POLARITY)
    }
}

/// Stateless builder for [`DashboardSummary`] values.
pub struct DashboardService;

impl DashboardService {
    /// Pulls a snapshot from `provider` and summarizes it around `reference`.
    pub fn build(
        provider: &dyn SnapshotProvider,
        reference: NaiveDate,
        settings: &DashboardSettings,
    ) -> CoreResult<DashboardSummary> {
        let snapshot = provider.snapshot()?;
        Self::from_snapshot(&snapshot, reference, settings)
    }

    /// Summarizes the month that contains the clock's current date.
    pub fn build_for_today(
        provider: &dyn SnapshotProvider,
        clock: &dyn Clock,
        settings: &DashboardSettings,
    ) -> CoreResult<DashboardSummary> {
        Self::build(provider, clock.today(), settings)
    }

    pub fn from_snapshot(
        snapshot: &FinanceSnapshot,
        reference: NaiveDate,
        settings: &DashboardSettings,
    ) -> CoreResult<DashboardSummary> {
        validate_snapshot(snapshot)?;

        let current_window = DateWindow::month_containing(reference);
        let previous_window = DateWindow::month_containing(shift_months(reference, -1));
        let current_month = flows_in(&snapshot.transactions, &current_window);
        let previous_month = flows_in(&snapshot.transactions, &previous_window);

        let accounts = summarize_balances(&snapshot.accounts);
        let periods = trailing_months(reference, settings.trend_months);
        let monthly_flows = bucket_by_period(&snapshot.transactions, &periods);

        tracing::debug!(
            %reference,
            transactions = snapshot.transactions.len(),
            accounts = snapshot.accounts.len(),
            "built dashboard summary"
        );

        Ok(DashboardSummary {
            reference_date: reference,
            total_balance: accounts.total,
            current_month,
            previous_month,
            income_trend: trend(current_month.income, previous_month.income),
            expense_trend: trend(current_month.expenses, previous_month.expenses),
            monthly_flows,
            recent_transactions: recent_transactions(&snapshot.transactions, settings.recent_limit),
            accounts,
        })
    }
}

fn flows_in(transactions: &[Transaction], window: &DateWindow) -> FlowTotals {
    aggregate_flows(&filter_transactions(
        transactions,
        &TransactionFilter::within(window),
    ))
}

/// The `limit` most recent transactions, newest first.
///
/// Transactions sharing a date keep their input order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().take(limit).cloned().collect()
}
