//! Composes the analytics view model for a preset trailing range.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fintrack_domain::{first_of_next_month, shift_months, DateWindow, FinanceSnapshot};

use crate::{
    budget::{budget_progress, BudgetProgress},
    category::{spending_by_category, CategoryTotal},
    filter::{filter_transactions, TransactionFilter},
    flow::{aggregate_flows, FlowTotals},
    periods::{monthly_spending, MonthlySpending},
    snapshot::SnapshotProvider,
    validation::validate_snapshot,
    CoreError, CoreResult,
};

/// Trailing ranges offered on the analytics screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AnalyticsRange {
    #[default]
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl AnalyticsRange {
    pub const ALL: [AnalyticsRange; 4] = [
        AnalyticsRange::OneMonth,
        AnalyticsRange::ThreeMonths,
        AnalyticsRange::SixMonths,
        AnalyticsRange::OneYear,
    ];

    pub fn months(self) -> u32 {
        match self {
            AnalyticsRange::OneMonth => 1,
            AnalyticsRange::ThreeMonths => 3,
            AnalyticsRange::SixMonths => 6,
            AnalyticsRange::OneYear => 12,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            AnalyticsRange::OneMonth => "1m",
            AnalyticsRange::ThreeMonths => "3m",
            AnalyticsRange::SixMonths => "6m",
            AnalyticsRange::OneYear => "1y",
        }
    }

    /// Whole calendar months ending with the month that contains `reference`.
    pub fn window(self, reference: NaiveDate) -> DateWindow {
        DateWindow {
            start: shift_months(reference, 1 - self.months() as i32),
            end: first_of_next_month(reference),
        }
    }
}

impl fmt::Display for AnalyticsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AnalyticsRange::OneMonth => "Last Month",
            AnalyticsRange::ThreeMonths => "Last 3 Months",
            AnalyticsRange::SixMonths => "Last 6 Months",
            AnalyticsRange::OneYear => "Last Year",
        };
        f.write_str(label)
    }
}

impl FromStr for AnalyticsRange {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        AnalyticsRange::ALL
            .into_iter()
            .find(|range| range.code() == needle)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown analytics range `{value}` (expected 1m, 3m, 6m or 1y)"
                ))
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsReport {
    pub range: AnalyticsRange,
    pub window: DateWindow,
    pub totals: FlowTotals,
    pub net_savings: f64,
    pub savings_rate: f64,
    pub monthly_spending: Vec<MonthlySpending>,
    pub categories: Vec<CategoryTotal>,
    pub budgets: Vec<BudgetProgress>,
}

/// Stateless builder for [`AnalyticsReport`] values.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn report(
        provider: &dyn SnapshotProvider,
        range: AnalyticsRange,
        reference: NaiveDate,
    ) -> CoreResult<AnalyticsReport> {
        let snapshot = provider.snapshot()?;
        Self::from_snapshot(&snapshot, range, reference)
    }

    /// Every figure is computed over transactions inside the range window only,
    /// budget progress included.
    pub fn from_snapshot(
        snapshot: &FinanceSnapshot,
        range: AnalyticsRange,
        reference: NaiveDate,
    ) -> CoreResult<AnalyticsReport> {
        validate_snapshot(snapshot)?;

        let window = range.window(reference);
        let in_range =
            filter_transactions(&snapshot.transactions, &TransactionFilter::within(&window));
        let totals = aggregate_flows(&in_range);

        tracing::debug!(
            range = range.code(),
            %window,
            transactions = in_range.len(),
            "built analytics report"
        );

        Ok(AnalyticsReport {
            range,
            window,
            totals,
            net_savings: totals.net(),
            savings_rate: totals.savings_rate(),
            monthly_spending: monthly_spending(&in_range),
            categories: spending_by_category(&in_range),
            budgets: budget_progress(&snapshot.budget_categories, &in_range),
        })
    }
}
