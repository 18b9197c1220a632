//! Builds and renders the combined dashboard + analytics report.

pub mod analytics;
pub mod dashboard;
pub mod style;
pub mod table;

use chrono::NaiveDate;
use fintrack_core::{
    format::CurrencyFormatter, snapshot_warnings, AnalyticsReport, AnalyticsService,
    DashboardService, DashboardSummary, SnapshotProvider,
};
use serde::Serialize;

use crate::{settings::ReportSettings, Result};

pub use analytics::render_analytics;
pub use dashboard::render_dashboard;
pub use style::ReportStyle;

/// Both views computed from one snapshot read.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub dashboard: DashboardSummary,
    pub analytics: AnalyticsReport,
    /// Dangling references found in the snapshot (unknown accounts, unbudgeted labels).
    pub warnings: Vec<String>,
}

/// Reads the provider once and composes both views around `reference`.
pub fn build_report(
    provider: &dyn SnapshotProvider,
    reference: NaiveDate,
    settings: &ReportSettings,
) -> Result<Report> {
    let snapshot = provider.snapshot()?;
    let dashboard = DashboardService::from_snapshot(&snapshot, reference, &settings.dashboard)?;
    let analytics = AnalyticsService::from_snapshot(&snapshot, settings.range, reference)?;
    let warnings = snapshot_warnings(&snapshot);
    if !warnings.is_empty() {
        tracing::info!(count = warnings.len(), "snapshot has dangling references");
    }
    Ok(Report {
        dashboard,
        analytics,
        warnings,
    })
}

pub fn render_report(
    report: &Report,
    money: &dyn CurrencyFormatter,
    style: &ReportStyle,
) -> String {
    let mut out = render_dashboard(&report.dashboard, money, style);
    out.push_str("\n\n");
    out.push_str(&render_analytics(&report.analytics, money, style));
    if !report.warnings.is_empty() {
        out.push_str("\n\n");
        out.push_str(&style.section("Data warnings"));
        for warning in &report.warnings {
            out.push('\n');
            out.push_str(&style.warning(warning));
        }
    }
    out.push('\n');
    out
}
