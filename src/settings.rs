//! Resolves persisted preferences into the knobs the report needs.

use std::path::PathBuf;

use fintrack_config::Config;
use fintrack_core::{AnalyticsRange, DashboardSettings};

use crate::Result;

/// Everything one report run needs besides the snapshot itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub dashboard: DashboardSettings,
    pub range: AnalyticsRange,
    pub currency_symbol: String,
    pub color: bool,
    pub snapshot_path: PathBuf,
}

impl ReportSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let range: AnalyticsRange = config.default_range.parse()?;
        Ok(Self {
            dashboard: DashboardSettings {
                trend_months: config.trend_months,
                recent_limit: config.recent_transactions,
            },
            range,
            currency_symbol: config.currency_symbol.clone(),
            color: config.ui_color_enabled,
            snapshot_path: config.resolve_default_snapshot_path(),
        })
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            dashboard: DashboardSettings::default(),
            range: AnalyticsRange::default(),
            currency_symbol: config.currency_symbol.clone(),
            color: config.ui_color_enabled,
            snapshot_path: config.resolve_default_snapshot_path(),
        }
    }
}
