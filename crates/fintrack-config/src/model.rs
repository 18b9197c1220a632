use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

pub const RANGE_CODES: [&str; 4] = ["1m", "3m", "6m", "1y"];

/// User preferences that shape the dashboard and analytics reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    /// Months shown in the dashboard income/expense series.
    pub trend_months: u32,
    pub recent_transactions: usize,
    /// Analytics range used when none is given: one of `1m`, `3m`, `6m`, `1y`.
    pub default_range: String,
    pub ui_color_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional snapshot file. Defaults to `~/Documents/Fintrack/snapshot.json`.
    pub default_snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            trend_months: 6,
            recent_transactions: 4,
            default_range: "1m".into(),
            ui_color_enabled: true,
            default_snapshot_path: None,
        }
    }
}

impl Config {
    pub fn resolve_default_snapshot_path(&self) -> PathBuf {
        if let Some(path) = &self.default_snapshot_path {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Fintrack").join("snapshot.json")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend_months == 0 {
            return Err(ConfigError::Invalid(
                "trend_months must be at least 1".into(),
            ));
        }
        if !RANGE_CODES.contains(&self.default_range.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "default_range `{}` is not one of {}",
                self.default_range,
                RANGE_CODES.join(", ")
            )));
        }
        Ok(())
    }
}
