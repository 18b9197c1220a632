#![doc(test(attr(deny(warnings))))]

//! Fintrack turns exported finance snapshots into dashboard and analytics
//! reports. The heavy lifting lives in `fintrack-core`; this crate wires
//! configuration, JSON storage and terminal rendering around it.

pub mod errors;
pub mod report;
pub mod settings;
pub mod utils;

pub use errors::{CliError, FintrackError, Result};
pub use report::{build_report, render_report, Report};
pub use settings::ReportSettings;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Fintrack tracing initialized.");
    });
}
