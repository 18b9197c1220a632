//! fintrack-core
//!
//! Financial aggregation engine: pure reductions from account, transaction
//! and budget records to dashboard and analytics view models.
//! Depends on fintrack-domain. No terminal I/O, no direct storage interactions.

pub mod analytics;
pub mod balance;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod flow;
pub mod format;
pub mod periods;
pub mod snapshot;
pub mod time;
pub mod trend;
pub mod validation;

pub use analytics::*;
pub use balance::*;
pub use budget::*;
pub use category::*;
pub use dashboard::*;
pub use error::{CoreError, CoreResult};
pub use filter::*;
pub use flow::*;
pub use periods::*;
pub use snapshot::*;
pub use trend::*;
pub use validation::*;
