//! fintrack-domain
//!
//! Pure domain records (Account, Transaction, BudgetCategory, Period, snapshots).
//! No I/O, no aggregation, no storage. Only data types and core enums.

pub mod account;
pub mod category;
pub mod common;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use account::*;
pub use category::*;
pub use common::*;
pub use period::*;
pub use snapshot::*;
pub use transaction::*;
