//! Error type shared by the aggregation engine and its snapshot providers.

use std::io;

use fintrack_domain::{DateWindowError, DomainError};
use thiserror::Error;

/// Failures surfaced by the aggregation engine and its collaborators.
///
/// Degenerate arithmetic (zero baselines, empty totals) is never reported
/// here; those cases resolve to documented fallback values instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Data integrity violation: {0}")]
    DataIntegrity(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Snapshot unavailable: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Window(#[from] DateWindowError),
}

pub type CoreResult<T> = Result<T, CoreError>;
