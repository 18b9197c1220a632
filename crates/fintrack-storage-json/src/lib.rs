//! fintrack-storage-json
//!
//! Reads finance snapshots exported as JSON files and serves them through
//! [`SnapshotProvider`]. The file is re-read on every call so the engine
//! always sees the latest export without holding a cache.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use fintrack_core::{CoreError, SnapshotProvider};
use fintrack_domain::FinanceSnapshot;
use serde_json::error::Category;

const TMP_SUFFIX: &str = "tmp";

/// Snapshot provider backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotProvider for JsonSnapshotFile {
    fn snapshot(&self) -> Result<FinanceSnapshot, CoreError> {
        load_snapshot_from_path(&self.path)
    }
}

/// Loads a snapshot from the provided filesystem path.
pub fn load_snapshot_from_path(path: &Path) -> Result<FinanceSnapshot, CoreError> {
    if !path.exists() {
        return Err(CoreError::Storage(format!(
            "snapshot file `{}` not found",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)?;
    let snapshot = parse_snapshot(&data)?;
    tracing::debug!(
        path = %path.display(),
        accounts = snapshot.accounts.len(),
        transactions = snapshot.transactions.len(),
        budget_categories = snapshot.budget_categories.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Parses snapshot JSON.
///
/// Well-formed JSON whose records do not fit the domain (an unknown
/// transaction kind, a missing amount) is a data-integrity failure rather
/// than a syntax failure, so it is never mistaken for a truncated file.
pub fn parse_snapshot(data: &str) -> Result<FinanceSnapshot, CoreError> {
    serde_json::from_str(data).map_err(|err| match err.classify() {
        Category::Data => CoreError::DataIntegrity(err.to_string()),
        Category::Io | Category::Syntax | Category::Eof => CoreError::Serde(err.to_string()),
    })
}

/// Writes a snapshot to an arbitrary path on disk via a temporary file.
pub fn save_snapshot_to_path(snapshot: &FinanceSnapshot, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(snapshot).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
