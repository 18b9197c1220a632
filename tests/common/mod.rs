#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use fintrack_domain::FinanceSnapshot;
use fintrack_storage_json::save_snapshot_to_path;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("snapshot.json")
}

/// Writes `snapshot` into a fresh temp dir and returns the file path.
pub fn write_snapshot(snapshot: &FinanceSnapshot) -> PathBuf {
    let path = temp_dir().join("snapshot.json");
    save_snapshot_to_path(snapshot, &path).expect("write snapshot");
    path
}

/// Config path that does not exist yet, so runs use default preferences
/// regardless of the machine's own config directory.
pub fn isolated_config() -> PathBuf {
    temp_dir().join("config.json")
}
