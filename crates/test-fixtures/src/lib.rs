//! Golden dataset loader for CEPHO validation tests.
//!
//! Fixtures live under `crates/test-fixtures/golden/` and are shared by
//! every crate's integration tests. Paths passed to the loaders are relative
//! to the `test-fixtures` crate directory, e.g. `golden/validation/foo.json`.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const CRATE_DIR: &str = "test-fixtures";

/// Locate `crates/test-fixtures` by climbing from the calling crate's manifest.
fn fixtures_root() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR")
        .map_or_else(|_| PathBuf::from("."), PathBuf::from);
    start
        .ancestors()
        .map(|dir| dir.join(CRATE_DIR))
        .find(|candidate| candidate.join("golden").is_dir())
        .unwrap_or_else(|| panic!("no {CRATE_DIR}/golden above {}", start.display()))
}

fn read_fixture(relative_path: &str) -> (PathBuf, String) {
    let path = fixtures_root().join(relative_path);
    match std::fs::read_to_string(&path) {
        Ok(text) => (path, text),
        Err(e) => panic!("cannot read {}: {e}", path.display()),
    }
}

/// Deserialize a golden JSON file into `T`. Panics on I/O or parse failure,
/// which is what a test wants.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let (path, text) = read_fixture(relative_path);
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("bad JSON in {}: {e}", path.display()))
}

/// Untyped variant of [`load_fixture`].
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).is_file()
}

/// `*.json` files directly under `subdir`, sorted so golden runs are stable.
/// A missing directory yields an empty list.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixtures_root().join(subdir)) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
}

/// Turn a path from [`list_fixtures`] back into the form `load_fixture` takes.
pub fn relative_fixture_path(path: &Path) -> String {
    path.strip_prefix(fixtures_root())
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
