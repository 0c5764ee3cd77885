//! Fixture loader for governance golden datasets and scenario files.
//!
//! Fixtures live next to this crate under `golden/` and `scenarios/`.
//! Any crate in the workspace can load them by relative path.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture tree.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until a `test-fixtures`
    // directory is a sibling or child.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    loop {
        if path.file_name().is_some_and(|name| name == "test-fixtures") && path.join("golden").exists() {
            return path;
        }
        let candidate = path.join("test-fixtures");
        if candidate.join("golden").exists() {
            return candidate;
        }
        let nested = path.join("crates").join("test-fixtures");
        if nested.join("golden").exists() {
            return nested;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().join("golden").exists(), "fixture tree not found");
    }

    #[test]
    fn all_golden_causal_files_exist() {
        let files = [
            "golden/causal/deployment_chain.json",
            "golden/causal/cycle_rejection.json",
            "golden/causal/counterfactual.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn all_golden_consistency_files_exist() {
        let files = [
            "golden/consistency/enterprise_corpus.json",
            "golden/consistency/clean_corpus.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn all_golden_files_parse_as_json() {
        let mut total = 0;
        for dir in ["golden/causal", "golden/consistency", "scenarios"] {
            for file in list_fixtures(dir) {
                let content = std::fs::read_to_string(&file)
                    .unwrap_or_else(|e| panic!("Failed to read {}: {}", file.display(), e));
                let _: serde_json::Value = serde_json::from_str(&content)
                    .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e));
                total += 1;
            }
        }
        assert_eq!(total, 6, "Expected 6 fixture files, found {}", total);
    }

    #[test]
    fn fixture_path_is_absolute() {
        assert!(fixture_path("golden/causal/deployment_chain.json").is_absolute());
    }
}
