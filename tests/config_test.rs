//! Tests for loading search configuration from TOML files.

use std::fs;
use strictly_minimax::{SearchConfig, Searcher, TieBreak};
use tempfile::TempDir;

#[test]
fn test_from_file_reads_tie_break() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("search.toml");
    fs::write(&path, "tie_break = \"first\"\n").expect("Failed to write TOML");

    let config = SearchConfig::from_file(&path).expect("Config should load");
    assert_eq!(*config.tie_break(), TieBreak::First);

    let searcher = Searcher::new(config.clone());
    assert_eq!(searcher.config(), &config);
}

#[test]
fn test_from_file_defaults_missing_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("Failed to write TOML");

    let config = SearchConfig::from_file(&path).expect("Config should load");
    assert_eq!(config, SearchConfig::default());
}

#[test]
fn test_from_file_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = SearchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_from_file_rejects_unknown_policy() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "tie_break = \"middle\"\n").expect("Failed to write TOML");

    let err = SearchConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
