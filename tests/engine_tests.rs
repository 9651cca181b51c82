//! Tests for the Key-Value Engine
//!
//! These tests verify:
//! - Insert/update/get semantics
//! - Duplicate and missing-key rejection (map and log untouched)
//! - Append-before-apply consistency between log and map
//! - Accessors

use std::fs;
use std::path::PathBuf;

use journalkv::{Engine, JournalError};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_log() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("test.log");
    (temp_dir, log_path)
}

fn line_count(path: &PathBuf) -> usize {
    fs::read_to_string(path).unwrap().lines().count()
}

// =============================================================================
// Basic Operation Tests
// =============================================================================

#[test]
fn test_insert_and_get() {
    let (_temp, log_path) = setup_temp_log();
    let mut engine = Engine::open_path(&log_path).unwrap();

    engine.insert("a", json!(1)).unwrap();

    assert_eq!(engine.get("a"), Some(&json!(1)));
    assert_eq!(line_count(&log_path), 1);
}

#[test]
fn test_get_missing_returns_none() {
    let (_temp, log_path) = setup_temp_log();
    let engine = Engine::open_path(&log_path).unwrap();

    assert_eq!(engine.get("nope"), None);
}

#[test]
fn test_update_existing() {
    let (_temp, log_path) = setup_temp_log();
    let mut engine = Engine::open_path(&log_path).unwrap();

    engine.insert("a", json!(1)).unwrap();
    engine.update("a", json!(2)).unwrap();

    assert_eq!(engine.get("a"), Some(&json!(2)));
    assert_eq!(line_count(&log_path), 2);
}

#[test]
fn test_values_can_be_any_json() {
    let (_temp, log_path) = setup_temp_log();
    let mut engine = Engine::open_path(&log_path).unwrap();

    engine.insert("string", json!("text")).unwrap();
    engine.insert("number", json!(3.5)).unwrap();
    engine.insert("array", json!([1, 2, 3])).unwrap();
    engine.insert("object", json!({"k": "v"})).unwrap();
    engine.insert("null", json!(null)).unwrap();

    assert_eq!(engine.get("string"), Some(&json!("text")));
    assert_eq!(engine.get("number"), Some(&json!(3.5)));
    assert_eq!(engine.get("array"), Some(&json!([1, 2, 3])));
    assert_eq!(engine.get("object"), Some(&json!({"k": "v"})));
    assert_eq!(engine.get("null"), Some(&json!(null)));
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_insert_duplicate_rejected() {
    let (_temp, log_path) = setup_temp_log();
    let mut engine = Engine::open_path(&log_path).unwrap();

    engine.insert("k", json!("first")).unwrap();
    let result = engine.insert("k", json!("second"));

    assert!(matches!(result.unwrap_err(), JournalError::DuplicateKey(_)));

    // Map and log remain as after the first call only
    assert_eq!(engine.get("k"), Some(&json!("first")));
    assert_eq!(line_count(&log_path), 1);
}

#[test]
fn test_update_missing_rejected() {
    let (_temp, log_path) = setup_temp_log();
    let mut engine = Engine::open_path(&log_path).unwrap();

    let result = engine.update("k", json!("v"));

    assert!(matches!(result.unwrap_err(), JournalError::MissingKey(_)));

    // Nothing was appended
    assert_eq!(line_count(&log_path), 0);
    assert!(engine.is_empty());
}

#[test]
fn test_rejected_mutation_then_valid_one() {
    let (_temp, log_path) = setup_temp_log();
    let mut engine = Engine::open_path(&log_path).unwrap();

    // A caller can recover by routing to the other operation
    assert!(engine.update("k", json!(1)).is_err());
    engine.insert("k", json!(1)).unwrap();
    assert!(engine.insert("k", json!(2)).is_err());
    engine.update("k", json!(2)).unwrap();

    assert_eq!(engine.get("k"), Some(&json!(2)));
    assert_eq!(line_count(&log_path), 2);
}

// =============================================================================
// Accessor Tests
// =============================================================================

#[test]
fn test_accessors() {
    let (_temp, log_path) = setup_temp_log();
    let mut engine = Engine::open_path(&log_path).unwrap();

    assert!(engine.is_empty());
    assert_eq!(engine.len(), 0);
    assert!(!engine.contains_key("a"));

    engine.insert("a", json!(1)).unwrap();
    engine.insert("b", json!(2)).unwrap();

    assert!(!engine.is_empty());
    assert_eq!(engine.len(), 2);
    assert!(engine.contains_key("a"));
    assert_eq!(engine.log_path(), log_path.as_path());

    let mut keys: Vec<&String> = engine.iter().map(|(k, _)| k).collect();
    keys.sort();
    assert_eq!(keys, vec!["a", "b"]);
}
