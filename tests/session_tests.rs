//! Tests for Session
//!
//! Tests verify:
//! - Open loads the data file
//! - Close, drop and run all persist the store
//! - save_on_close = false never writes
//! - A failing run still saves earlier changes

use std::fs;
use std::path::PathBuf;

use studentdb::{Config, Session, Student, StudentDbError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_config() -> (TempDir, PathBuf, Config) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.txt");
    let config = Config::builder().data_file(&path).build();
    (temp_dir, path, config)
}

fn alice() -> Student {
    Student::new(1, "Alice", 20, "F", "Physics", 3.5)
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_open_loads_existing_file() {
    let (_temp, path, config) = setup_temp_config();
    fs::write(&path, "1,Alice,20,F,Physics,3.5\n").unwrap();

    let session = Session::open(config).unwrap();

    assert_eq!(session.count(), 1);
    assert_eq!(session.find(1).unwrap().name(), "Alice");
}

#[test]
fn test_close_saves() {
    let (_temp, path, config) = setup_temp_config();

    let mut session = Session::open(config.clone()).unwrap();
    session.add(alice()).unwrap();
    session.close().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Alice,20,F,Physics,3.5\n");

    let reopened = Session::open(config).unwrap();
    assert_eq!(reopened.count(), 1);
}

#[test]
fn test_drop_without_close_saves() {
    let (_temp, path, config) = setup_temp_config();

    {
        let mut session = Session::open(config).unwrap();
        session.add(alice()).unwrap();
    }

    assert!(path.exists());
    let session = Session::open_path(&path).unwrap();
    assert!(session.contains(1));
}

#[test]
fn test_save_on_close_disabled_writes_nothing() {
    let (_temp, path, _) = setup_temp_config();
    let config = Config::builder()
        .data_file(&path)
        .save_on_close(false)
        .build();

    {
        let mut session = Session::open(config.clone()).unwrap();
        session.add(alice()).unwrap();
    }
    let session = Session::open(config).unwrap();
    session.close().unwrap();

    assert!(!path.exists());
}

// =============================================================================
// Run Tests
// =============================================================================

#[test]
fn test_run_returns_closure_value_and_saves() {
    let (_temp, path, config) = setup_temp_config();

    let count = Session::run(config, |store| {
        store.add(alice())?;
        Ok(store.count())
    })
    .unwrap();

    assert_eq!(count, 1);
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
}

#[test]
fn test_run_saves_even_when_closure_fails() {
    let (_temp, path, config) = setup_temp_config();

    let result = Session::run(config, |store| {
        store.add(alice())?;
        store.delete(42)?;
        Ok(())
    });

    assert!(matches!(result, Err(StudentDbError::NotFound(42))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Alice,20,F,Physics,3.5\n");
}

#[test]
fn test_run_reports_save_failure() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp.path().join("missing").join("students.txt"))
        .build();

    let result = Session::run(config, |store| store.add(alice()));

    assert!(matches!(result, Err(StudentDbError::Io(_))));
}
