//! Common test utilities for integration tests
//!
//! Provides a tempdir-backed engine so tests exercise the real file store.

#![allow(dead_code)]

use chrono::NaiveDate;
use fitter_progress_engine::config::ApiConfig;
use fitter_progress_engine::repositories::{PreferencesRepository, ProgressLedger};
use fitter_progress_engine::storage::FileStore;
use fitter_progress_engine::ProgressEntry;
use std::sync::Arc;
use tempfile::TempDir;

/// Test engine wrapper over a throwaway storage directory
pub struct TestEngine {
    pub ledger: Arc<ProgressLedger<FileStore>>,
    pub prefs: PreferencesRepository<FileStore>,
    // Held so the directory outlives the test
    pub dir: TempDir,
}

impl TestEngine {
    /// Create a fresh engine over an empty temp directory
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::open(dir.path())
            .await
            .expect("Failed to open file store");

        Self {
            ledger: Arc::new(ProgressLedger::new(store.clone())),
            prefs: PreferencesRepository::new(store),
            dir,
        }
    }
}

/// Build a ledger entry for the given date
pub fn entry(date: NaiveDate, calories: f64, workout_name: Option<&str>) -> ProgressEntry {
    ProgressEntry {
        date,
        calories_burned: calories,
        workout_name: workout_name.map(str::to_string),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// API config pointing at a mock server
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}
