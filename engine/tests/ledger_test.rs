//! Progress ledger integration tests against the file-backed store

mod common;

use common::{date, entry, TestEngine};
use fitter_progress_engine::repositories::ProgressLedger;
use fitter_progress_engine::storage::FileStore;
use std::sync::Arc;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_append_then_load_all_round_trip() {
    let engine = TestEngine::new().await;

    let first = entry(date(2025, 3, 17), 114.33, Some("Running"));
    let second = entry(date(2025, 3, 18), 9.33, None);
    engine.ledger.append(first.clone()).await.unwrap();
    engine.ledger.append(second.clone()).await.unwrap();

    let entries = engine.ledger.load_all().await;
    assert_eq!(entries, vec![first, second.clone()]);
    assert_eq!(entries.last(), Some(&second));
}

#[tokio::test]
async fn test_ledger_survives_reopen() {
    let engine = TestEngine::new().await;
    engine
        .ledger
        .append(entry(date(2025, 3, 17), 50.0, None))
        .await
        .unwrap();

    // Same directory, fresh store and ledger, as after an app restart
    let store = FileStore::open(engine.dir.path()).await.unwrap();
    let reopened = ProgressLedger::new(store);
    assert_eq!(reopened.load_all().await.len(), 1);
}

#[tokio::test]
async fn test_first_run_loads_empty_not_error() {
    let engine = TestEngine::new().await;
    assert!(engine.ledger.load_all().await.is_empty());
}

#[tokio::test]
async fn test_reset_then_load_all_is_empty() {
    let engine = TestEngine::new().await;
    engine
        .ledger
        .append(entry(date(2025, 3, 17), 50.0, None))
        .await
        .unwrap();

    assert_ok!(engine.ledger.reset().await);
    assert!(engine.ledger.load_all().await.is_empty());

    // Resetting an already-empty ledger is fine
    assert_ok!(engine.ledger.reset().await);
}

#[tokio::test]
async fn test_corrupt_ledger_file_reads_as_fresh() {
    let engine = TestEngine::new().await;
    engine
        .ledger
        .append(entry(date(2025, 3, 17), 50.0, None))
        .await
        .unwrap();

    tokio::fs::write(engine.dir.path().join("progressData"), "not json at all")
        .await
        .unwrap();

    assert!(engine.ledger.load_all().await.is_empty());

    // Appending over the corrupt state starts a fresh list
    engine
        .ledger
        .append(entry(date(2025, 3, 18), 25.0, None))
        .await
        .unwrap();
    assert_eq!(engine.ledger.load_all().await.len(), 1);
}

#[tokio::test]
async fn test_concurrent_appends_lose_nothing() {
    let engine = TestEngine::new().await;

    let mut handles = Vec::new();
    for i in 0..10u32 {
        let ledger = Arc::clone(&engine.ledger);
        handles.push(tokio::spawn(async move {
            ledger
                .append(entry(date(2025, 3, 17), f64::from(i), None))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(engine.ledger.load_all().await.len(), 10);
}
