//! Progress ledger repository
//!
//! The ledger is an append-only list of per-day calorie entries stored as
//! one JSON array under the `progressData` key. Reads degrade: a missing
//! key, unreadable storage, or corrupt JSON all yield an empty, fresh
//! ledger. Writes do not: a failed append or reset is surfaced, since
//! silently dropping a recorded workout is data loss.
//!
//! The read-modify-write in `append` is not atomic at the storage layer.
//! Appends through one `ProgressLedger` are serialized by an internal
//! mutex; across separate app instances the last write wins.

use crate::error::EngineResult;
use crate::repositories::keys;
use crate::storage::KeyValueStore;
use fitter_progress_shared::models::ProgressEntry;
use tracing::{debug, warn};

/// Append-only ledger of completed-workout calorie entries
pub struct ProgressLedger<S> {
    store: S,
    write_lock: tokio::sync::Mutex<()>,
}

impl<S: KeyValueStore> ProgressLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// All entries in insertion order
    ///
    /// Returns an empty list on first run and whenever the stored data
    /// cannot be read or parsed; never an error.
    pub async fn load_all(&self) -> Vec<ProgressEntry> {
        match self.store.get(keys::LEDGER).await {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "Stored ledger is corrupt; treating as fresh");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(error = %e, "Ledger storage unreadable; treating as fresh");
                Vec::new()
            }
        }
    }

    /// Append one entry and persist the whole list
    pub async fn append(&self, entry: ProgressEntry) -> EngineResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_all().await;
        entries.push(entry);
        let serialized = serde_json::to_string(&entries)?;
        self.store.set(keys::LEDGER, &serialized).await?;

        debug!(total = entries.len(), "Appended progress entry");
        Ok(())
    }

    /// Clear the entire ledger
    ///
    /// Destructive and irreversible; confirmation is the caller's concern.
    pub async fn reset(&self) -> EngineResult<()> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(keys::LEDGER).await?;
        debug!("Ledger reset");
        Ok(())
    }
}
