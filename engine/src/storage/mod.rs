//! Local durable key-value storage
//!
//! The engine persists everything through this seam: the progress ledger,
//! the selected goal, and the session user id are each one string value
//! under a well-known key. Hosts supply whichever backend fits the
//! platform; `FileStore` covers desktop/dev and `MemoryStore` covers tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Storage layer error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string key-value storage
///
/// Writes must be visible to subsequent reads from the same store instance.
/// `get` of an absent key is `Ok(None)`, never an error; `remove` of an
/// absent key is a no-op.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
