//! Engine error handling
//!
//! Every engine operation returns an explicit result; failures never
//! propagate as panics across the component boundary. Degraded reads
//! (missing or corrupt ledger data) are handled inside the ledger and do
//! not surface here at all.

use crate::storage::StorageError;
use thiserror::Error;

/// Unified error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote API error: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
