//! Mempool error types.

use dl_01_asset_validation::AdmissionError;
use shared_types::TransactionId;
use thiserror::Error;

/// Mempool error type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MempoolError {
    /// Validation failed; nothing was stored.
    #[error(transparent)]
    Admission(#[from] AdmissionError),

    /// Transaction already exists in the pool.
    #[error("duplicate transaction: {0}")]
    DuplicateTransaction(TransactionId),

    /// Transaction was committed while it was being validated.
    #[error("transaction already confirmed: {0}")]
    AlreadyConfirmed(TransactionId),

    /// Pool has reached maximum capacity.
    #[error("pool full: capacity {capacity}")]
    PoolFull { capacity: usize },

    /// Transaction not found in the pool.
    #[error("transaction not found: {0}")]
    TransactionNotFound(TransactionId),
}
