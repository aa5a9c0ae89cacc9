//! Pool entry types.

use shared_types::{DappTransaction, Timestamp, TransactionId};

/// A transaction held in the pool with its admission metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PooledTransaction {
    /// The validated transaction.
    pub transaction: DappTransaction,
    /// Monotonic admission sequence number (unique per pool).
    pub sequence: u64,
    /// Admission time in milliseconds.
    pub added_at: Timestamp,
}

impl PooledTransaction {
    pub fn new(transaction: DappTransaction, sequence: u64, added_at: Timestamp) -> Self {
        Self {
            transaction,
            sequence,
            added_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.transaction.id
    }

    /// Age in milliseconds relative to `now`.
    pub fn age_ms(&self, now: Timestamp) -> u64 {
        now.saturating_sub(self.added_at)
    }
}
