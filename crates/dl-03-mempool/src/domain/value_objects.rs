//! Value objects for the pending pool.

/// Pool status information.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MempoolStatus {
    /// Number of pending transactions.
    pub pending_count: usize,
    /// Uniqueness keys claimed by more than one pending transaction.
    pub contested_keys: usize,
    /// Age of oldest transaction in milliseconds.
    pub oldest_tx_age_ms: u64,
}
