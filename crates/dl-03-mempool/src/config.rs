//! Mempool configuration.

use serde::{Deserialize, Serialize};

/// Order in which pending transactions are offered to block application.
///
/// Within one block, the earlier of two transactions claiming the same key
/// wins, so this choice decides registration races.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Oldest admission first.
    #[default]
    ArrivalOrder,
    /// Highest fee first, ties broken by arrival.
    ///
    /// Admission only accepts the configured registration fee, so pooled
    /// fees differ only if the fee policy changed while they were pending.
    /// Otherwise this yields arrival order.
    HighestFeeFirst,
    /// Newest admission first.
    LatestArrivalFirst,
}

/// Configuration for the pending pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MempoolConfig {
    /// Maximum number of pending transactions.
    pub max_transactions: usize,
    /// Ordering used when assembling blocks.
    pub ordering: OrderingPolicy,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            max_transactions: 5000,
            ordering: OrderingPolicy::ArrivalOrder,
        }
    }
}

impl MempoolConfig {
    /// Small pool for tests.
    pub fn for_testing() -> Self {
        Self {
            max_transactions: 16,
            ..Default::default()
        }
    }
}
