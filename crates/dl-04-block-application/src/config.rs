//! Configuration types for block application

use serde::{Deserialize, Serialize};

/// Default upper bound on registrations applied per block.
pub const DEFAULT_MAX_TRANSACTIONS_PER_BLOCK: usize = 25;

/// Runtime configuration for block application
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    /// Maximum transactions taken from the pool per block
    pub max_transactions_per_block: usize,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            max_transactions_per_block: DEFAULT_MAX_TRANSACTIONS_PER_BLOCK,
        }
    }
}
