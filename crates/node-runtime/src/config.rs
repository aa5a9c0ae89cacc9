//! # Node Configuration
//!
//! Unified configuration for validation, the pending pool and block
//! application. Every field has a default, so a partial JSON file (or none
//! at all) is a valid configuration.
//!
//! ```json
//! {
//!   "validation": { "registration_fee": 2500000000, "link_extensions": [".zip"] },
//!   "mempool": { "max_transactions": 5000, "ordering": "arrival_order" },
//!   "block": { "max_transactions_per_block": 25 },
//!   "log_level": "info"
//! }
//! ```

use dl_01_asset_validation::{PolicyError, ValidationPolicy};
use dl_03_mempool::MempoolConfig;
use dl_04_block_application::BlockConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Schema bounds, whitelists and the registration fee.
    pub validation: ValidationPolicy,
    /// Pending pool configuration.
    pub mempool: MempoolConfig,
    /// Block application configuration.
    pub block: BlockConfig,
    /// Default log filter, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::default(),
            mempool: MempoolConfig::default(),
            block: BlockConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl NodeConfig {
    /// Configuration with a small fee and small pool.
    pub fn for_testing() -> Self {
        Self {
            validation: ValidationPolicy::for_testing(),
            mempool: MempoolConfig::for_testing(),
            log_level: "debug".to_string(),
            ..Default::default()
        }
    }

    /// Loads and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks bounds and limits for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()?;
        if self.mempool.max_transactions == 0 {
            return Err(ConfigError::Invalid(
                "mempool.max_transactions must be positive".into(),
            ));
        }
        if self.block.max_transactions_per_block == 0 {
            return Err(ConfigError::Invalid(
                "block.max_transactions_per_block must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<PolicyError> for ConfigError {
    fn from(err: PolicyError) -> Self {
        Self::Invalid(format!("validation.{err}"))
    }
}
