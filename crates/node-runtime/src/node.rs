//! # Dapp Node
//!
//! Thread-safe facade over admission, the pending pool and block
//! application.
//!
//! ## Locking
//!
//! | State | Lock | Held for |
//! |-------|------|----------|
//! | confirmed registry | `RwLock<Arc<ConfirmedRegistry>>` | cloning the `Arc`, or swapping it |
//! | pending pool | `Mutex<DappPool>` | one insert, one snapshot, or the publish step |
//! | block application | `Mutex<()>` | a whole `assemble_block()` |
//!
//! Admission validates against a cloned registry `Arc` with no lock held,
//! so it may run concurrently with block application and see the previous
//! confirmed state. Block application re-checks everything, so such a
//! transaction can at worst be discarded later.
//!
//! Publishing a block swaps the registry and removes decided ids while the
//! pool lock is held. Lock order is always pool, then registry.

use crate::config::NodeConfig;
use dl_01_asset_validation::{validate_transaction, AdmissionError, ValidationPolicy};
use dl_02_dapp_registry::{AccountOracle, ConfirmedRegistry, DappRecord, RegistrySnapshot, RegistryView};
use dl_03_mempool::{DappPool, MempoolError, MempoolStatus, SystemTimeSource, TimeSource};
use dl_04_block_application::{BlockApplier, DiscardReason};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use shared_types::{RawDappTransaction, TransactionId};
use std::sync::Arc;
use tracing::{debug, info};

/// Which validation layer rejected a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Schema,
    Rule,
    Pool,
}

/// Synchronous answer to a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitResult {
    Accepted { id: TransactionId },
    Rejected { kind: ErrorKind, message: String },
}

impl SubmitResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    fn rejected(err: &MempoolError) -> Self {
        let kind = match err {
            MempoolError::Admission(AdmissionError::Schema(_)) => ErrorKind::Schema,
            MempoolError::Admission(AdmissionError::Rule(_)) => ErrorKind::Rule,
            _ => ErrorKind::Pool,
        };
        Self::Rejected {
            kind,
            message: err.to_string(),
        }
    }
}

/// Result of one block application as seen by the node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockSummary {
    pub committed: Vec<TransactionId>,
    pub discarded: Vec<(TransactionId, DiscardReason)>,
}

/// Where a transaction currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    /// Never admitted, or discarded during block application.
    Unknown,
}

/// The node facade.
pub struct DappNode {
    policy: ValidationPolicy,
    applier: BlockApplier,
    registry: RwLock<Arc<ConfirmedRegistry>>,
    pool: Mutex<DappPool>,
    apply_lock: Mutex<()>,
    oracle: Arc<dyn AccountOracle>,
    clock: Arc<dyn TimeSource>,
}

impl DappNode {
    /// Creates a node with an empty confirmed registry.
    pub fn new(config: &NodeConfig, oracle: Arc<dyn AccountOracle>) -> Self {
        Self::with_registry(config, ConfirmedRegistry::new(), oracle)
    }

    /// Creates a node starting from an existing confirmed registry.
    pub fn with_registry(
        config: &NodeConfig,
        registry: ConfirmedRegistry,
        oracle: Arc<dyn AccountOracle>,
    ) -> Self {
        let clock: Arc<dyn TimeSource> = Arc::new(SystemTimeSource);
        info!(
            confirmed = registry.len(),
            ordering = ?config.mempool.ordering,
            fee = config.validation.registration_fee,
            "[node] Starting dapp node"
        );
        Self {
            policy: config.validation.clone(),
            applier: BlockApplier::from_config(&config.block, &config.mempool),
            registry: RwLock::new(Arc::new(registry)),
            pool: Mutex::new(DappPool::with_time_source(
                config.mempool.clone(),
                Arc::clone(&clock),
            )),
            apply_lock: Mutex::new(()),
            oracle,
            clock,
        }
    }

    /// Validates and pools a transaction.
    ///
    /// Validation runs against the current confirmed snapshot with no lock
    /// held. The final insert takes the pool lock and refuses ids that were
    /// confirmed in the meantime.
    pub fn submit_transaction(&self, raw: RawDappTransaction) -> SubmitResult {
        let id = raw.id;
        let registry = self.confirmed();

        let result = validate_transaction(raw, registry.as_ref(), self.oracle.as_ref(), &self.policy)
            .map_err(MempoolError::from)
            .and_then(|validated| {
                let mut pool = self.pool.lock();
                // a block may have committed this id since the snapshot was taken
                if self.registry.read().is_confirmed(&validated.id()) {
                    return Err(MempoolError::AlreadyConfirmed(validated.id()));
                }
                pool.insert(validated)
            });

        match result {
            Ok(id) => SubmitResult::Accepted { id },
            Err(err) => {
                debug!(%id, error = %err, "[node] Submission rejected");
                SubmitResult::rejected(&err)
            }
        }
    }

    /// Applies up to `max_transactions` pending transactions.
    ///
    /// Committed and discarded transactions leave the pool in the same
    /// critical section that publishes the new registry.
    pub fn assemble_block(&self, max_transactions: usize) -> BlockSummary {
        let _applying = self.apply_lock.lock();

        let start = self.confirmed();
        let batch = self
            .pool
            .lock()
            .snapshot_for_block(max_transactions, self.applier.policy());
        if batch.is_empty() {
            return BlockSummary::default();
        }

        let outcome = self
            .applier
            .apply_batch(batch, start.as_ref(), self.oracle.as_ref());
        let decided = outcome.decided_ids();

        {
            let mut pool = self.pool.lock();
            *self.registry.write() = Arc::new(outcome.registry);
            pool.remove_many(&decided);
        }

        info!(
            committed = outcome.committed.len(),
            discarded = outcome.discarded.len(),
            "[node] Block assembled"
        );
        BlockSummary {
            committed: outcome.committed,
            discarded: outcome.discarded,
        }
    }

    /// Applies a block using the configured block size.
    pub fn assemble_next_block(&self) -> BlockSummary {
        self.assemble_block(self.applier.max_transactions())
    }

    pub fn transaction_status(&self, id: &TransactionId) -> TransactionStatus {
        let pool = self.pool.lock();
        if pool.contains(id) {
            TransactionStatus::Pending
        } else if self.registry.read().is_confirmed(id) {
            TransactionStatus::Confirmed
        } else {
            TransactionStatus::Unknown
        }
    }

    /// Confirmed registration holding `name`.
    pub fn confirmed_dapp(&self, name: &str) -> Option<DappRecord> {
        self.registry.read().record_by_name(name).cloned()
    }

    /// Serializable copy of the confirmed registry.
    pub fn registry_snapshot(&self) -> RegistrySnapshot {
        self.confirmed().snapshot()
    }

    pub fn pending_count(&self) -> usize {
        self.pool.lock().len()
    }

    /// Other pending transactions competing with `id` for a name or link.
    pub fn pending_conflicts(&self, id: &TransactionId) -> Vec<TransactionId> {
        self.pool.lock().conflicting(id)
    }

    pub fn mempool_status(&self) -> MempoolStatus {
        self.pool.lock().status(self.clock.now())
    }

    fn confirmed(&self) -> Arc<ConfirmedRegistry> {
        self.registry.read().clone()
    }
}
