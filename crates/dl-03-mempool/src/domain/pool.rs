//! # Pending Pool - Arrival Queue and Uniqueness Index
//!
//! ## Data Structures
//!
//! - `by_id`: O(1) lookup by transaction id
//! - `by_arrival`: admission sequence → id (FIFO iteration)
//! - `by_key`: uniqueness key → ids of pending transactions claiming it
//!
//! ## Invariants Enforced
//!
//! - INVARIANT-1: No duplicate ids (checked in `insert()`)
//! - INVARIANT-3: `by_arrival` and `by_key` always describe exactly the
//!   entries of `by_id` (asserted in debug builds after every mutation)

use super::entities::PooledTransaction;
use super::errors::MempoolError;
use super::value_objects::MempoolStatus;
use crate::config::{MempoolConfig, OrderingPolicy};
use crate::ports::{SystemTimeSource, TimeSource};
use dl_01_asset_validation::{validate_transaction, ValidatedTransaction, ValidationPolicy};
use dl_02_dapp_registry::{AccountOracle, RegistryView};
use shared_types::{DappTransaction, RawDappTransaction, Timestamp, TransactionId, UniquenessKey};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Pending pool of validated dapp registrations.
pub struct DappPool {
    config: MempoolConfig,
    clock: Arc<dyn TimeSource>,
    next_sequence: u64,
    by_id: HashMap<TransactionId, PooledTransaction>,
    by_arrival: BTreeMap<u64, TransactionId>,
    by_key: HashMap<UniquenessKey, BTreeSet<TransactionId>>,
}

impl fmt::Debug for DappPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DappPool")
            .field("config", &self.config)
            .field("pending", &self.by_id.len())
            .field("next_sequence", &self.next_sequence)
            .finish_non_exhaustive()
    }
}

impl DappPool {
    /// Creates an empty pool using the system clock.
    pub fn new(config: MempoolConfig) -> Self {
        Self::with_time_source(config, Arc::new(SystemTimeSource))
    }

    pub fn with_time_source(config: MempoolConfig, clock: Arc<dyn TimeSource>) -> Self {
        Self {
            config,
            clock,
            next_sequence: 0,
            by_id: HashMap::new(),
            by_arrival: BTreeMap::new(),
            by_key: HashMap::new(),
        }
    }

    /// Creates a pool with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MempoolConfig::default())
    }

    pub fn config(&self) -> &MempoolConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: &TransactionId) -> Option<&PooledTransaction> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &TransactionId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Validates a raw transaction and inserts it.
    ///
    /// Validation runs against the given registry and oracle. On any failure
    /// nothing is stored.
    ///
    /// # Errors
    /// - `Admission` with the first schema or rule violation
    /// - any error from [`DappPool::insert`]
    pub fn admit<R, O>(
        &mut self,
        raw: RawDappTransaction,
        registry: &R,
        oracle: &O,
        policy: &ValidationPolicy,
    ) -> Result<TransactionId, MempoolError>
    where
        R: RegistryView + ?Sized,
        O: AccountOracle + ?Sized,
    {
        let validated = validate_transaction(raw, registry, oracle, policy)?;
        self.insert(validated)
    }

    /// Stores a validated transaction and indexes its uniqueness keys.
    ///
    /// Other pending transactions claiming the same name or link do not
    /// prevent insertion.
    ///
    /// # Errors
    /// - `DuplicateTransaction` if the id is already pending
    /// - `PoolFull` if the pool is at capacity
    pub fn insert(&mut self, validated: ValidatedTransaction) -> Result<TransactionId, MempoolError> {
        let id = validated.id();
        if self.by_id.contains_key(&id) {
            return Err(MempoolError::DuplicateTransaction(id));
        }
        if self.by_id.len() >= self.config.max_transactions {
            return Err(MempoolError::PoolFull {
                capacity: self.config.max_transactions,
            });
        }

        let tx = validated.into_inner();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        for key in tx.uniqueness_keys() {
            self.by_key.entry(key).or_default().insert(id);
        }
        self.by_arrival.insert(sequence, id);

        info!(
            %id,
            name = %tx.asset.name,
            sequence,
            "[dl-03] Transaction admitted"
        );
        self.by_id
            .insert(id, PooledTransaction::new(tx, sequence, self.clock.now()));

        self.debug_assert_consistent();
        Ok(id)
    }

    /// Removes a transaction and its index entries.
    pub fn remove(&mut self, id: &TransactionId) -> Result<DappTransaction, MempoolError> {
        let entry = self
            .by_id
            .remove(id)
            .ok_or(MempoolError::TransactionNotFound(*id))?;

        self.by_arrival.remove(&entry.sequence);
        for key in entry.transaction.uniqueness_keys() {
            if let Some(claimants) = self.by_key.get_mut(&key) {
                claimants.remove(id);
                if claimants.is_empty() {
                    self.by_key.remove(&key);
                }
            }
        }

        debug!(%id, "[dl-03] Transaction removed");
        self.debug_assert_consistent();
        Ok(entry.transaction)
    }

    /// Removes every listed id that is pending. Unknown ids are skipped.
    pub fn remove_many(&mut self, ids: &[TransactionId]) -> Vec<DappTransaction> {
        ids.iter().filter_map(|id| self.remove(id).ok()).collect()
    }

    /// Returns up to `max_count` pending transactions in `policy` order.
    ///
    /// The pool is not modified; the same call returns the same batch until
    /// something is inserted or removed.
    pub fn snapshot_for_block(&self, max_count: usize, policy: OrderingPolicy) -> Vec<DappTransaction> {
        let arrival = self.by_arrival.values();
        let ordered: Vec<&TransactionId> = match policy {
            OrderingPolicy::ArrivalOrder => arrival.take(max_count).collect(),
            OrderingPolicy::LatestArrivalFirst => arrival.rev().take(max_count).collect(),
            OrderingPolicy::HighestFeeFirst => {
                let mut ids: Vec<&TransactionId> = arrival.collect();
                // stable sort keeps arrival order among equal fees
                ids.sort_by_key(|id| {
                    std::cmp::Reverse(self.by_id.get(*id).map_or(0, |e| e.transaction.fee))
                });
                ids.truncate(max_count);
                ids
            }
        };

        ordered
            .into_iter()
            .filter_map(|id| self.by_id.get(id))
            .map(|entry| entry.transaction.clone())
            .collect()
    }

    /// Pending transactions claiming `key`, in id order.
    pub fn claimants(&self, key: &UniquenessKey) -> Vec<TransactionId> {
        self.by_key
            .get(key)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Other pending transactions sharing any uniqueness key with `id`.
    pub fn conflicting(&self, id: &TransactionId) -> Vec<TransactionId> {
        let Some(entry) = self.by_id.get(id) else {
            return Vec::new();
        };

        let mut others = BTreeSet::new();
        for key in entry.transaction.uniqueness_keys() {
            if let Some(claimants) = self.by_key.get(&key) {
                others.extend(claimants.iter().filter(|other| *other != id).copied());
            }
        }
        others.into_iter().collect()
    }

    /// Returns pool status.
    pub fn status(&self, now: Timestamp) -> MempoolStatus {
        MempoolStatus {
            pending_count: self.by_id.len(),
            contested_keys: self.by_key.values().filter(|ids| ids.len() > 1).count(),
            oldest_tx_age_ms: self
                .by_id
                .values()
                .map(|entry| entry.age_ms(now))
                .max()
                .unwrap_or(0),
        }
    }

    fn debug_assert_consistent(&self) {
        debug_assert_eq!(self.by_id.len(), self.by_arrival.len());
        debug_assert!(self
            .by_arrival
            .iter()
            .all(|(seq, id)| self.by_id.get(id).map(|e| e.sequence) == Some(*seq)));
        debug_assert!(self.by_key.iter().all(|(key, ids)| {
            !ids.is_empty()
                && ids.iter().all(|id| {
                    self.by_id
                        .get(id)
                        .is_some_and(|e| e.transaction.uniqueness_keys().contains(key))
                })
        }));
    }
}
