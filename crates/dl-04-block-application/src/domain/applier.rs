//! # Block Applier
//!
//! Sequential reconciliation of a batch of pending registrations.
//!
//! For each transaction, in batch order:
//!
//! 1. drop ids seen earlier in the batch or already confirmed
//! 2. re-check name and link uniqueness against the working registry
//! 3. debit the fee through the account oracle
//! 4. register the name and link in the working registry
//!
//! The working registry starts as a copy of the confirmed one. The caller
//! publishes `BlockOutcome::registry` and removes `decided_ids()` from the
//! pool.

use super::outcome::{BlockOutcome, DiscardReason};
use crate::config::BlockConfig;
use dl_01_asset_validation::check_uniqueness;
use dl_02_dapp_registry::{AccountOracle, ConfirmedRegistry, DappRecord, DebitError, RegistryView};
use dl_03_mempool::{MempoolApi, MempoolConfig, OrderingPolicy};
use shared_types::{DappAsset, DappTransaction, TransactionId};
use std::collections::HashSet;
use tracing::{debug, error, info};

/// Applies ordered batches to the confirmed registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockApplier {
    policy: OrderingPolicy,
    max_transactions: usize,
}

impl BlockApplier {
    pub fn new(policy: OrderingPolicy, max_transactions: usize) -> Self {
        Self {
            policy,
            max_transactions,
        }
    }

    pub fn from_config(block: &BlockConfig, mempool: &MempoolConfig) -> Self {
        Self::new(mempool.ordering, block.max_transactions_per_block)
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    pub fn max_transactions(&self) -> usize {
        self.max_transactions
    }

    /// Takes a batch from the pool in the configured order and applies it.
    ///
    /// The pool is only read; removing decided ids is left to the caller so
    /// that it can do so atomically with publishing the new registry.
    pub fn assemble<P, O>(&self, pool: &P, registry: &ConfirmedRegistry, oracle: &O) -> BlockOutcome
    where
        P: MempoolApi + ?Sized,
        O: AccountOracle + ?Sized,
    {
        let batch = pool.snapshot_for_block(self.max_transactions, self.policy);
        self.apply_batch(batch, registry, oracle)
    }

    /// Applies `ordered` on top of `registry`.
    ///
    /// Every input transaction ends up in exactly one of `committed` or
    /// `discarded`. `registry` itself is left untouched.
    #[tracing::instrument(skip(self, ordered, registry, oracle), fields(batch_size = ordered.len()))]
    pub fn apply_batch<O>(
        &self,
        ordered: Vec<DappTransaction>,
        registry: &ConfirmedRegistry,
        oracle: &O,
    ) -> BlockOutcome
    where
        O: AccountOracle + ?Sized,
    {
        let mut working = registry.clone();
        let mut seen = HashSet::with_capacity(ordered.len());
        let mut committed = Vec::new();
        let mut discarded = Vec::new();

        for tx in ordered {
            match apply_one(&tx, &mut working, &mut seen, oracle) {
                Ok(()) => committed.push(tx.id),
                Err(reason) => {
                    debug!(id = %tx.id, %reason, "[dl-04] Transaction discarded");
                    discarded.push((tx.id, reason));
                }
            }
        }

        info!(
            committed = committed.len(),
            discarded = discarded.len(),
            registry_size = working.len(),
            "[dl-04] Batch applied"
        );

        BlockOutcome {
            registry: working,
            committed,
            discarded,
        }
    }
}

fn apply_one<O>(
    tx: &DappTransaction,
    working: &mut ConfirmedRegistry,
    seen: &mut HashSet<TransactionId>,
    oracle: &O,
) -> Result<(), DiscardReason>
where
    O: AccountOracle + ?Sized,
{
    if !seen.insert(tx.id) {
        return Err(DiscardReason::DuplicateInBatch);
    }
    if working.is_confirmed(&tx.id) {
        return Err(DiscardReason::AlreadyConfirmed);
    }
    if let Some(reason) = collision(&tx.asset, working) {
        return Err(reason);
    }

    oracle
        .debit(&tx.sender, tx.fee)
        .map_err(|err| match err {
            DebitError::InsufficientFunds {
                balance, required, ..
            } => DiscardReason::InsufficientFunds { balance, required },
        })?;

    let registered = working.register(DappRecord::from(tx));
    debug_assert!(registered.is_ok(), "checked registration refused: {registered:?}");
    registered.map_err(|err| {
        error!(id = %tx.id, error = %err, "[dl-04] Registry refused a checked transaction");
        DiscardReason::RegistryConflict(err.to_string())
    })
}

/// Uniqueness re-check against the working registry, naming the holder.
fn collision(asset: &DappAsset, working: &ConfirmedRegistry) -> Option<DiscardReason> {
    check_uniqueness(asset, working).err()?;

    if let Some(holder) = working.name_holder(&asset.name) {
        return Some(DiscardReason::NameTaken { holder });
    }
    working
        .link_holder(&asset.link)
        .map(|holder| DiscardReason::LinkTaken { holder })
}
