//! # Inbound Port - MempoolApi
//!
//! The pool as seen by block application: read an ordered batch, then
//! drop the transactions whose fate has been decided.

use crate::config::OrderingPolicy;
use crate::domain::{DappPool, MempoolStatus};
use shared_types::{DappTransaction, Timestamp, TransactionId};

/// Block-application view of the pending pool.
///
/// Admission goes through [`DappPool::admit`] / [`DappPool::insert`], which
/// require a validated transaction and are not part of this port.
pub trait MempoolApi: Send + Sync {
    /// Up to `max_count` pending transactions in `policy` order. Never mutates.
    fn snapshot_for_block(&self, max_count: usize, policy: OrderingPolicy) -> Vec<DappTransaction>;

    /// Removes every listed id that is still pending and returns the removed transactions.
    fn remove_many(&mut self, ids: &[TransactionId]) -> Vec<DappTransaction>;

    fn contains(&self, id: &TransactionId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn status(&self, now: Timestamp) -> MempoolStatus;
}

impl MempoolApi for DappPool {
    fn snapshot_for_block(&self, max_count: usize, policy: OrderingPolicy) -> Vec<DappTransaction> {
        DappPool::snapshot_for_block(self, max_count, policy)
    }

    fn remove_many(&mut self, ids: &[TransactionId]) -> Vec<DappTransaction> {
        DappPool::remove_many(self, ids)
    }

    fn contains(&self, id: &TransactionId) -> bool {
        DappPool::contains(self, id)
    }

    fn len(&self) -> usize {
        DappPool::len(self)
    }

    fn status(&self, now: Timestamp) -> MempoolStatus {
        DappPool::status(self, now)
    }
}
