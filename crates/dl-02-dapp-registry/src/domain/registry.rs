//! # Confirmed Registry
//!
//! Ledger state mapping each application name and link to the single
//! transaction that registered it.
//!
//! ## Data Structures
//!
//! - `by_name`: O(1) name → transaction id
//! - `by_link`: O(1) link → transaction id
//! - `records`: O(1) transaction id → confirmed registration
//!
//! ## Invariants Enforced
//!
//! - INVARIANT-1/2: `register()` refuses a name or link that is already held
//! - INVARIANT-3: there is no removal API; entries are monotonic

use super::errors::RegistryError;
use crate::ports::RegistryView;
use serde::{Deserialize, Serialize};
use shared_types::{Address, DappAsset, DappTransaction, TransactionId, UniquenessKey};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// A confirmed dapp registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DappRecord {
    pub id: TransactionId,
    pub sender: Address,
    pub asset: DappAsset,
}

impl From<&DappTransaction> for DappRecord {
    fn from(tx: &DappTransaction) -> Self {
        Self {
            id: tx.id,
            sender: tx.sender.clone(),
            asset: tx.asset.clone(),
        }
    }
}

/// Confirmed name/link registry.
///
/// Cloning produces an independent working copy; block application mutates
/// the copy and publishes it as the new confirmed state once the batch ends.
#[derive(Clone, Debug, Default)]
pub struct ConfirmedRegistry {
    by_name: HashMap<String, TransactionId>,
    by_link: HashMap<String, TransactionId>,
    records: HashMap<TransactionId, DappRecord>,
}

impl ConfirmedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of confirmed registrations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the transaction holding `key`, if any.
    pub fn holder(&self, key: &UniquenessKey) -> Option<TransactionId> {
        match key {
            UniquenessKey::Name(name) => self.by_name.get(name).copied(),
            UniquenessKey::Link(link) => self.by_link.get(link).copied(),
        }
    }

    pub fn record(&self, id: &TransactionId) -> Option<&DappRecord> {
        self.records.get(id)
    }

    pub fn record_by_name(&self, name: &str) -> Option<&DappRecord> {
        self.by_name.get(name).and_then(|id| self.records.get(id))
    }

    /// Iterates confirmed registrations in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &DappRecord> {
        self.records.values()
    }

    /// Commits a registration.
    ///
    /// # Errors
    /// - `DuplicateTransaction` if the id is already confirmed
    /// - `NameTaken` / `LinkTaken` if either key is held by another transaction
    pub fn register(&mut self, record: DappRecord) -> Result<(), RegistryError> {
        if self.records.contains_key(&record.id) {
            return Err(RegistryError::DuplicateTransaction(record.id));
        }
        if let Some(holder) = self.by_name.get(&record.asset.name) {
            return Err(RegistryError::NameTaken {
                name: record.asset.name.clone(),
                holder: *holder,
            });
        }
        if let Some(holder) = self.by_link.get(&record.asset.link) {
            return Err(RegistryError::LinkTaken {
                link: record.asset.link.clone(),
                holder: *holder,
            });
        }

        debug!(
            id = %record.id,
            name = %record.asset.name,
            "[dl-02] Registering dapp"
        );
        self.by_name.insert(record.asset.name.clone(), record.id);
        self.by_link.insert(record.asset.link.clone(), record.id);
        self.records.insert(record.id, record);
        Ok(())
    }

    /// Exports the registry for inclusion in a ledger snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            names: self.by_name.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            links: self.by_link.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            records: self.records.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }

    /// Restores a registry from a snapshot, re-checking uniqueness.
    ///
    /// The name and link maps are rebuilt from the records and must match the
    /// maps stored in the snapshot.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for record in snapshot.records.into_values() {
            registry.register(record)?;
        }

        for (name, id) in &snapshot.names {
            if registry.by_name.get(name) != Some(id) {
                return Err(RegistryError::SnapshotMismatch {
                    key: UniquenessKey::Name(name.clone()).to_string(),
                });
            }
        }
        for (link, id) in &snapshot.links {
            if registry.by_link.get(link) != Some(id) {
                return Err(RegistryError::SnapshotMismatch {
                    key: UniquenessKey::Link(link.clone()).to_string(),
                });
            }
        }
        if snapshot.names.len() != registry.by_name.len()
            || snapshot.links.len() != registry.by_link.len()
        {
            return Err(RegistryError::SnapshotMismatch {
                key: "record count".to_string(),
            });
        }

        Ok(registry)
    }
}

impl RegistryView for ConfirmedRegistry {
    fn name_holder(&self, name: &str) -> Option<TransactionId> {
        self.by_name.get(name).copied()
    }

    fn link_holder(&self, link: &str) -> Option<TransactionId> {
        self.by_link.get(link).copied()
    }

    fn is_confirmed(&self, id: &TransactionId) -> bool {
        self.records.contains_key(id)
    }
}

/// Serializable form of the registry (ordinary key → id mappings).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub names: BTreeMap<String, TransactionId>,
    pub links: BTreeMap<String, TransactionId>,
    pub records: BTreeMap<TransactionId, DappRecord>,
}
