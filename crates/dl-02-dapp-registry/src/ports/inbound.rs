//! # Inbound Port - RegistryView
//!
//! Read-only access to confirmed registry state. Admission-time validation
//! receives this handle explicitly instead of consulting ambient global
//! state; only block application owns a mutable registry.

use shared_types::{TransactionId, UniquenessKey};
use std::sync::Arc;

/// Read-only view over confirmed name/link ownership.
pub trait RegistryView: Send + Sync {
    /// Transaction that registered `name`, if confirmed.
    fn name_holder(&self, name: &str) -> Option<TransactionId>;

    /// Transaction that registered `link`, if confirmed.
    fn link_holder(&self, link: &str) -> Option<TransactionId>;

    /// Whether the transaction has been committed.
    fn is_confirmed(&self, id: &TransactionId) -> bool;

    /// Transaction holding an arbitrary uniqueness key.
    fn key_holder(&self, key: &UniquenessKey) -> Option<TransactionId> {
        match key {
            UniquenessKey::Name(name) => self.name_holder(name),
            UniquenessKey::Link(link) => self.link_holder(link),
        }
    }
}

impl<T: RegistryView + ?Sized> RegistryView for Arc<T> {
    fn name_holder(&self, name: &str) -> Option<TransactionId> {
        (**self).name_holder(name)
    }

    fn link_holder(&self, link: &str) -> Option<TransactionId> {
        (**self).link_holder(link)
    }

    fn is_confirmed(&self, id: &TransactionId) -> bool {
        (**self).is_confirmed(id)
    }
}
