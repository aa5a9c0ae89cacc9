//! Results of applying a batch.

use dl_02_dapp_registry::ConfirmedRegistry;
use shared_types::{Amount, TransactionId};
use std::fmt;

/// Why a pending transaction was dropped during block application.
///
/// Discards are a normal outcome of the two-phase protocol, not errors.
/// Submitters learn about them only by querying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiscardReason {
    /// An earlier transaction (confirmed or in this batch) holds the name.
    NameTaken { holder: TransactionId },
    /// An earlier transaction (confirmed or in this batch) holds the link.
    LinkTaken { holder: TransactionId },
    /// The sender could no longer pay the fee.
    InsufficientFunds { balance: Amount, required: Amount },
    /// The id already appeared earlier in the same batch.
    DuplicateInBatch,
    /// The id is already committed in the confirmed registry.
    AlreadyConfirmed,
    /// The registry refused a transaction that passed the uniqueness check.
    RegistryConflict(String),
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTaken { holder } => write!(f, "name taken by {holder}"),
            Self::LinkTaken { holder } => write!(f, "link taken by {holder}"),
            Self::InsufficientFunds { balance, required } => {
                write!(f, "insufficient funds: balance {balance}, required {required}")
            }
            Self::DuplicateInBatch => f.write_str("duplicate transaction in batch"),
            Self::AlreadyConfirmed => f.write_str("transaction already confirmed"),
            Self::RegistryConflict(reason) => write!(f, "registry conflict: {reason}"),
        }
    }
}

/// Result of applying one batch.
#[derive(Clone, Debug)]
pub struct BlockOutcome {
    /// The new confirmed registry.
    pub registry: ConfirmedRegistry,
    /// Committed ids in application order.
    pub committed: Vec<TransactionId>,
    /// Discarded ids in application order.
    pub discarded: Vec<(TransactionId, DiscardReason)>,
}

impl BlockOutcome {
    /// Every id whose fate was decided; these leave the pending pool.
    pub fn decided_ids(&self) -> Vec<TransactionId> {
        self.committed
            .iter()
            .copied()
            .chain(self.discarded.iter().map(|(id, _)| *id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.discarded.is_empty()
    }
}
