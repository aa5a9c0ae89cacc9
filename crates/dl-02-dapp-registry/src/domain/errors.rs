use shared_types::{Address, Amount, TransactionId};
use thiserror::Error;

/// Registry mutation errors.
///
/// Block application checks uniqueness before writing, so seeing one of
/// these from the applier indicates a broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("application name already registered: {name} (held by {holder})")]
    NameTaken { name: String, holder: TransactionId },

    #[error("application link already registered: {link} (held by {holder})")]
    LinkTaken { link: String, holder: TransactionId },

    #[error("transaction already confirmed: {0}")]
    DuplicateTransaction(TransactionId),

    #[error("snapshot index mismatch for {key}")]
    SnapshotMismatch { key: String },
}

/// Errors returned by the account oracle when mutating balances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebitError {
    #[error("insufficient funds: {address} balance: {balance}, required {required}")]
    InsufficientFunds {
        address: Address,
        balance: Amount,
        required: Amount,
    },
}
