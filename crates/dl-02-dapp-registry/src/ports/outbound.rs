//! Outbound (Driven) ports for the dapp registry.
//!
//! The surrounding ledger owns account balances; this core only consumes
//! them through the two operations below.

use crate::domain::DebitError;
use shared_types::{Address, Amount};
use std::sync::Arc;

/// Account/fee oracle provided by the account ledger.
///
/// Both operations are treated as atomic and authoritative. No balance
/// bookkeeping happens on this side of the port.
pub trait AccountOracle: Send + Sync {
    /// Current spendable balance. Unknown accounts have a balance of zero.
    fn balance_of(&self, address: &Address) -> Amount;

    /// Deducts `amount` from the account.
    ///
    /// # Errors
    /// - `InsufficientFunds` if the balance is lower than `amount`
    fn debit(&self, address: &Address, amount: Amount) -> Result<(), DebitError>;
}

impl<T: AccountOracle + ?Sized> AccountOracle for Arc<T> {
    fn balance_of(&self, address: &Address) -> Amount {
        (**self).balance_of(address)
    }

    fn debit(&self, address: &Address, amount: Amount) -> Result<(), DebitError> {
        (**self).debit(address, amount)
    }
}
