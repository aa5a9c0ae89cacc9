use crate::domain::DebitError;
use crate::ports::AccountOracle;
use parking_lot::RwLock;
use shared_types::{Address, Amount};
use std::collections::HashMap;
use tracing::trace;

/// In-memory implementation of AccountOracle for testing
#[derive(Debug, Default)]
pub struct InMemoryAccounts {
    balances: RwLock<HashMap<Address, Amount>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(self, address: impl Into<Address>, balance: Amount) -> Self {
        self.balances.write().insert(address.into(), balance);
        self
    }

    /// Adds funds to an account, creating it if needed.
    pub fn credit(&self, address: &Address, amount: Amount) {
        let mut balances = self.balances.write();
        let balance = balances.entry(address.clone()).or_insert(0);
        *balance = balance.saturating_add(amount);
    }
}

impl AccountOracle for InMemoryAccounts {
    fn balance_of(&self, address: &Address) -> Amount {
        self.balances.read().get(address).copied().unwrap_or(0)
    }

    fn debit(&self, address: &Address, amount: Amount) -> Result<(), DebitError> {
        let mut balances = self.balances.write();
        let balance = balances.get(address).copied().unwrap_or(0);
        if balance < amount {
            return Err(DebitError::InsufficientFunds {
                address: address.clone(),
                balance,
                required: amount,
            });
        }
        trace!(%address, amount, "[dl-02] Debiting account");
        balances.insert(address.clone(), balance - amount);
        Ok(())
    }
}
