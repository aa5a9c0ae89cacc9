//! Adapters layer for the dapp registry.
//!
//! Provides an in-memory account ledger for tests and single-process nodes.

pub mod memory_accounts;

pub use memory_accounts::InMemoryAccounts;
