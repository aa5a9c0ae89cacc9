//! Ports layer for the dapp registry.
//!
//! - Inbound: [`RegistryView`], the read-only handle validators receive
//! - Outbound: [`AccountOracle`], the account ledger contract

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
