//! # Domain Layer - Dapp Registry
//!
//! - `registry`: ConfirmedRegistry, DappRecord, RegistrySnapshot
//! - `errors`: RegistryError, DebitError

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
