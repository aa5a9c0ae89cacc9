//! # dl-02-dapp-registry
//!
//! Confirmed dapp registry for the dapp ledger.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: The `ConfirmedRegistry` is the agreed-upon
//!   view of which transaction owns each application name and link.
//! - **Read-only handle for validators**: Admission consults the registry
//!   through the [`RegistryView`] port and never mutates it.
//! - **Single writer**: Only block application holds a mutable registry, and
//!   it works on a batch-local copy that replaces the confirmed one on commit.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | At most one transaction id per name | `domain/registry.rs` - `register()` |
//! | INVARIANT-2 | At most one transaction id per link | `domain/registry.rs` - `register()` |
//! | INVARIANT-3 | Entries are only ever added | no removal API |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Account ledger | `AccountOracle` | Balance lookup and fee debit |

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
