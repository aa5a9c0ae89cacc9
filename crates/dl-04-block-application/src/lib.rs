//! # Block Application Subsystem
//!
//! Turns an ordered batch of pending registrations into a new confirmed
//! registry.
//!
//! ## Two-Phase Protocol
//!
//! Admission validates each transaction against the confirmed registry of
//! its time. Nothing stops two pending transactions from claiming the same
//! name. Block application is the second phase: every transaction is
//! re-checked against a working copy that already contains the effects of
//! the earlier transactions in the same batch.
//!
//! ```text
//! confirmed ──clone──→ working ──tx₁ ok──→ working' ──tx₂ name taken──→ discard
//!                                                    └──tx₃ ok──→ working'' ──→ new confirmed
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Committed registrations never collide | `domain/applier.rs` - `apply_batch()` |
//! | INVARIANT-2 | Every input id is committed XOR discarded | `domain/applier.rs` - single pass |
//! | INVARIANT-3 | The input registry is never mutated | works on a clone |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Pending pool | `MempoolApi` | Ordered batch for `assemble()` |
//! | Account ledger | `AccountOracle` | Fee debit on commit |

pub mod config;
pub mod domain;

pub use config::*;
pub use domain::*;
