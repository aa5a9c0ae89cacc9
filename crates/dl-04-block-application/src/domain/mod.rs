//! # Domain Layer - Block Application
//!
//! - `applier`: BlockApplier and the sequential reconciliation pass
//! - `outcome`: BlockOutcome and DiscardReason

pub mod applier;
pub mod outcome;

pub use applier::*;
pub use outcome::*;
