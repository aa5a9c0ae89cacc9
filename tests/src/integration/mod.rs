//! Cross-subsystem integration tests.

pub mod reconciliation;
pub mod registration;
