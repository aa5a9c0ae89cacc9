//! # Asset Validation Subsystem
//!
//! Two-layer validation of dapp registration transactions.
//!
//! ## Layers
//!
//! | Layer | Entry point | Consults | Error |
//! |-------|-------------|----------|-------|
//! | Schema | `validate_schema()` | payload only | `SchemaError` |
//! | Business rules | `validate_rules()` | `RegistryView`, `AccountOracle` | `RuleError` |
//!
//! The schema layer turns raw JSON into a typed `DappAsset` exactly once, at
//! the boundary. Business rules never see a partially-typed payload. The two
//! layers have deliberately different strictness: the schema accepts
//! `type` 0 or 1, while the rule layer currently only supports 0.
//!
//! ## Admission Token
//!
//! `validate_transaction()` runs both layers and returns a
//! `ValidatedTransaction`. Its constructor is private, so the mempool can
//! only ever store transactions that went through this module.
//!
//! ```rust,ignore
//! let validated = validate_transaction(raw, &registry, &accounts, &policy)?;
//! pool.insert(validated)?;
//! ```
//!
//! Uniqueness is checked against confirmed state only, never against other
//! pending transactions. Conflicts between pending transactions are resolved
//! later, at block application, through `check_uniqueness()`.

pub mod config;
pub mod domain;

pub use config::*;
pub use domain::*;
