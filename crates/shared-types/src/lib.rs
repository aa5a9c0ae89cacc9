//! # Shared Types Crate
//!
//! This crate contains the domain entities used by every subsystem of the
//! dapp ledger.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Typed Boundary**: A submitted asset arrives as raw JSON
//!   ([`RawDappTransaction`]) and only becomes a typed [`DappTransaction`]
//!   once it has passed schema validation.
//! - **Opaque Identity**: Transaction ids are content-derived but treated as
//!   opaque 32-byte values by every consumer.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
