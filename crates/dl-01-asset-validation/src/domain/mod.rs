//! # Domain Layer - Asset Validation
//!
//! - `schema`: structural/type/range checks on raw JSON payloads
//! - `rules`: semantic checks and confirmed-state lookups
//! - `admission`: the combined pipeline and the `ValidatedTransaction` token
//! - `errors`: SchemaError, RuleError, AdmissionError

pub mod admission;
pub mod errors;
pub mod rules;
pub mod schema;

pub use admission::*;
pub use errors::*;
pub use rules::*;
pub use schema::*;
