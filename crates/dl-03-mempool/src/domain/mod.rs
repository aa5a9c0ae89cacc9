//! # Domain Layer - Pending Pool
//!
//! - `pool`: the pool and its indices
//! - `entities`: PooledTransaction
//! - `value_objects`: MempoolStatus
//! - `errors`: MempoolError

pub mod entities;
pub mod errors;
pub mod pool;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use pool::*;
pub use value_objects::*;
