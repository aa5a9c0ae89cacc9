//! # Dapp-Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Accounts, payloads and raw transactions
//! └── integration/      # Cross-subsystem flows
//!     ├── registration.rs  # Submission through confirmation
//!     ├── reconciliation.rs # Competing claims and ordering policies
//!     └── concurrency.rs   # Parallel admission against block application
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dl-tests
//! cargo test -p dl-tests integration::reconciliation::
//! ```

pub mod fixtures;
pub mod integration;
