//! # Node Runtime Library
//!
//! Wires the subsystems into a single [`DappNode`]. The `dapp-node` binary
//! in `main.rs` is a thin driver around it.
//!
//! ## Subsystems
//!
//! | Crate | Role |
//! |-------|------|
//! | `dl-01-asset-validation` | schema and business-rule validation |
//! | `dl-02-dapp-registry` | confirmed registry, account oracle port |
//! | `dl-03-mempool` | pending pool with uniqueness-key index |
//! | `dl-04-block-application` | sequential re-validation and commit |
//!
//! ## Flow
//!
//! ```text
//! submit_transaction ──validate──→ pool ──assemble_block──→ committed | discarded
//!        │                                                       │
//!        └── Rejected { Schema | Rule | Pool }                   └──→ new confirmed registry
//! ```

pub mod config;
pub mod node;
pub mod telemetry;

pub use config::{ConfigError, NodeConfig};
pub use node::{BlockSummary, DappNode, ErrorKind, SubmitResult, TransactionStatus};
pub use telemetry::{init_tracing, TelemetryError};
