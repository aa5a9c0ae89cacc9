//! # Pending Pool (Mempool) Subsystem
//!
//! Holds admitted dapp registrations until block application either commits
//! or discards them.
//!
//! ## Purpose
//!
//! The pool accepts only [`ValidatedTransaction`]s, so every pooled entry has
//! passed schema and business-rule validation against some confirmed
//! registry snapshot. Pending transactions are NOT checked against each
//! other: two entries may claim the same name or link, and block
//! application picks the winner.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | No duplicate transaction ids | `domain/pool.rs` - `insert()` check |
//! | INVARIANT-2 | Every pooled entry is validated | `ValidatedTransaction` has a private constructor |
//! | INVARIANT-3 | Key index mirrors the entries | `domain/pool.rs` - `debug_assert_consistent()` |
//! | INVARIANT-4 | Snapshots never mutate the pool | `snapshot_for_block(&self, ..)` |
//!
//! ## Lifecycle
//!
//! ```text
//! [submitted] ──admit──→ [PENDING] ──apply──→ committed | discarded ──remove──→ [gone]
//!      │
//!      └── schema/rule failure ──→ rejected (never stored)
//! ```
//!
//! There is no age-based eviction. A transaction leaves the pool only when
//! block application has decided its fate.
//!
//! ## Ordering
//!
//! `snapshot_for_block()` takes an explicit [`OrderingPolicy`]:
//!
//! | Policy | Order |
//! |--------|-------|
//! | `ArrivalOrder` (default) | admission sequence, oldest first |
//! | `HighestFeeFirst` | fee descending, then arrival (arrival while the fee is fixed) |
//! | `LatestArrivalFirst` | admission sequence, newest first |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - MempoolApi trait (block application side)  │
//! │  ports/outbound.rs - TimeSource                                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/pool.rs          - DappPool with arrival and key index  │
//! │  domain/entities.rs      - PooledTransaction                    │
//! │  domain/value_objects.rs - MempoolStatus                        │
//! │  domain/errors.rs        - MempoolError                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`ValidatedTransaction`]: dl_01_asset_validation::ValidatedTransaction

pub mod config;
pub mod domain;
pub mod ports;

pub use config::*;
pub use domain::*;
pub use ports::*;
