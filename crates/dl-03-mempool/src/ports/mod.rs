//! Ports layer for the pending pool.
//!
//! - Inbound: [`MempoolApi`], consumed by block application
//! - Outbound: [`TimeSource`], admission timestamps

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
