//! Shared test fixtures.
//!
//! Three accounts mirror the usual functional setup: one well funded, one
//! holding exactly the registration fee and one with no funds at all.

use std::sync::Arc;

use dl_01_asset_validation::DEFAULT_REGISTRATION_FEE;
use dl_02_dapp_registry::InMemoryAccounts;
use node_runtime::{DappNode, NodeConfig, SubmitResult};
use serde_json::{json, Value};
use shared_types::{Address, Amount, RawDappTransaction, TransactionId, BASE_UNITS_PER_COIN};

pub const FEE: Amount = DEFAULT_REGISTRATION_FEE;

pub const FUNDED: &str = "16313739661670634666L";
pub const MINIMAL_FUNDS: &str = "2737453412992791987L";
pub const NO_FUNDS: &str = "8273455169423958419L";

/// Balances for the three fixture accounts.
pub fn accounts() -> Arc<InMemoryAccounts> {
    Arc::new(
        InMemoryAccounts::new()
            .with_balance(FUNDED, 1000 * BASE_UNITS_PER_COIN)
            .with_balance(MINIMAL_FUNDS, FEE),
    )
}

/// A node with default configuration and the fixture accounts.
pub fn node() -> (DappNode, Arc<InMemoryAccounts>) {
    node_with(NodeConfig::default())
}

pub fn node_with(config: NodeConfig) -> (DappNode, Arc<InMemoryAccounts>) {
    let accounts = accounts();
    let node = DappNode::new(&config, accounts.clone());
    (node, accounts)
}

/// The well-known guestbook application.
pub fn guestbook() -> Value {
    json!({
        "category": 0,
        "name": "Lisk Guestbook",
        "description": "The official Lisk guestbook",
        "tags": "guestbook message sidechain",
        "type": 0,
        "link": "https://github.com/MaxKK/guestbookDapp/archive/master.zip",
        "icon": "https://raw.githubusercontent.com/MaxKK/guestbookDapp/master/icon.png"
    })
}

/// A valid application whose name and link are derived from `seed`.
pub fn application(seed: u64) -> Value {
    json!({
        "category": seed % 9,
        "name": format!("app-{seed}"),
        "description": format!("Application number {seed}"),
        "tags": "games,social",
        "type": 0,
        "link": format!("https://example.com/apps/{seed}/master.zip"),
        "icon": format!("https://example.com/apps/{seed}/icon.png")
    })
}

/// Registration from `sender` paying the default fee.
///
/// `offset` changes the timestamp, so identical payloads get distinct ids.
pub fn transaction(sender: &str, asset: Value, offset: u64) -> RawDappTransaction {
    RawDappTransaction::new(
        Address::from(sender),
        FEE,
        1_500_000_000 + offset,
        asset,
        format!("{sender}:{offset}").into_bytes(),
    )
}

/// Unwraps an accepted submission.
pub fn accepted(result: SubmitResult) -> TransactionId {
    match result {
        SubmitResult::Accepted { id } => id,
        SubmitResult::Rejected { kind, message } => {
            panic!("expected acceptance, got {kind:?}: {message}")
        }
    }
}

/// Unwraps a rejected submission's message.
pub fn rejected(result: SubmitResult) -> String {
    match result {
        SubmitResult::Rejected { message, .. } => message,
        SubmitResult::Accepted { id } => panic!("expected rejection, {id} was accepted"),
    }
}
