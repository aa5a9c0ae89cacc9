//! # Dapp Node
//!
//! Replays a batch of submissions through admission and block application.
//!
//! ```text
//! dapp-node <submissions.json> [config.json]
//! ```
//!
//! The submissions file seeds account balances and lists raw transactions:
//!
//! ```json
//! {
//!   "accounts": { "16313739661670634666L": 2500000000 },
//!   "transactions": [ { "id": "…", "sender": "…", "fee": 2500000000, "timestamp": 0,
//!                       "asset": { "name": "…", "category": 0, "type": 0, "link": "…" },
//!                       "signature": "…" } ]
//! }
//! ```
//!
//! Submissions are admitted concurrently, then blocks are assembled until
//! the pool is drained. The final registry snapshot is printed as JSON.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use dl_02_dapp_registry::InMemoryAccounts;
use node_runtime::{init_tracing, DappNode, NodeConfig, SubmitResult};
use shared_types::{Address, Amount, RawDappTransaction};

/// Contents of the submissions file.
#[derive(Debug, Deserialize)]
struct Submissions {
    #[serde(default)]
    accounts: BTreeMap<Address, Amount>,
    transactions: Vec<RawDappTransaction>,
}

fn load_config(path: Option<PathBuf>) -> Result<NodeConfig> {
    match path {
        Some(path) => NodeConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(NodeConfig::default()),
    }
}

fn load_submissions(path: &Path) -> Result<Submissions> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let Some(submissions_path) = args.next() else {
        bail!("usage: dapp-node <submissions.json> [config.json]");
    };
    let config = load_config(args.next())?;
    init_tracing(&config.log_level)?;

    let submissions = load_submissions(&submissions_path)?;
    let accounts = InMemoryAccounts::new();
    for (address, balance) in &submissions.accounts {
        accounts.credit(address, *balance);
    }

    let node = Arc::new(DappNode::new(&config, Arc::new(accounts)));
    info!(
        transactions = submissions.transactions.len(),
        "[node] Replaying submissions"
    );

    let handles: Vec<_> = submissions
        .transactions
        .into_iter()
        .map(|tx| {
            let node = Arc::clone(&node);
            tokio::task::spawn_blocking(move || (tx.id, node.submit_transaction(tx)))
        })
        .collect();

    let mut accepted = 0usize;
    for handle in handles {
        let (id, result) = handle.await.context("Submission task panicked")?;
        match result {
            SubmitResult::Accepted { .. } => accepted += 1,
            SubmitResult::Rejected { kind, message } => {
                warn!(%id, ?kind, %message, "[node] Transaction rejected");
            }
        }
    }
    info!(accepted, "[node] Admission finished");

    let mut height = 0u64;
    while node.pending_count() > 0 {
        height += 1;
        let summary = node.assemble_next_block();
        info!(
            height,
            committed = summary.committed.len(),
            discarded = summary.discarded.len(),
            "[node] Block applied"
        );
        for (id, reason) in &summary.discarded {
            info!(%id, %reason, "[node] Discarded");
        }
    }

    let snapshot = serde_json::to_string_pretty(&node.registry_snapshot())
        .context("Failed to encode registry snapshot")?;
    println!("{snapshot}");
    Ok(())
}
