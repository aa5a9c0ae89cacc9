//! # Registry Reconciliation
//!
//! Pending transactions may conflict with each other; block application
//! decides the winner.
//!
//! ```text
//! submit(A: name=x) ──┐
//!                     ├──► pool holds both ──► block ──► A committed
//! submit(B: name=x) ──┘                                  B discarded (NameTaken)
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use dl_02_dapp_registry::ConfirmedRegistry;
    use dl_03_mempool::{MempoolConfig, OrderingPolicy};
    use dl_04_block_application::DiscardReason;
    use node_runtime::{DappNode, NodeConfig, SubmitResult, TransactionStatus};
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn renamed(seed: u64, name: &str) -> serde_json::Value {
        let mut asset = application(seed);
        asset["name"] = json!(name);
        asset
    }

    fn relinked(seed: u64, link: &str) -> serde_json::Value {
        let mut asset = application(seed);
        asset["link"] = json!(link);
        asset
    }

    #[test]
    fn test_same_name_first_arrival_wins() {
        let (node, _) = node();
        let first = accepted(node.submit_transaction(transaction(FUNDED, renamed(1, "shared"), 1)));
        let second = accepted(node.submit_transaction(transaction(FUNDED, renamed(2, "shared"), 2)));
        assert_eq!(node.pending_count(), 2);
        assert_eq!(node.pending_conflicts(&first), vec![second]);

        let summary = node.assemble_block(25);
        assert_eq!(summary.committed, vec![first]);
        assert_eq!(
            summary.discarded,
            vec![(second, DiscardReason::NameTaken { holder: first })]
        );
        assert_eq!(node.transaction_status(&second), TransactionStatus::Unknown);
        assert_eq!(node.confirmed_dapp("shared").unwrap().id, first);
    }

    #[test]
    fn test_same_link_first_arrival_wins() {
        let (node, _) = node();
        let link = "https://example.com/shared/master.zip";
        let first = accepted(node.submit_transaction(transaction(FUNDED, relinked(1, link), 1)));
        let second = accepted(node.submit_transaction(transaction(FUNDED, relinked(2, link), 2)));

        let summary = node.assemble_block(25);
        assert_eq!(summary.committed, vec![first]);
        assert_eq!(
            summary.discarded,
            vec![(second, DiscardReason::LinkTaken { holder: first })]
        );
    }

    #[test]
    fn test_identical_payloads_with_distinct_ids() {
        let (node, _) = node();
        let ids: Vec<_> = (0..3)
            .map(|offset| accepted(node.submit_transaction(transaction(FUNDED, guestbook(), offset))))
            .collect();
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 3);
        assert_eq!(node.mempool_status().contested_keys, 2);

        let summary = node.assemble_block(25);
        assert_eq!(summary.committed, vec![ids[0]]);
        assert_eq!(summary.discarded.len(), 2);
        assert_eq!(node.registry_snapshot().records.len(), 1);
        assert_eq!(node.mempool_status().contested_keys, 0);
    }

    #[test]
    fn test_latest_arrival_policy_reverses_winner() {
        let config = NodeConfig {
            mempool: MempoolConfig {
                ordering: OrderingPolicy::LatestArrivalFirst,
                ..Default::default()
            },
            ..Default::default()
        };
        let (node, _) = node_with(config);
        let first = accepted(node.submit_transaction(transaction(FUNDED, renamed(1, "shared"), 1)));
        let second = accepted(node.submit_transaction(transaction(FUNDED, renamed(2, "shared"), 2)));

        let summary = node.assemble_block(25);
        assert_eq!(summary.committed, vec![second]);
        assert_eq!(
            summary.discarded,
            vec![(first, DiscardReason::NameTaken { holder: second })]
        );
    }

    #[test]
    fn test_conflict_across_blocks() {
        let (node, _) = node();
        let first = accepted(node.submit_transaction(transaction(FUNDED, renamed(1, "shared"), 1)));
        let second = accepted(node.submit_transaction(transaction(FUNDED, renamed(2, "shared"), 2)));

        let summary = node.assemble_block(1);
        assert_eq!(summary.committed, vec![first]);
        assert_eq!(node.transaction_status(&second), TransactionStatus::Pending);

        let summary = node.assemble_block(1);
        assert!(summary.committed.is_empty());
        assert_eq!(
            summary.discarded,
            vec![(second, DiscardReason::NameTaken { holder: first })]
        );
        assert_eq!(node.pending_count(), 0);
    }

    #[test]
    fn test_pending_debits_can_exhaust_balance() {
        let (node, _) = node();
        let first = accepted(node.submit_transaction(transaction(MINIMAL_FUNDS, application(1), 1)));
        let second = accepted(node.submit_transaction(transaction(MINIMAL_FUNDS, application(2), 2)));

        let summary = node.assemble_block(25);
        assert_eq!(summary.committed, vec![first]);
        assert_eq!(
            summary.discarded,
            vec![(
                second,
                DiscardReason::InsufficientFunds {
                    balance: 0,
                    required: FEE
                }
            )]
        );
    }

    #[test]
    fn test_restored_registry_keeps_claims() {
        let (node, _) = node();
        let id = accepted(node.submit_transaction(transaction(FUNDED, guestbook(), 0)));
        node.assemble_block(25);

        let encoded = serde_json::to_string(&node.registry_snapshot()).unwrap();
        let registry = ConfirmedRegistry::from_snapshot(serde_json::from_str(&encoded).unwrap()).unwrap();
        let restored = DappNode::with_registry(&NodeConfig::default(), registry, accounts());

        assert_eq!(restored.transaction_status(&id), TransactionStatus::Confirmed);
        assert_eq!(
            rejected(restored.submit_transaction(transaction(FUNDED, renamed(7, "Lisk Guestbook"), 7))),
            "application name already exists: Lisk Guestbook"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Whatever the interleaving of submissions and blocks, every admitted
        /// transaction is decided exactly once and each name or link is
        /// confirmed at most once.
        #[test]
        fn prop_every_key_confirmed_at_most_once(
            claims in prop::collection::vec((0u8..4, 0u8..4, any::<bool>()), 1..24),
        ) {
            let (node, _) = node();
            let mut admitted = Vec::new();
            let mut committed = HashSet::new();
            let mut discarded = HashSet::new();

            for (offset, (name, link, seal)) in claims.iter().enumerate() {
                let mut asset = application(offset as u64);
                asset["name"] = json!(format!("name-{name}"));
                asset["link"] = json!(format!("https://example.com/{link}.zip"));
                // Claims on already confirmed keys are rejected at admission.
                if let SubmitResult::Accepted { id } =
                    node.submit_transaction(transaction(FUNDED, asset, offset as u64))
                {
                    admitted.push(id);
                }

                if *seal {
                    let summary = node.assemble_block(5);
                    committed.extend(summary.committed);
                    discarded.extend(summary.discarded.into_iter().map(|(id, _)| id));
                }
            }
            while node.pending_count() > 0 {
                let summary = node.assemble_block(5);
                committed.extend(summary.committed);
                discarded.extend(summary.discarded.into_iter().map(|(id, _)| id));
            }

            for id in &admitted {
                prop_assert!(committed.contains(id) ^ discarded.contains(id));
            }

            let snapshot = node.registry_snapshot();
            prop_assert_eq!(snapshot.records.len(), committed.len());
            prop_assert_eq!(snapshot.names.len(), committed.len());
            prop_assert_eq!(snapshot.links.len(), committed.len());
            for (id, record) in &snapshot.records {
                prop_assert_eq!(snapshot.names.get(&record.asset.name), Some(id));
                prop_assert_eq!(snapshot.links.get(&record.asset.link), Some(id));
            }
        }
    }
}
