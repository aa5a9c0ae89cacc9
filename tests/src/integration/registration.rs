//! # Registration Flow
//!
//! Submission through confirmation on a single node:
//!
//! 1. **Schema**: malformed payloads are rejected and never pooled
//! 2. **Rules**: URLs, whitelists, tags, confirmed uniqueness, balance
//! 3. **Confirmation**: accepted transactions end up in the registry

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use dl_02_dapp_registry::AccountOracle;
    use node_runtime::{DappNode, ErrorKind, SubmitResult, TransactionStatus};
    use serde_json::{json, Value};
    use shared_types::Address;

    /// A node where the guestbook application is already confirmed.
    fn node_with_guestbook() -> DappNode {
        let (node, _) = node();
        let id = accepted(node.submit_transaction(transaction(FUNDED, guestbook(), 0)));
        assert_eq!(node.assemble_block(25).committed, vec![id]);
        node
    }

    fn submit_variant(node: &DappNode, edit: impl FnOnce(&mut Value)) -> SubmitResult {
        let mut asset = application(1);
        edit(&mut asset);
        node.submit_transaction(transaction(FUNDED, asset, 1))
    }

    fn assert_rejected(node: &DappNode, edit: impl FnOnce(&mut Value), expected: &str) {
        let message = rejected(submit_variant(node, edit));
        assert!(
            message.ends_with(expected),
            "message {message:?} does not end with {expected:?}"
        );
        assert_eq!(node.pending_count(), 0);
    }

    fn assert_accepted(node: &DappNode, edit: impl FnOnce(&mut Value)) {
        let id = accepted(submit_variant(node, edit));
        assert_eq!(node.transaction_status(&id), TransactionStatus::Pending);
    }

    fn remove(field: &'static str) -> impl FnOnce(&mut Value) {
        move |asset| {
            asset.as_object_mut().unwrap().remove(field);
        }
    }

    fn set(field: &'static str, value: Value) -> impl FnOnce(&mut Value) {
        move |asset| asset[field] = value
    }

    // =========================================================================
    // SCHEMA VALIDATIONS
    // =========================================================================

    #[test]
    fn test_category_schema() {
        let node = node_with_guestbook();
        assert_rejected(&node, remove("category"), "missing required property: category");
        assert_rejected(
            &node,
            set("category", json!("0")),
            "expected type integer but found type string",
        );
        assert_rejected(&node, set("category", json!(-1)), "value -1 is less than minimum 0");
        assert_rejected(&node, set("category", json!(9)), "value 9 is greater than maximum 8");
        assert_accepted(&node, set("category", json!(8)));
    }

    #[test]
    fn test_description_schema() {
        let node = node_with_guestbook();
        assert_rejected(
            &node,
            set("description", json!(0)),
            "expected type string but found type integer",
        );
        assert_rejected(
            &node,
            set("description", json!("x".repeat(161))),
            "string is too long (161 chars), maximum 160",
        );
        assert_accepted(&node, set("description", json!("")));
    }

    #[test]
    fn test_description_is_optional() {
        let node = node_with_guestbook();
        assert_accepted(&node, remove("description"));
    }

    #[test]
    fn test_icon_schema_and_rules() {
        let node = node_with_guestbook();
        assert_rejected(
            &node,
            set("icon", json!(0)),
            "expected type string but found type integer",
        );
        assert_rejected(&node, set("icon", json!("invalidUrl")), "invalid application icon link");

        let mut icon = application(1)["icon"].as_str().unwrap().to_string();
        icon.push_str(".invalid");
        assert_rejected(&node, set("icon", json!(icon)), "invalid application icon file type");

        assert_accepted(&node, remove("icon"));
    }

    #[test]
    fn test_link_schema_and_rules() {
        let node = node_with_guestbook();
        assert_rejected(&node, set("link", json!("")), "invalid application link");
        assert_rejected(
            &node,
            set("link", json!(0)),
            "expected type string but found type integer",
        );
        assert_rejected(
            &node,
            set("link", json!("https://example.com/apps/1/master.exe")),
            "invalid application file type",
        );
    }

    #[test]
    fn test_name_schema() {
        let node = node_with_guestbook();
        assert_rejected(&node, remove("name"), "missing required property: name");
        assert_rejected(
            &node,
            set("name", json!(0)),
            "expected type string but found type integer",
        );
        assert_rejected(
            &node,
            set("name", json!("")),
            "string is too short (0 chars), minimum 1",
        );
        assert_rejected(
            &node,
            set("name", json!("n".repeat(33))),
            "string is too long (33 chars), maximum 32",
        );
    }

    #[test]
    fn test_tags_schema_and_rules() {
        let node = node_with_guestbook();
        assert_rejected(
            &node,
            set("tags", json!(0)),
            "expected type string but found type integer",
        );
        assert_rejected(
            &node,
            set("tags", json!("t".repeat(161))),
            "string is too long (161 chars), maximum 160",
        );
        assert_rejected(
            &node,
            set("tags", json!("games,social,games")),
            "encountered duplicate tag: games in application",
        );
    }

    #[test]
    fn test_tags_optional_empty_and_several() {
        for edit in [
            Box::new(remove("tags")) as Box<dyn FnOnce(&mut Value)>,
            Box::new(set("tags", json!(""))),
            Box::new(set("tags", json!("games, social ,finance,education"))),
        ] {
            let node = node_with_guestbook();
            assert_accepted(&node, edit);
        }
    }

    #[test]
    fn test_type_schema_and_rules() {
        let node = node_with_guestbook();
        assert_rejected(&node, remove("type"), "missing required property: type");
        assert_rejected(&node, set("type", json!(-1)), "value -1 is less than minimum 0");
        assert_rejected(&node, set("type", json!(2)), "value 2 is greater than maximum 1");

        let result = submit_variant(&node, set("type", json!(1)));
        assert_eq!(
            result,
            SubmitResult::Rejected {
                kind: ErrorKind::Rule,
                message: "invalid application type".into()
            }
        );
    }

    #[test]
    fn test_identical_invalid_payload_rejected_identically() {
        let node = node_with_guestbook();
        let first = submit_variant(&node, set("category", json!(9)));
        let second = submit_variant(&node, set("category", json!(9)));
        assert_eq!(first, second);
    }

    // =========================================================================
    // TRANSACTION PROCESSING
    // =========================================================================

    #[test]
    fn test_registered_name_rejected() {
        let node = node_with_guestbook();
        let mut asset = application(2);
        asset["name"] = guestbook()["name"].clone();

        let message = rejected(node.submit_transaction(transaction(FUNDED, asset, 2)));
        assert_eq!(message, "application name already exists: Lisk Guestbook");
    }

    #[test]
    fn test_registered_link_rejected() {
        let node = node_with_guestbook();
        let mut asset = application(2);
        asset["link"] = guestbook()["link"].clone();

        let message = rejected(node.submit_transaction(transaction(FUNDED, asset, 2)));
        assert_eq!(
            message,
            "application link already exists: https://github.com/MaxKK/guestbookDapp/archive/master.zip"
        );
    }

    #[test]
    fn test_no_funds_rejected_naming_balance() {
        let (node, _) = node();
        let message = rejected(node.submit_transaction(transaction(NO_FUNDS, application(3), 0)));
        assert_eq!(
            message,
            format!("account does not have enough funds: {NO_FUNDS} balance: 0")
        );
    }

    #[test]
    fn test_minimal_funds_accepted_and_charged() {
        let (node, accounts) = node();
        let id = accepted(node.submit_transaction(transaction(MINIMAL_FUNDS, application(4), 0)));

        node.assemble_block(25);
        assert_eq!(node.transaction_status(&id), TransactionStatus::Confirmed);
        assert_eq!(accounts.balance_of(&Address::from(MINIMAL_FUNDS)), 0);
    }

    #[test]
    fn test_wrong_fee_rejected() {
        let (node, _) = node();
        let mut raw = transaction(FUNDED, application(5), 0);
        raw.fee = FEE - 1;
        let result = node.submit_transaction(raw);
        assert!(matches!(
            result,
            SubmitResult::Rejected {
                kind: ErrorKind::Rule,
                ..
            }
        ));
    }

    // =========================================================================
    // CONFIRMATION
    // =========================================================================

    #[test]
    fn test_good_confirmed_bad_unknown() {
        let node = node_with_guestbook();

        let good: Vec<_> = (10..13)
            .map(|seed| accepted(node.submit_transaction(transaction(FUNDED, application(seed), seed))))
            .collect();
        let bad = node.submit_transaction(transaction(NO_FUNDS, application(20), 20));
        let SubmitResult::Rejected { .. } = bad else {
            panic!("unfunded registration must be rejected");
        };

        let summary = node.assemble_block(25);
        assert_eq!(summary.committed, good);
        assert!(summary.discarded.is_empty());

        for (seed, id) in (10..13).zip(&good) {
            assert_eq!(node.transaction_status(id), TransactionStatus::Confirmed);
            let record = node.confirmed_dapp(&format!("app-{seed}")).unwrap();
            assert_eq!(record.id, *id);
            assert_eq!(record.asset.tags(), vec!["games", "social"]);
        }
        assert!(node.confirmed_dapp("app-20").is_none());
        assert_eq!(node.registry_snapshot().records.len(), 4);
    }

    #[test]
    fn test_register_reject_then_collide() {
        let (node, _) = node();
        let abc = json!({"name": "abc", "category": 3, "type": 0, "link": "http://x.com/a.zip"});
        let id = accepted(node.submit_transaction(transaction(FUNDED, abc.clone(), 0)));

        let mut bad_category = abc.clone();
        bad_category["category"] = json!(9);
        assert_eq!(
            rejected(node.submit_transaction(transaction(FUNDED, bad_category, 1))),
            "category: value 9 is greater than maximum 8"
        );

        let mut exe = abc.clone();
        exe["link"] = json!("http://x.com/a.exe");
        assert_eq!(
            rejected(node.submit_transaction(transaction(FUNDED, exe, 2))),
            "invalid application file type"
        );

        assert_eq!(node.assemble_block(25).committed, vec![id]);

        let mut again = abc;
        again["link"] = json!("http://x.com/b.zip");
        assert_eq!(
            rejected(node.submit_transaction(transaction(FUNDED, again, 3))),
            "application name already exists: abc"
        );
    }
}
