use anynode_core::serde_bridge::{json_to_node, node_to_json};
use anynode_core::{Node, NodeInitializable, NodeRepresentable};
use proptest::prelude::*;

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        (-1e9f64..1e9f64).prop_map(Node::Number),
        "[a-z]{0,8}".prop_map(Node::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::Array),
            prop::collection::hash_map("[a-z]{1,4}", inner, 0..6).prop_map(Node::Object),
        ]
    })
}

proptest! {
    #[test]
    fn json_roundtrip_is_identity(node in arb_node()) {
        prop_assert_eq!(json_to_node(&node_to_json(&node)), node);
    }

    #[test]
    fn node_count_is_at_least_one(node in arb_node()) {
        prop_assert!(node.node_count() >= 1);
    }

    #[test]
    fn i64_roundtrips_within_safe_range(n in -(1i64 << 53)..(1i64 << 53)) {
        let node = n.to_node().unwrap();
        prop_assert_eq!(i64::from_node_default(node).unwrap(), n);
    }

    #[test]
    fn string_vec_roundtrips(xs in prop::collection::vec(".{0,12}", 0..8)) {
        let node = xs.to_node().unwrap();
        prop_assert_eq!(Vec::<String>::from_node_default(node).unwrap(), xs);
    }
}
