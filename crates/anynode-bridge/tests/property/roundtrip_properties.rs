use anynode_bridge::dynamic::{self, dynamic_eq, Dynamic};
use anynode_bridge::{egress, egress_owned, ingest, ingest_bounded, vec_from_dynamic_list};
use anynode_core::{Node, EMPTY_CONTEXT};
use proptest::prelude::*;

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        (-1e12f64..1e12f64).prop_map(Node::Number),
        ".{0,10}".prop_map(Node::String),
    ];
    leaf.prop_recursive(5, 96, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::Array),
            prop::collection::hash_map("[a-z]{1,5}", inner, 0..6).prop_map(Node::Object),
        ]
    })
}

fn depth(node: &Node) -> usize {
    match node {
        Node::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        Node::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}

proptest! {
    #[test]
    fn ingest_inverts_egress(node in arb_node()) {
        prop_assert_eq!(ingest(&*egress(&node)), node);
    }

    #[test]
    fn owned_egress_matches_borrowed(node in arb_node()) {
        prop_assert!(dynamic_eq(&*egress(&node), &*egress_owned(node.clone())));
    }

    #[test]
    fn dynamic_roundtrip_is_host_equal(node in arb_node()) {
        let value = egress(&node);
        let again = egress(&ingest(&*value));
        prop_assert!(dynamic_eq(&*value, &*again));
    }

    #[test]
    fn bounded_ingest_accepts_exactly_up_to_depth(node in arb_node()) {
        let value = egress(&node);
        let d = depth(&node);
        prop_assert_eq!(ingest_bounded(&*value, d).unwrap(), node);
        if d > 0 {
            prop_assert!(ingest_bounded(&*value, d - 1).is_err());
        }
    }

    #[test]
    fn integer_lists_construct_in_order(xs in prop::collection::vec(any::<i32>(), 0..40)) {
        let list: Vec<Dynamic> = xs.iter().copied().map(dynamic::of).collect();
        let out: Vec<i32> = vec_from_dynamic_list(&list, &EMPTY_CONTEXT).unwrap();
        prop_assert_eq!(out, xs);
    }
}
