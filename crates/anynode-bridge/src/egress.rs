//! Node → dynamic value.
//!
//! The exact inverse of ingest on the node side: `Object` becomes a
//! [`DynamicMap`], `Array` a [`DynamicList`], scalars their native Rust type
//! (`bool`, `f64`, `String`) and `Null` the explicit [`NullMarker`].

use anynode_core::Node;

use crate::dynamic::{Dynamic, DynamicList, DynamicMap, NullMarker};

/// Convert a node to a dynamic value, cloning its contents. Never fails.
pub fn egress(node: &Node) -> Dynamic {
    let _span = crate::egress_span!(node.kind()).entered();
    egress_ref(node)
}

/// Convert a node to a dynamic value, moving its contents. Never fails.
pub fn egress_owned(node: Node) -> Dynamic {
    let _span = crate::egress_span!(node.kind()).entered();
    egress_value(node)
}

fn egress_ref(node: &Node) -> Dynamic {
    match node {
        Node::Null => Box::new(NullMarker),
        Node::Bool(b) => Box::new(*b),
        Node::Number(n) => Box::new(*n),
        Node::String(s) => Box::new(s.clone()),
        Node::Array(items) => Box::new(items.iter().map(egress_ref).collect::<DynamicList>()),
        Node::Object(map) => Box::new(
            map.iter()
                .map(|(key, child)| (key.clone(), egress_ref(child)))
                .collect::<DynamicMap>(),
        ),
    }
}

fn egress_value(node: Node) -> Dynamic {
    match node {
        Node::Null => Box::new(NullMarker),
        Node::Bool(b) => Box::new(b),
        Node::Number(n) => Box::new(n),
        Node::String(s) => Box::new(s),
        Node::Array(items) => Box::new(
            items
                .into_iter()
                .map(egress_value)
                .collect::<DynamicList>(),
        ),
        Node::Object(map) => Box::new(
            map.into_iter()
                .map(|(key, child)| (key, egress_value(child)))
                .collect::<DynamicMap>(),
        ),
    }
}
