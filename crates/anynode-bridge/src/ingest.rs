//! Dynamic value → Node.

use std::any::Any;

use anynode_core::{AnyNodeError, AnyNodeResult, Node, Object};

use crate::dynamic::{classify, DynamicKind};

/// Convert a dynamic value to a node. Never fails.
///
/// Unrecognized runtime shapes become `Node::Null`. This is silent data
/// loss on type mismatch: callers that need to detect it must inspect the
/// input themselves. Recursion depth equals input nesting depth with no
/// limit; use [`ingest_bounded`] for untrusted input.
pub fn ingest(value: &dyn Any) -> Node {
    let _span = crate::ingest_span!().entered();
    ingest_value(value)
}

fn ingest_value(value: &dyn Any) -> Node {
    match classify(value) {
        DynamicKind::Bool(b) => Node::Bool(b),
        DynamicKind::Number(n) => Node::Number(n),
        DynamicKind::Text(s) => Node::String(s.to_owned()),
        DynamicKind::Map(map) => Node::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), ingest_value(&**child)))
                .collect(),
        ),
        DynamicKind::List(items) => {
            Node::Array(items.iter().map(|child| ingest_value(&**child)).collect())
        }
        DynamicKind::Null => Node::Null,
        DynamicKind::Unrecognized => {
            tracing::debug!(
                type_id = ?value.type_id(),
                "unrecognized dynamic value, ingesting as null"
            );
            Node::Null
        }
    }
}

/// [`ingest`] with a container nesting limit.
///
/// A scalar at the root has depth 0 and every map or list level adds one.
/// Input nested deeper than `max_depth` fails with
/// [`AnyNodeError::DepthExceeded`] instead of recursing further.
pub fn ingest_bounded(value: &dyn Any, max_depth: usize) -> AnyNodeResult<Node> {
    let _span = crate::ingest_span!(max_depth).entered();
    ingest_nested(value, 0, max_depth)
}

/// Bounded ingest of a value that already sits `depth` containers deep.
pub(crate) fn ingest_nested(value: &dyn Any, depth: usize, max_depth: usize) -> AnyNodeResult<Node> {
    match classify(value) {
        DynamicKind::Map(map) => {
            let depth = enter(depth, max_depth)?;
            map.iter()
                .map(|(key, child)| {
                    ingest_nested(&**child, depth, max_depth).map(|node| (key.clone(), node))
                })
                .collect::<AnyNodeResult<Object>>()
                .map(Node::Object)
        }
        DynamicKind::List(items) => {
            let depth = enter(depth, max_depth)?;
            items
                .iter()
                .map(|child| ingest_nested(&**child, depth, max_depth))
                .collect::<AnyNodeResult<Vec<Node>>>()
                .map(Node::Array)
        }
        // Scalars, null and unrecognized shapes never recurse.
        _ => Ok(ingest_value(value)),
    }
}

fn enter(depth: usize, max_depth: usize) -> AnyNodeResult<usize> {
    let depth = depth + 1;
    if depth > max_depth {
        tracing::warn!(max_depth, "dynamic value nested too deeply, rejecting");
        return Err(AnyNodeError::DepthExceeded { max_depth });
    }
    Ok(depth)
}
