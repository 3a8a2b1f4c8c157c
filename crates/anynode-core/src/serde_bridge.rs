//! Node ↔ serde_json::Value conversions.
//!
//! Any type that derives Serialize/Deserialize can take part in the
//! capability protocol through serde_json, without a hand-written
//! `NodeInitializable`/`NodeRepresentable` impl.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{ConversionError, MappingError};
use crate::node::Node;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Convert a node to a JSON value.
///
/// Integral numbers within the f64 safe-integer range become JSON integers
/// so that integer fields deserialize cleanly. Non-finite numbers become
/// `null`, which JSON cannot otherwise represent.
pub fn node_to_json(node: &Node) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Bool(*b),
        Node::Number(n) => number_to_json(*n),
        Node::String(s) => Value::String(s.clone()),
        Node::Array(items) => Value::Array(items.iter().map(node_to_json).collect()),
        Node::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), node_to_json(v)))
                .collect(),
        ),
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

/// Convert a JSON value to a node. All JSON numbers become `Number(f64)`.
pub fn json_to_node(value: &Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(Node::Null, Node::Number),
        Value::String(s) => Node::String(s.clone()),
        Value::Array(items) => Node::Array(items.iter().map(json_to_node).collect()),
        Value::Object(map) => Node::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_node(v)))
                .collect(),
        ),
    }
}

/// Deserialize any `DeserializeOwned` type from a node.
pub fn from_node_serde<T: DeserializeOwned>(node: &Node) -> Result<T, ConversionError> {
    serde_json::from_value(node_to_json(node)).map_err(|e| ConversionError::Custom {
        reason: format!("failed to deserialize {}: {e}", std::any::type_name::<T>()),
    })
}

/// Serialize any `Serialize` type into a node.
pub fn to_node_serde<T: Serialize + ?Sized>(value: &T) -> Result<Node, MappingError> {
    serde_json::to_value(value)
        .map(|v| json_to_node(&v))
        .map_err(|e| MappingError::Serialization {
            reason: format!("failed to serialize {}: {e}", std::any::type_name::<T>()),
        })
}
