//! Capability implementations for std scalars and containers.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::context::Context;
use crate::errors::{ConversionError, MappingError};
use crate::node::Node;
use crate::traits::{NodeInitializable, NodeRepresentable};

impl NodeInitializable for Node {
    fn from_node(node: Node, _ctx: &dyn Context) -> Result<Self, ConversionError> {
        Ok(node)
    }
}

impl NodeRepresentable for Node {
    fn to_node(&self) -> Result<Node, MappingError> {
        Ok(self.clone())
    }
}

impl NodeInitializable for bool {
    fn from_node(node: Node, _ctx: &dyn Context) -> Result<Self, ConversionError> {
        node.as_bool()
            .ok_or_else(|| ConversionError::unable_to_convert(&node, "bool"))
    }
}

impl NodeRepresentable for bool {
    fn to_node(&self) -> Result<Node, MappingError> {
        Ok(Node::Bool(*self))
    }
}

impl NodeInitializable for String {
    fn from_node(node: Node, _ctx: &dyn Context) -> Result<Self, ConversionError> {
        match node {
            Node::String(s) => Ok(s),
            other => Err(ConversionError::unable_to_convert(&other, "String")),
        }
    }
}

impl NodeRepresentable for String {
    fn to_node(&self) -> Result<Node, MappingError> {
        Ok(Node::String(self.clone()))
    }
}

impl NodeRepresentable for str {
    fn to_node(&self) -> Result<Node, MappingError> {
        Ok(Node::String(self.to_string()))
    }
}

impl NodeInitializable for f64 {
    fn from_node(node: Node, _ctx: &dyn Context) -> Result<Self, ConversionError> {
        node.as_f64()
            .ok_or_else(|| ConversionError::unable_to_convert(&node, "f64"))
    }
}

impl NodeRepresentable for f64 {
    fn to_node(&self) -> Result<Node, MappingError> {
        Ok(Node::Number(*self))
    }
}

impl NodeInitializable for f32 {
    fn from_node(node: Node, _ctx: &dyn Context) -> Result<Self, ConversionError> {
        let value = node
            .as_f64()
            .ok_or_else(|| ConversionError::unable_to_convert(&node, "f32"))?;
        if value.is_finite() && value.abs() > f32::MAX as f64 {
            return Err(ConversionError::OutOfRange {
                value,
                target: "f32".into(),
            });
        }
        Ok(value as f32)
    }
}

impl NodeRepresentable for f32 {
    fn to_node(&self) -> Result<Node, MappingError> {
        Ok(Node::Number(f64::from(*self)))
    }
}

// Integers accept only finite, integral numbers within the target range.
// The range check goes through i128, which holds every integral f64 up to
// 2^127 exactly, so values at the edge of a 64-bit range are not saturated.
macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl NodeInitializable for $ty {
            fn from_node(node: Node, _ctx: &dyn Context) -> Result<Self, ConversionError> {
                let value = node
                    .as_f64()
                    .ok_or_else(|| ConversionError::unable_to_convert(&node, stringify!($ty)))?;
                let out_of_range = || ConversionError::OutOfRange {
                    value,
                    target: stringify!($ty).into(),
                };
                if !value.is_finite() || value.fract() != 0.0 {
                    return Err(out_of_range());
                }
                <$ty>::try_from(value as i128).map_err(|_| out_of_range())
            }
        }

        impl NodeRepresentable for $ty {
            fn to_node(&self) -> Result<Node, MappingError> {
                Ok(Node::Number(*self as f64))
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: NodeInitializable> NodeInitializable for Option<T> {
    fn from_node(node: Node, ctx: &dyn Context) -> Result<Self, ConversionError> {
        match node {
            Node::Null => Ok(None),
            other => T::from_node(other, ctx).map(Some),
        }
    }
}

impl<T: NodeRepresentable> NodeRepresentable for Option<T> {
    fn to_node(&self) -> Result<Node, MappingError> {
        match self {
            Some(value) => value.to_node(),
            None => Ok(Node::Null),
        }
    }
}

/// Arrays yield their items; any other node is treated as a one-element array.
fn promote_to_items(node: Node) -> Vec<Node> {
    match node {
        Node::Array(items) => items,
        other => vec![other],
    }
}

impl<T: NodeInitializable> NodeInitializable for Vec<T> {
    fn from_node(node: Node, ctx: &dyn Context) -> Result<Self, ConversionError> {
        promote_to_items(node)
            .into_iter()
            .map(|item| T::from_node(item, ctx))
            .collect()
    }
}

impl<T: NodeRepresentable> NodeRepresentable for Vec<T> {
    fn to_node(&self) -> Result<Node, MappingError> {
        self.as_slice().to_node()
    }
}

impl<T: NodeRepresentable> NodeRepresentable for [T] {
    fn to_node(&self) -> Result<Node, MappingError> {
        self.iter()
            .map(NodeRepresentable::to_node)
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Array)
    }
}

impl<T: NodeInitializable + Eq + Hash> NodeInitializable for HashSet<T> {
    fn from_node(node: Node, ctx: &dyn Context) -> Result<Self, ConversionError> {
        promote_to_items(node)
            .into_iter()
            .map(|item| T::from_node(item, ctx))
            .collect()
    }
}

impl<T: NodeRepresentable> NodeRepresentable for HashSet<T> {
    fn to_node(&self) -> Result<Node, MappingError> {
        self.iter()
            .map(NodeRepresentable::to_node)
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Array)
    }
}

impl<T: NodeInitializable> NodeInitializable for HashMap<String, T> {
    fn from_node(node: Node, ctx: &dyn Context) -> Result<Self, ConversionError> {
        match node {
            Node::Object(map) => map
                .into_iter()
                .map(|(key, value)| T::from_node(value, ctx).map(|v| (key, v)))
                .collect(),
            other => Err(ConversionError::unable_to_convert(&other, "HashMap")),
        }
    }
}

impl<T: NodeRepresentable> NodeRepresentable for HashMap<String, T> {
    fn to_node(&self) -> Result<Node, MappingError> {
        self.iter()
            .map(|(key, value)| value.to_node().map(|v| (key.clone(), v)))
            .collect::<Result<_, _>>()
            .map(Node::Object)
    }
}

impl<T: NodeRepresentable + ?Sized> NodeRepresentable for &T {
    fn to_node(&self) -> Result<Node, MappingError> {
        (**self).to_node()
    }
}

impl<T: NodeRepresentable + ?Sized> NodeRepresentable for Box<T> {
    fn to_node(&self) -> Result<Node, MappingError> {
        (**self).to_node()
    }
}
