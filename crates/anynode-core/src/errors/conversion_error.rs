use crate::node::{Node, NodeKind};

/// Typed construction failed: the node's shape or content cannot produce
/// the requested type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("unable to convert {found} node to {expected}")]
    UnableToConvert { expected: String, found: NodeKind },

    #[error("number {value} is out of range for {target}")]
    OutOfRange { value: f64, target: String },

    #[error("missing key: {key}")]
    MissingKey { key: String },

    #[error("conversion failed: {reason}")]
    Custom { reason: String },
}

impl ConversionError {
    pub fn unable_to_convert(node: &Node, expected: impl Into<String>) -> Self {
        Self::UnableToConvert {
            expected: expected.into(),
            found: node.kind(),
        }
    }

    pub fn custom(reason: impl Into<String>) -> Self {
        Self::Custom {
            reason: reason.into(),
        }
    }
}
