use crate::context::{Context, EMPTY_CONTEXT};
use crate::errors::ConversionError;
use crate::node::Node;

/// Typed construction from a node.
pub trait NodeInitializable: Sized {
    /// Build `Self` from `node`. The context is passed through untouched
    /// from the caller.
    fn from_node(node: Node, ctx: &dyn Context) -> Result<Self, ConversionError>;

    /// [`from_node`](Self::from_node) with the empty context.
    fn from_node_default(node: Node) -> Result<Self, ConversionError> {
        Self::from_node(node, &EMPTY_CONTEXT)
    }
}
