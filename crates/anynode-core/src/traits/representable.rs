use crate::errors::MappingError;
use crate::node::Node;

/// Mapping of a typed value to a node.
pub trait NodeRepresentable {
    fn to_node(&self) -> Result<Node, MappingError>;
}
