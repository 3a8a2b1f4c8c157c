mod initializable;
mod representable;

pub use initializable::NodeInitializable;
pub use representable::NodeRepresentable;

/// A type that can be both built from and mapped to a [`Node`](crate::Node).
pub trait NodeConvertible: NodeInitializable + NodeRepresentable {}

impl<T: NodeInitializable + NodeRepresentable> NodeConvertible for T {}
