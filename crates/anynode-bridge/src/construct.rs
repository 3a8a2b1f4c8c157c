//! Dynamic value → typed value, through a node.

use std::any::Any;

use anynode_core::{Context, ConversionError, NodeInitializable, EMPTY_CONTEXT};

use crate::ingest::ingest;

/// Ingest `value` and hand the node to `T`'s typed construction.
///
/// Whatever `T::from_node` returns is returned unchanged.
pub fn construct<T: NodeInitializable>(
    value: &dyn Any,
    ctx: &dyn Context,
) -> Result<T, ConversionError> {
    let _span = crate::construct_span!(std::any::type_name::<T>()).entered();
    T::from_node(ingest(value), ctx)
}

/// Construction from a dynamic value, available on every
/// [`NodeInitializable`] type.
pub trait FromDynamic: Sized {
    fn from_dynamic(value: &dyn Any, ctx: &dyn Context) -> Result<Self, ConversionError>;

    /// [`from_dynamic`](Self::from_dynamic) with the empty context.
    fn from_dynamic_default(value: &dyn Any) -> Result<Self, ConversionError> {
        Self::from_dynamic(value, &EMPTY_CONTEXT)
    }
}

impl<T: NodeInitializable> FromDynamic for T {
    fn from_dynamic(value: &dyn Any, ctx: &dyn Context) -> Result<Self, ConversionError> {
        construct(value, ctx)
    }
}
