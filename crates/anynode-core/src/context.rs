//! Opaque decoding context threaded through every typed construction.
//!
//! The converters only ever pass a `&dyn Context` along. Implementations of
//! [`NodeInitializable`](crate::traits::NodeInitializable) that care about
//! the context recover their concrete type with `downcast_ref`.

use std::any::Any;

/// Caller-supplied token that influences typed construction.
pub trait Context: Any + Send + Sync {
    /// Returns self as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Context {
    /// Recover the concrete context type, if it matches.
    pub fn downcast_ref<C: Context>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }

    pub fn is<C: Context>(&self) -> bool {
        self.as_any().is::<C>()
    }
}

/// The neutral context used when a caller does not supply one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContext;

impl Context for EmptyContext {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shared instance of [`EmptyContext`].
pub static EMPTY_CONTEXT: EmptyContext = EmptyContext;
