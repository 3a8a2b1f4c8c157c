//! # anynode-core
//!
//! Foundation crate for anynode.
//! Defines the uniform `Node` value, the opaque decoding `Context`, the
//! typed construction/mapping capability traits, errors, and config.
//! The dynamic-value converters in `anynode-bridge` build on this.

pub mod config;
pub mod context;
pub mod errors;
pub mod node;
pub mod primitives;
pub mod serde_bridge;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BridgeConfig;
pub use context::{Context, EmptyContext, EMPTY_CONTEXT};
pub use errors::{AnyNodeError, AnyNodeResult, ConversionError, MappingError};
pub use node::{Node, NodeKind, Object};
pub use traits::{NodeConvertible, NodeInitializable, NodeRepresentable};
