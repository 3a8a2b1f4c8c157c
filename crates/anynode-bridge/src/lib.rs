//! # anynode-bridge
//!
//! Conversion between dynamic runtime values (`Box<dyn Any>` graphs built
//! from host-native scalars, lists, and string-keyed maps) and the uniform
//! [`Node`](anynode_core::Node).
//!
//! ## Architecture
//!
//! - `dynamic.rs` — dynamic value aliases, the null marker, shape classification
//! - `ingest.rs` — dynamic value → Node (total, degrades to null)
//! - `egress.rs` — Node → dynamic value (total)
//! - `construct.rs` — dynamic value → typed value through a Node
//! - `collection.rs` — Vec/HashSet construction, fail-fast
//! - `facade.rs` — typed value → dynamic value, map view, list view
//! - `bridge.rs` — config-driven handle: depth guard, parallel collections
//! - `tracing_setup/` — subscriber init and span macros

pub mod bridge;
pub mod collection;
pub mod construct;
pub mod dynamic;
pub mod egress;
pub mod facade;
pub mod ingest;
pub mod tracing_setup;

pub use bridge::Bridge;
pub use collection::{
    par_set_from_dynamic_list, par_vec_from_dynamic_list, set_from_dynamic,
    set_from_dynamic_list, vec_from_dynamic, vec_from_dynamic_list,
};
pub use construct::{construct, FromDynamic};
pub use dynamic::{Dynamic, DynamicKind, DynamicList, DynamicMap, NullMarker};
pub use egress::{egress, egress_owned};
pub use facade::ToDynamic;
pub use ingest::{ingest, ingest_bounded};
