//! Span definitions per operation: ingest, egress, construct, collection.

/// Create an ingest span.
#[macro_export]
macro_rules! ingest_span {
    () => {
        tracing::debug_span!("anynode.ingest")
    };
    ($max_depth:expr) => {
        tracing::debug_span!("anynode.ingest", max_depth = $max_depth)
    };
}

/// Create an egress span.
#[macro_export]
macro_rules! egress_span {
    ($kind:expr) => {
        tracing::debug_span!("anynode.egress", kind = %$kind)
    };
}

/// Create a typed construction span.
#[macro_export]
macro_rules! construct_span {
    ($target:expr) => {
        tracing::trace_span!("anynode.construct", target = %$target)
    };
}

/// Create a collection span.
#[macro_export]
macro_rules! collection_span {
    ($target:expr, $len:expr, $parallel:expr) => {
        tracing::debug_span!(
            "anynode.collection",
            target = %$target,
            len = $len,
            parallel = $parallel
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGEST: &str = "anynode.ingest";
    pub const EGRESS: &str = "anynode.egress";
    pub const CONSTRUCT: &str = "anynode.construct";
    pub const COLLECTION: &str = "anynode.collection";
}
