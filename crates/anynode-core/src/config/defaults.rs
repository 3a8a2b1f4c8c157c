// Single source of truth for all default values.

// --- Ingest ---
pub const DEFAULT_MAX_DEPTH: usize = 512;

// --- Collections ---
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1_024;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
