use super::{ConversionError, MappingError};

/// Top-level error for the configured conversion paths.
#[derive(Debug, thiserror::Error)]
pub enum AnyNodeError {
    #[error("conversion error: {0}")]
    ConversionError(#[from] ConversionError),

    #[error("mapping error: {0}")]
    MappingError(#[from] MappingError),

    #[error("nesting depth exceeded: max {max_depth}")]
    DepthExceeded { max_depth: usize },

    #[error("config error: {0}")]
    ConfigError(String),
}

pub type AnyNodeResult<T> = Result<T, AnyNodeError>;
