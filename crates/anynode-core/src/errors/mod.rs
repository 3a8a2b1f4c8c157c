mod anynode_error;
mod conversion_error;
mod mapping_error;

pub use anynode_error::{AnyNodeError, AnyNodeResult};
pub use conversion_error::ConversionError;
pub use mapping_error::MappingError;
