/// Mapping a typed value to a node failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("{type_name} cannot be represented as a node: {reason}")]
    Unrepresentable { type_name: String, reason: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },
}
