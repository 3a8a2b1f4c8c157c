use anynode_core::errors::*;
use anynode_core::{Node, NodeKind};

#[test]
fn unable_to_convert_carries_expected_and_found() {
    let err = ConversionError::unable_to_convert(&Node::from("x"), "bool");
    assert_eq!(
        err,
        ConversionError::UnableToConvert {
            expected: "bool".into(),
            found: NodeKind::String,
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("bool"));
    assert!(msg.contains("string"));
}

#[test]
fn out_of_range_carries_value_and_target() {
    let err = ConversionError::OutOfRange {
        value: 300.0,
        target: "u8".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("300"));
    assert!(msg.contains("u8"));
}

#[test]
fn missing_key_carries_key() {
    let err = ConversionError::MissingKey { key: "id".into() };
    assert!(err.to_string().contains("id"));
}

#[test]
fn mapping_error_carries_type_name() {
    let err = MappingError::Unrepresentable {
        type_name: "Widget".into(),
        reason: "no fields".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("Widget"));
    assert!(msg.contains("no fields"));
}

#[test]
fn depth_exceeded_carries_limit() {
    let err = AnyNodeError::DepthExceeded { max_depth: 64 };
    assert!(err.to_string().contains("64"));
}

// --- From impls ---

#[test]
fn conversion_error_converts_to_anynode_error() {
    let err: AnyNodeError = ConversionError::custom("bad").into();
    assert!(matches!(err, AnyNodeError::ConversionError(_)));
}

#[test]
fn mapping_error_converts_to_anynode_error() {
    let err: AnyNodeError = MappingError::Serialization {
        reason: "nope".into(),
    }
    .into();
    assert!(matches!(err, AnyNodeError::MappingError(_)));
}
