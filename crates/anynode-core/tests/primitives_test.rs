use std::collections::{HashMap, HashSet};

use anynode_core::{ConversionError, Node, NodeInitializable, NodeKind, NodeRepresentable};

#[test]
fn bool_requires_bool_node() {
    assert!(bool::from_node_default(Node::Bool(true)).unwrap());
    // Numbers are never coerced to booleans.
    let err = bool::from_node_default(Node::Number(1.0)).unwrap_err();
    assert_eq!(err, ConversionError::unable_to_convert(&Node::Number(1.0), "bool"));
}

#[test]
fn string_requires_string_node() {
    assert_eq!(String::from_node_default(Node::from("x")).unwrap(), "x");
    assert!(matches!(
        String::from_node_default(Node::Null),
        Err(ConversionError::UnableToConvert {
            found: NodeKind::Null,
            ..
        })
    ));
}

#[test]
fn integers_accept_integral_numbers_in_range() {
    assert_eq!(u8::from_node_default(Node::Number(255.0)).unwrap(), 255);
    assert_eq!(i32::from_node_default(Node::Number(-7.0)).unwrap(), -7);
    assert_eq!(i32::from_node_default(Node::Number(i32::MAX as f64)).unwrap(), i32::MAX);
}

#[test]
fn integers_reject_out_of_range_numbers() {
    assert_eq!(
        u8::from_node_default(Node::Number(256.0)).unwrap_err(),
        ConversionError::OutOfRange {
            value: 256.0,
            target: "u8".into(),
        }
    );
    assert!(matches!(
        u32::from_node_default(Node::Number(-1.0)),
        Err(ConversionError::OutOfRange { .. })
    ));
}

#[test]
fn integers_reject_values_just_past_64_bit_bounds() {
    // 2^63 and 2^64 are exact f64 values one past i64::MAX and u64::MAX.
    assert_eq!(
        i64::from_node_default(Node::Number(9_223_372_036_854_775_808.0)).unwrap_err(),
        ConversionError::OutOfRange {
            value: 9_223_372_036_854_775_808.0,
            target: "i64".into(),
        }
    );
    assert!(matches!(
        u64::from_node_default(Node::Number(18_446_744_073_709_551_616.0)),
        Err(ConversionError::OutOfRange { .. })
    ));
    // Next representable f64 below -2^63.
    assert!(matches!(
        i64::from_node_default(Node::Number(-9_223_372_036_854_777_856.0)),
        Err(ConversionError::OutOfRange { .. })
    ));
    assert_eq!(i64::from_node_default(Node::Number(i64::MIN as f64)).unwrap(), i64::MIN);
    assert!(matches!(
        usize::from_node_default(Node::Number(-1.0)),
        Err(ConversionError::OutOfRange { .. })
    ));
}

#[test]
fn integers_reject_fractions_and_non_finite() {
    assert!(matches!(
        i64::from_node_default(Node::Number(1.5)),
        Err(ConversionError::OutOfRange { .. })
    ));
    assert!(matches!(
        i64::from_node_default(Node::Number(f64::NAN)),
        Err(ConversionError::OutOfRange { .. })
    ));
    assert!(matches!(
        usize::from_node_default(Node::Number(f64::INFINITY)),
        Err(ConversionError::OutOfRange { .. })
    ));
}

#[test]
fn f32_rejects_values_beyond_its_range() {
    assert_eq!(f32::from_node_default(Node::Number(0.5)).unwrap(), 0.5);
    assert!(matches!(
        f32::from_node_default(Node::Number(1e300)),
        Err(ConversionError::OutOfRange { .. })
    ));
}

#[test]
fn option_maps_null_to_none() {
    assert_eq!(Option::<String>::from_node_default(Node::Null).unwrap(), None);
    assert_eq!(
        Option::<String>::from_node_default(Node::from("x")).unwrap(),
        Some("x".to_string())
    );
    assert_eq!(None::<bool>.to_node().unwrap(), Node::Null);
}

#[test]
fn vec_promotes_bare_values() {
    assert_eq!(
        Vec::<String>::from_node_default(Node::from("x")).unwrap(),
        vec!["x".to_string()]
    );
    assert_eq!(
        Vec::<f64>::from_node_default(Node::Array(vec![Node::Number(1.0), Node::Number(2.0)]))
            .unwrap(),
        vec![1.0, 2.0]
    );
}

#[test]
fn vec_fails_on_first_bad_element() {
    let node = Node::Array(vec![Node::Bool(true), Node::from("no"), Node::Number(3.0)]);
    let err = Vec::<bool>::from_node_default(node).unwrap_err();
    assert_eq!(err, ConversionError::unable_to_convert(&Node::from("no"), "bool"));
}

#[test]
fn hash_set_collapses_duplicates() {
    let node = Node::Array(vec![Node::from("a"), Node::from("b"), Node::from("a")]);
    let set = HashSet::<String>::from_node_default(node).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains("a"));
}

#[test]
fn hash_map_requires_object() {
    let node: Node = vec![("n".to_string(), Node::Number(1.0))].into_iter().collect();
    let map = HashMap::<String, u32>::from_node_default(node).unwrap();
    assert_eq!(map.get("n"), Some(&1));

    assert!(HashMap::<String, u32>::from_node_default(Node::Array(vec![])).is_err());
}

#[test]
fn containers_map_back_to_nodes() {
    let mut map = HashMap::new();
    map.insert("xs".to_string(), vec![1u8, 2]);
    let node = map.to_node().unwrap();
    assert_eq!(
        node.get("xs"),
        Some(&Node::Array(vec![Node::Number(1.0), Node::Number(2.0)]))
    );
    assert_eq!("s".to_node().unwrap(), Node::from("s"));
}
