use std::collections::HashMap;

use anynode_bridge::dynamic::{dynamic_eq, DynamicList, NullMarker};
use anynode_bridge::ToDynamic;
use anynode_core::{MappingError, Node, NodeRepresentable};

/// Maps to an object node.
struct Account {
    id: u32,
    owner: Option<String>,
}

impl NodeRepresentable for Account {
    fn to_node(&self) -> Result<Node, MappingError> {
        let mut map = HashMap::new();
        map.insert("id".to_string(), self.id.to_node()?);
        map.insert("owner".to_string(), self.owner.to_node()?);
        Ok(Node::Object(map))
    }
}

/// Maps to an array node.
struct Path(Vec<String>);

impl NodeRepresentable for Path {
    fn to_node(&self) -> Result<Node, MappingError> {
        self.0.to_node()
    }
}

/// Always fails to map.
struct Broken;

impl NodeRepresentable for Broken {
    fn to_node(&self) -> Result<Node, MappingError> {
        Err(MappingError::Unrepresentable {
            type_name: "Broken".into(),
            reason: "always".into(),
        })
    }
}

#[test]
fn object_mapping_yields_map_view_only() {
    let account = Account {
        id: 7,
        owner: None,
    };
    let map = account.to_dynamic_map().unwrap().expect("map view");
    assert_eq!(map.get("id").unwrap().downcast_ref::<f64>(), Some(&7.0));
    assert!(map.get("owner").unwrap().is::<NullMarker>());

    assert!(account.to_dynamic_list().unwrap().is_none());
}

#[test]
fn array_mapping_yields_list_view_only() {
    let path = Path(vec!["usr".into(), "bin".into()]);
    let list = path.to_dynamic_list().unwrap().expect("list view");
    assert_eq!(list.len(), 2);
    assert_eq!(
        list[1].downcast_ref::<String>().map(String::as_str),
        Some("bin")
    );

    assert!(path.to_dynamic_map().unwrap().is_none());
}

#[test]
fn scalar_mapping_yields_neither_view() {
    assert!(true.to_dynamic_map().unwrap().is_none());
    assert!("x".to_dynamic_list().unwrap().is_none());
    assert_eq!(true.to_dynamic().unwrap().downcast_ref::<bool>(), Some(&true));
}

#[test]
fn mapping_errors_propagate_from_every_entry_point() {
    let expected = MappingError::Unrepresentable {
        type_name: "Broken".into(),
        reason: "always".into(),
    };
    assert_eq!(Broken.to_dynamic().unwrap_err(), expected);
    assert_eq!(Broken.to_dynamic_map().unwrap_err(), expected);
    assert_eq!(Broken.to_dynamic_list().unwrap_err(), expected);
}

#[test]
fn to_dynamic_matches_egress_of_mapped_node() {
    let path = Path(vec!["a".into()]);
    let direct = path.to_dynamic().unwrap();
    let via_node = anynode_bridge::egress(&path.to_node().unwrap());
    assert!(dynamic_eq(&*direct, &*via_node));
    assert!(direct.is::<DynamicList>());
}
