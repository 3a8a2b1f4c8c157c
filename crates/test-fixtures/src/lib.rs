//! Test fixture loader for anynode golden datasets.
//!
//! Fixtures are JSON files. Tests either deserialize them directly or turn
//! them into dynamic value graphs with [`json_to_dynamic`], which stands in
//! for the host layer that produces dynamic values in production.

use std::any::Any;
use std::path::PathBuf;

use anynode_bridge::dynamic::{self, classify, Dynamic, DynamicKind, DynamicList, DynamicMap};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use anynode_bridge::dynamic::dynamic_eq;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> Value {
    load_fixture(relative_path)
}

/// Load a fixture file as a dynamic value graph.
pub fn load_fixture_dynamic(relative_path: &str) -> Dynamic {
    json_to_dynamic(&load_fixture_value(relative_path))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Build a dynamic value graph from JSON.
///
/// Integers stay integers (`i64`/`u64`) so that ingest's numeric
/// normalization is exercised; everything else maps to the native type
/// egress would produce.
pub fn json_to_dynamic(value: &Value) -> Dynamic {
    match value {
        Value::Null => dynamic::null(),
        Value::Bool(b) => dynamic::of(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                dynamic::of(i)
            } else if let Some(u) = n.as_u64() {
                dynamic::of(u)
            } else {
                dynamic::of(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => dynamic::of(s.clone()),
        Value::Array(items) => Box::new(items.iter().map(json_to_dynamic).collect::<DynamicList>()),
        Value::Object(map) => Box::new(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_dynamic(v)))
                .collect::<DynamicMap>(),
        ),
    }
}

/// Render a dynamic value graph as JSON. Returns `None` if any part of the
/// graph is not a recognized shape.
pub fn dynamic_to_json(value: &dyn Any) -> Option<Value> {
    match classify(value) {
        DynamicKind::Null => Some(Value::Null),
        DynamicKind::Bool(b) => Some(Value::Bool(b)),
        DynamicKind::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                Some(Value::from(n as i64))
            } else {
                serde_json::Number::from_f64(n).map(Value::Number)
            }
        }
        DynamicKind::Text(s) => Some(Value::String(s.to_string())),
        DynamicKind::List(items) => items
            .iter()
            .map(|item| dynamic_to_json(&**item))
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        DynamicKind::Map(map) => map
            .iter()
            .map(|(k, v)| dynamic_to_json(&**v).map(|v| (k.clone(), v)))
            .collect::<Option<serde_json::Map<_, _>>>()
            .map(Value::Object),
        DynamicKind::Unrecognized => None,
    }
}

/// A dynamic list nested `depth` levels deep around a single `0`.
pub fn nested_lists(depth: usize) -> Dynamic {
    let mut value = dynamic::of(0i64);
    for _ in 0..depth {
        value = dynamic::list([value]);
    }
    value
}
