//! Dynamic runtime values and their recognized shapes.
//!
//! A dynamic value is any `Box<dyn Any>`. Only a fixed set of concrete
//! types is understood by the converters; [`classify`] maps a value onto
//! that closed set and everything else lands in
//! [`DynamicKind::Unrecognized`].

use std::any::Any;
use std::collections::HashMap;

/// An untyped host value.
pub type Dynamic = Box<dyn Any + Send + Sync>;

/// Host ordered list.
pub type DynamicList = Vec<Dynamic>;

/// Host string-keyed map.
pub type DynamicMap = HashMap<String, Dynamic>;

/// Explicit host null. Egress always produces this for `Node::Null`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullMarker;

/// The closed set of shapes the converters understand.
#[derive(Debug, Clone, Copy)]
pub enum DynamicKind<'a> {
    Bool(bool),
    Number(f64),
    Text(&'a str),
    Map(&'a DynamicMap),
    List(&'a [Dynamic]),
    Null,
    Unrecognized,
}

// Integer types normalize to f64. Values beyond 2^53 lose precision.
macro_rules! downcast_number {
    ($value:expr, $($ty:ty),*) => {
        $(
            if let Some(n) = $value.downcast_ref::<$ty>() {
                return DynamicKind::Number(*n as f64);
            }
        )*
    };
}

/// Classify a dynamic value.
///
/// Booleans are tested before any numeric type. `bool` and the numeric
/// primitives are distinct types here, but the ordering is kept explicit so
/// that a boolean can never surface as a 0/1 number.
///
/// A `&Dynamic` that was coerced to `&dyn Any` (the box itself rather than
/// its contents) is unwrapped transparently.
pub fn classify(value: &dyn Any) -> DynamicKind<'_> {
    if let Some(boxed) = value.downcast_ref::<Dynamic>() {
        return classify(&**boxed);
    }
    if let Some(b) = value.downcast_ref::<bool>() {
        return DynamicKind::Bool(*b);
    }
    downcast_number!(value, f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
    if let Some(s) = value.downcast_ref::<String>() {
        return DynamicKind::Text(s);
    }
    if let Some(s) = value.downcast_ref::<&'static str>() {
        return DynamicKind::Text(s);
    }
    if let Some(map) = value.downcast_ref::<DynamicMap>() {
        return DynamicKind::Map(map);
    }
    if let Some(list) = value.downcast_ref::<DynamicList>() {
        return DynamicKind::List(list);
    }
    if value.is::<NullMarker>() || value.is::<()>() {
        return DynamicKind::Null;
    }
    DynamicKind::Unrecognized
}

/// Borrow the list behind a dynamic value, if it is one.
pub fn as_list(value: &dyn Any) -> Option<&[Dynamic]> {
    match classify(value) {
        DynamicKind::List(items) => Some(items),
        _ => None,
    }
}

/// Borrow the map behind a dynamic value, if it is one.
pub fn as_map(value: &dyn Any) -> Option<&DynamicMap> {
    match classify(value) {
        DynamicKind::Map(map) => Some(map),
        _ => None,
    }
}

pub fn is_null(value: &dyn Any) -> bool {
    matches!(classify(value), DynamicKind::Null)
}

/// Host equality over recognized shapes.
///
/// Numbers compare by value regardless of their concrete integer or float
/// type. Unrecognized values are never equal to anything.
pub fn dynamic_eq(a: &dyn Any, b: &dyn Any) -> bool {
    match (classify(a), classify(b)) {
        (DynamicKind::Null, DynamicKind::Null) => true,
        (DynamicKind::Bool(x), DynamicKind::Bool(y)) => x == y,
        (DynamicKind::Number(x), DynamicKind::Number(y)) => x == y,
        (DynamicKind::Text(x), DynamicKind::Text(y)) => x == y,
        (DynamicKind::List(xs), DynamicKind::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| dynamic_eq(&**x, &**y))
        }
        (DynamicKind::Map(xs), DynamicKind::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| dynamic_eq(&**x, &**y)))
        }
        _ => false,
    }
}

/// Box a host value.
pub fn of<T: Any + Send + Sync>(value: T) -> Dynamic {
    Box::new(value)
}

pub fn null() -> Dynamic {
    Box::new(NullMarker)
}

pub fn list(items: impl IntoIterator<Item = Dynamic>) -> Dynamic {
    Box::new(items.into_iter().collect::<DynamicList>())
}

pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Dynamic)>) -> Dynamic {
    Box::new(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<DynamicMap>(),
    )
}
