//! Typed value → dynamic value.

use anynode_core::{MappingError, NodeRepresentable};

use crate::dynamic::{Dynamic, DynamicList, DynamicMap};
use crate::egress::egress_owned;

/// Rendering into dynamic values, available on every
/// [`NodeRepresentable`] type.
///
/// Only the mapping step can fail. The map and list views return
/// `Ok(None)` when the mapped node has a different shape.
pub trait ToDynamic {
    fn to_dynamic(&self) -> Result<Dynamic, MappingError>;

    /// The dynamic map, if `self` maps to an object node.
    fn to_dynamic_map(&self) -> Result<Option<DynamicMap>, MappingError> {
        Ok(self.to_dynamic()?.downcast::<DynamicMap>().ok().map(|map| *map))
    }

    /// The dynamic list, if `self` maps to an array node.
    fn to_dynamic_list(&self) -> Result<Option<DynamicList>, MappingError> {
        Ok(self.to_dynamic()?.downcast::<DynamicList>().ok().map(|list| *list))
    }
}

impl<T: NodeRepresentable + ?Sized> ToDynamic for T {
    fn to_dynamic(&self) -> Result<Dynamic, MappingError> {
        self.to_node().map(egress_owned)
    }
}
