use slotmap::new_key_type;

use crate::entities::{Space, UnitItem};
use crate::geometry::primitives::{Cuboid, Dims};

new_key_type! {
    /// Unique key for each [`PlacedItem`] in a [`Layout`](crate::entities::Layout)
    pub struct PItemKey;
}

/// A [`UnitItem`] that has been placed in a [`Layout`](crate::entities::Layout), in a specific rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    pub unit_id: String,
    pub original_id: String,
    pub weight: f64,
    /// The region occupied by the item, in the container's coordinate frame
    pub cuboid: Cuboid,
}

impl PlacedItem {
    /// Places `unit` in the back-bottom-left corner of `space`, with extents `rotation`.
    pub fn new(unit: &UnitItem, space: &Space, rotation: Dims) -> Self {
        PlacedItem {
            unit_id: unit.id.clone(),
            original_id: unit.original_id.clone(),
            weight: unit.weight,
            cuboid: Cuboid::from_corner(space.x, space.y, space.z, rotation),
        }
    }

    /// The rotated extents of the item
    pub fn rotation(&self) -> Dims {
        self.cuboid.dims()
    }
}
