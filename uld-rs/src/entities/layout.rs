use slotmap::SlotMap;

use crate::entities::{Container, FreeSpacePool, PItemKey, PlacedItem, UnitItem};
use crate::geometry::geo_traits::Solid;
use crate::geometry::primitives::Dims;
use crate::util::assertions;

/// A [`Layout`] is a dynamic representation of items placed in a container at specific positions.
/// It maintains a [`FreeSpacePool`] of the volume that is still available for placement.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The container used for this layout
    pub container: Container,
    /// All the items that have been placed in this layout, indexed by a unique key (in order of placement)
    pub placed_items: SlotMap<PItemKey, PlacedItem>,
    free_space: FreeSpacePool,
}

impl Layout {
    pub fn new(container: Container) -> Self {
        let free_space = FreeSpacePool::new(&container);
        Layout {
            container,
            placed_items: SlotMap::with_key(),
            free_space,
        }
    }

    /// Places `unit` in the back-bottom-left corner of the free space at `space_index`, with extents `rotation`.
    /// The consumed space is replaced by its guillotine residuals.
    /// Returns the unique key for the placed item.
    pub fn place_unit(&mut self, unit: &UnitItem, space_index: usize, rotation: Dims) -> PItemKey {
        let space = self.free_space.spaces()[space_index];
        let pk = self
            .placed_items
            .insert(PlacedItem::new(unit, &space, rotation));

        self.free_space.consume(space_index, &rotation);

        debug_assert!(assertions::layout_is_feasible(self));

        pk
    }

    pub fn free_space(&self) -> &FreeSpacePool {
        &self.free_space
    }

    /// Reorders the free spaces ascending by their smallest extent, see [`FreeSpacePool::sort_for_search`].
    pub fn sort_free_space_for_search(&mut self) {
        self.free_space.sort_for_search();
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// Placed items in order of placement
    pub fn placed_items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.placed_items.values()
    }

    pub fn placed_volume(&self) -> f64 {
        self.placed_items.values().map(|pi| pi.cuboid.volume()).sum()
    }

    pub fn placed_weight(&self) -> f64 {
        self.placed_items.values().map(|pi| pi.weight).sum()
    }

    /// Ratio of the volume of the placed items to the volume of the container.
    pub fn density(&self) -> f64 {
        let container_volume = self.container.volume();
        if container_volume > 0.0 {
            self.placed_volume() / container_volume
        } else {
            0.0
        }
    }
}
