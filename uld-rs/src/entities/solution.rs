use std::time::Instant;

use crate::entities::{Instance, PlacedItem, RejectionReason, Space, UnitItem};
use crate::geometry::geo_traits::Solid;

/// Full outcome of a single loading run.
#[derive(Debug, Clone)]
pub struct LoadingSolution {
    /// Placed units, in order of placement
    pub placed_items: Vec<PlacedItem>,
    /// Units that could not be placed, in order of processing
    pub unplaced_items: Vec<UnplacedUnit>,
    /// The final free-space pool
    pub remaining_spaces: Vec<Space>,
    /// Weight capacity left
    pub remaining_weight: f64,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

/// A [`UnitItem`] that could not be placed, with the reason why.
#[derive(Debug, Clone, PartialEq)]
pub struct UnplacedUnit {
    pub unit: UnitItem,
    pub reason: RejectionReason,
}

impl LoadingSolution {
    pub fn n_placed(&self) -> usize {
        self.placed_items.len()
    }

    pub fn n_unplaced(&self) -> usize {
        self.unplaced_items.len()
    }

    pub fn placed_volume(&self) -> f64 {
        self.placed_items.iter().map(|pi| pi.cuboid.volume()).sum()
    }

    pub fn placed_weight(&self) -> f64 {
        self.placed_items.iter().map(|pi| pi.weight).sum()
    }

    pub fn remaining_volume(&self) -> f64 {
        self.remaining_spaces.iter().map(|s| s.volume()).sum()
    }

    /// Ratio of the volume of the placed items to the volume of the container.
    pub fn density(&self, instance: &Instance) -> f64 {
        let container_volume = instance.container_volume();
        if container_volume > 0.0 {
            self.placed_volume() / container_volume
        } else {
            0.0
        }
    }

    /// Ratio of the placed weight to the container's weight capacity.
    pub fn weight_utilization(&self, instance: &Instance) -> f64 {
        let max_weight = instance.container.max_weight;
        if max_weight > 0.0 {
            self.placed_weight() / max_weight
        } else {
            0.0
        }
    }

    /// Unplaced units grouped by the id of the item they were derived from, in order of first appearance.
    pub fn unplaced_by_item(&self) -> Vec<(&str, Vec<&UnplacedUnit>)> {
        let mut groups: Vec<(&str, Vec<&UnplacedUnit>)> = vec![];
        for u in &self.unplaced_items {
            match groups.iter_mut().find(|(id, _)| *id == u.unit.original_id) {
                Some((_, group)) => group.push(u),
                None => groups.push((u.unit.original_id.as_str(), vec![u])),
            }
        }
        groups
    }

    /// True if both solutions describe the same placements, unplaced units, free spaces and remaining weight.
    /// The time stamps are not compared.
    pub fn same_outcome(&self, other: &LoadingSolution) -> bool {
        self.placed_items == other.placed_items
            && self.unplaced_items == other.unplaced_items
            && self.remaining_spaces == other.remaining_spaces
            && self.remaining_weight == other.remaining_weight
    }
}
