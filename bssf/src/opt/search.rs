use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use uld_rs::entities::{FreeSpacePool, Instance, Layout, UnitItem};
use uld_rs::geometry::primitives::Dims;

use crate::opt::score::BSSFScore;

/// A free space and a rotation in which a unit fits, with its score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteFit {
    /// Index of the space in the pool's order at the time of the search
    pub space_index: usize,
    pub rotation: Dims,
    pub score: BSSFScore,
}

/// Expands the instance into its units, largest volume first.
/// The sort is stable: units of equal volume keep their enumeration order.
pub fn unit_placement_order(instance: &Instance) -> Vec<UnitItem> {
    instance
        .units()
        .sorted_by_key(|unit| Reverse(OrderedFloat(unit.volume)))
        .collect_vec()
}

/// Searches the layout's free spaces for the best site to place `unit`.
/// The pool is sorted ascending by smallest extent first, even if no site is found.
pub fn search(layout: &mut Layout, unit: &UnitItem) -> Option<SiteFit> {
    layout.sort_free_space_for_search();
    best_fit(layout.free_space(), &unit.rotations())
}

/// Best-Short-Side-Fit over the pool in its current order.
///
/// Every (space, rotation) pair is visited in pool order, then rotation order.
/// Only a strictly lower score replaces the current best, so ties go to the first pair encountered.
pub fn best_fit(pool: &FreeSpacePool, rotations: &[Dims]) -> Option<SiteFit> {
    let mut best: Option<SiteFit> = None;

    for (space_index, space) in pool.spaces().iter().enumerate() {
        let space_dims = space.dims();
        for rotation in rotations.iter().filter(|r| r.fits_in(&space_dims)) {
            let score = BSSFScore::new(rotation, &space_dims);
            if best.is_none_or(|b| score < b.score) {
                best = Some(SiteFit {
                    space_index,
                    rotation: *rotation,
                    score,
                });
                if score.is_perfect() {
                    //margins are never negative, nothing can replace it
                    return best;
                }
            }
        }
    }
    best
}
