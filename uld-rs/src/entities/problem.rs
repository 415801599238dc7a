use std::fmt::{Display, Formatter};
use std::time::Instant;

use crate::entities::{Instance, Layout, LoadingSolution, PItemKey, UnitItem, UnplacedUnit, WeightTracker};
use crate::geometry::primitives::Dims;
use crate::util::assertions;

/// Dynamic counterpart of [`Instance`]: the layout being built, the weight capacity left and the units
/// that were declared unplaced so far.
#[derive(Clone, Debug)]
pub struct LoadingProblem {
    pub instance: Instance,
    pub layout: Layout,
    pub weight: WeightTracker,
    pub unplaced: Vec<UnplacedUnit>,
}

impl LoadingProblem {
    pub fn new(instance: Instance) -> Self {
        let layout = Layout::new(instance.container);
        let weight = WeightTracker::new(instance.container.max_weight);
        Self {
            instance,
            layout,
            weight,
            unplaced: vec![],
        }
    }

    /// Places a unit according to the provided [`Placement`] and charges its weight.
    pub fn place(&mut self, unit: &UnitItem, placement: Placement) -> PItemKey {
        let pk = self
            .layout
            .place_unit(unit, placement.space_index, placement.rotation);
        self.weight.register(unit.weight);
        pk
    }

    /// Declares a unit unplaced. This is final for the run.
    pub fn reject(&mut self, unit: UnitItem, reason: RejectionReason) {
        self.unplaced.push(UnplacedUnit { unit, reason });
    }

    /// Number of units processed so far, placed or not
    pub fn n_processed(&self) -> usize {
        self.layout.placed_items.len() + self.unplaced.len()
    }

    /// Creates a snapshot of the current state of the problem as a [`LoadingSolution`].
    pub fn save(&self) -> LoadingSolution {
        let solution = LoadingSolution {
            placed_items: self.layout.placed_items().cloned().collect(),
            unplaced_items: self.unplaced.clone(),
            remaining_spaces: self.layout.free_space().spaces().to_vec(),
            remaining_weight: self.weight.remaining(),
            time_stamp: Instant::now(),
        };

        debug_assert!(assertions::problem_matches_solution(self, &solution));

        solution
    }
}

/// Encapsulates all required information to place a [`UnitItem`] in a [`LoadingProblem`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index of the free space (in the pool's current order) whose corner receives the unit
    pub space_index: usize,
    /// Rotated extents of the unit
    pub rotation: Dims,
}

/// Why a unit could not be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The unit's weight exceeded the remaining weight capacity
    Overweight,
    /// No admissible rotation fitted in any free space
    NoFit,
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::Overweight => write!(f, "overweight"),
            RejectionReason::NoFit => write!(f, "no fit"),
        }
    }
}
