use itertools::Itertools;
use log::error;

use crate::entities::{Container, Instance, Layout, LoadingProblem, LoadingSolution, PlacedItem, Space};
use crate::geometry::geo_traits::AlmostCollidesWith;
use crate::geometry::primitives::Cuboid;
use crate::util::FPA;

//Feasibility checks on layouts and solutions, with tolerance for rounding errors.
//Each check logs the first violation it finds.

/// No two placed items overlap (shared faces are allowed).
pub fn placed_items_disjoint<'a>(placed_items: impl IntoIterator<Item = &'a PlacedItem>) -> bool {
    let placed_items = placed_items.into_iter().collect_vec();
    for (a, b) in placed_items.iter().tuple_combinations() {
        if a.cuboid.almost_collides_with(&b.cuboid) {
            error!(
                "placed items {} {} and {} {} overlap",
                a.unit_id, a.cuboid, b.unit_id, b.cuboid
            );
            return false;
        }
    }
    true
}

pub fn placed_items_within_container<'a>(
    container: &Container,
    placed_items: impl IntoIterator<Item = &'a PlacedItem>,
) -> bool {
    cuboids_within(container.interior(), placed_items.into_iter().map(|pi| &pi.cuboid))
}

pub fn spaces_within_container(container: &Container, spaces: &[Space]) -> bool {
    cuboids_within(container.interior(), spaces)
}

fn cuboids_within<'a>(interior: Option<Cuboid>, cuboids: impl IntoIterator<Item = &'a Cuboid>) -> bool {
    let mut cuboids = cuboids.into_iter().peekable();
    match interior {
        None => {
            if let Some(c) = cuboids.peek() {
                error!("{c} present in a degenerate container");
                return false;
            }
            true
        }
        Some(interior) => cuboids.all(|c| {
            let within = interior.almost_encloses(c);
            if !within {
                error!("{c} exceeds the container {interior}");
            }
            within
        }),
    }
}

/// Every space has strictly positive extents.
pub fn spaces_positive(spaces: &[Space]) -> bool {
    spaces.iter().all(|s| {
        let positive = s.dims().is_positive();
        if !positive {
            error!("free space {s} has an empty interior");
        }
        positive
    })
}

pub fn spaces_mutually_disjoint(spaces: &[Space]) -> bool {
    for (a, b) in spaces.iter().tuple_combinations() {
        if a.almost_collides_with(b) {
            error!("free spaces {a} and {b} overlap");
            return false;
        }
    }
    true
}

pub fn spaces_disjoint_from_placed_items<'a>(
    spaces: &[Space],
    placed_items: impl IntoIterator<Item = &'a PlacedItem>,
) -> bool {
    for pi in placed_items {
        if let Some(s) = spaces.iter().find(|s| s.almost_collides_with(&pi.cuboid)) {
            error!("free space {s} overlaps placed item {} {}", pi.unit_id, pi.cuboid);
            return false;
        }
    }
    true
}

pub fn layout_is_feasible(layout: &Layout) -> bool {
    let spaces = layout.free_space().spaces();

    placed_items_disjoint(layout.placed_items())
        && placed_items_within_container(&layout.container, layout.placed_items())
        && spaces_positive(spaces)
        && spaces_within_container(&layout.container, spaces)
        && spaces_mutually_disjoint(spaces)
        && spaces_disjoint_from_placed_items(spaces, layout.placed_items())
}

/// `remaining_weight = max_weight - placed weight` and the placed weight never exceeds the capacity.
pub fn weight_is_conserved(instance: &Instance, solution: &LoadingSolution) -> bool {
    let capacity = f64::max(instance.container.max_weight, 0.0);
    let placed_weight = solution.placed_weight();

    if FPA(placed_weight) > FPA(capacity) {
        error!("placed weight {placed_weight} exceeds capacity {capacity}");
        return false;
    }
    if FPA(solution.remaining_weight) != FPA(capacity - placed_weight) {
        error!(
            "remaining weight {} does not match capacity {capacity} minus placed weight {placed_weight}",
            solution.remaining_weight
        );
        return false;
    }
    true
}

/// Every requested unit is either placed or unplaced, exactly once.
pub fn units_are_conserved(instance: &Instance, solution: &LoadingSolution) -> bool {
    let n_requested = instance.total_unit_qty();
    let n_accounted = solution.n_placed() + solution.n_unplaced();
    if n_requested != n_accounted {
        error!("{n_requested} units requested, but {n_accounted} accounted for");
        return false;
    }
    let unit_ids = solution
        .placed_items
        .iter()
        .map(|pi| pi.unit_id.as_str())
        .chain(solution.unplaced_items.iter().map(|u| u.unit.id.as_str()));
    if let Some(duplicate) = unit_ids.duplicates().next() {
        error!("unit {duplicate} accounted for more than once");
        return false;
    }
    true
}

/// Every placed item is in one of the rotations its orientation constraint admits.
pub fn placements_respect_orientation(instance: &Instance, solution: &LoadingSolution) -> bool {
    solution.placed_items.iter().all(|pi| {
        let admitted = instance
            .item(&pi.original_id)
            .is_some_and(|item| item.orientation.admits(&item.dims, &pi.rotation()));
        if !admitted {
            error!(
                "placed item {} has rotation {} not admitted for item {}",
                pi.unit_id,
                pi.rotation(),
                pi.original_id
            );
        }
        admitted
    })
}

/// Runs every check on a solution.
pub fn solution_is_feasible(instance: &Instance, solution: &LoadingSolution) -> bool {
    let spaces = &solution.remaining_spaces;

    placed_items_disjoint(&solution.placed_items)
        && placed_items_within_container(&instance.container, &solution.placed_items)
        && spaces_positive(spaces)
        && spaces_within_container(&instance.container, spaces)
        && spaces_mutually_disjoint(spaces)
        && spaces_disjoint_from_placed_items(spaces, &solution.placed_items)
        && weight_is_conserved(instance, solution)
        && units_are_conserved(instance, solution)
        && placements_respect_orientation(instance, solution)
}

pub fn problem_matches_solution(problem: &LoadingProblem, solution: &LoadingSolution) -> bool {
    let LoadingSolution {
        placed_items,
        unplaced_items,
        remaining_spaces,
        remaining_weight,
        time_stamp: _,
    } = solution;

    placed_items.iter().eq(problem.layout.placed_items())
        && unplaced_items == &problem.unplaced
        && remaining_spaces.as_slice() == problem.layout.free_space().spaces()
        && *remaining_weight == problem.weight.remaining()
}
