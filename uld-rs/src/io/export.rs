use std::time::Instant;

use itertools::Itertools;

use crate::entities::{Instance, LoadingSolution, PlacedItem, RejectionReason, Space, UnplacedUnit};
use crate::io::ext_repr::{
    ExtCargoItem, ExtContainer, ExtInstance, ExtPlacedItem, ExtRejectionReason, ExtSolution, ExtSpace,
    ExtUnplacedItem,
};

/// Exports a [`LoadingSolution`] by composing an [`ExtSolution`] from it.
/// All positions stay in the container's own frame.
pub fn export_solution(solution: &LoadingSolution, instance: &Instance, epoch: Instant) -> ExtSolution {
    ExtSolution {
        placed_items: solution.placed_items.iter().map(export_placed_item).collect_vec(),
        unplaced_items: solution
            .unplaced_items
            .iter()
            .map(export_unplaced_unit)
            .collect_vec(),
        remaining_spaces: solution.remaining_spaces.iter().map(export_space).collect_vec(),
        remaining_weight: solution.remaining_weight,
        density: solution.density(instance),
        weight_utilization: solution.weight_utilization(instance),
        run_time_ms: solution
            .time_stamp
            .saturating_duration_since(epoch)
            .as_millis() as u64,
    }
}

/// Exports an [`Instance`], with the container always in its explicit dimensions.
pub fn export_instance(instance: &Instance, name: impl Into<String>) -> ExtInstance {
    ExtInstance {
        name: name.into(),
        container: ExtContainer::Dimensions {
            length: instance.container.dims.length,
            width: instance.container.dims.width,
            height: instance.container.dims.height,
            max_weight: instance.container.max_weight,
        },
        items: instance
            .items
            .iter()
            .map(|item| ExtCargoItem {
                id: item.id.clone(),
                length: item.dims.length,
                width: item.dims.width,
                height: item.dims.height,
                weight: item.weight,
                quantity: item.quantity as i64,
                orientation: item.orientation,
            })
            .collect_vec(),
    }
}

pub fn export_placed_item(pi: &PlacedItem) -> ExtPlacedItem {
    ExtPlacedItem {
        unit_id: pi.unit_id.clone(),
        original_item_id: pi.original_id.clone(),
        x: pi.cuboid.x,
        y: pi.cuboid.y,
        z: pi.cuboid.z,
        length: pi.cuboid.length,
        width: pi.cuboid.width,
        height: pi.cuboid.height,
    }
}

pub fn export_unplaced_unit(unplaced: &UnplacedUnit) -> ExtUnplacedItem {
    let unit = &unplaced.unit;
    ExtUnplacedItem {
        unit_id: unit.id.clone(),
        original_item_id: unit.original_id.clone(),
        length: unit.dims.length,
        width: unit.dims.width,
        height: unit.dims.height,
        weight: unit.weight,
        quantity: 1,
        orientation: unit.orientation,
        reason: match unplaced.reason {
            RejectionReason::Overweight => ExtRejectionReason::Overweight,
            RejectionReason::NoFit => ExtRejectionReason::NoFit,
        },
    }
}

pub fn export_space(space: &Space) -> ExtSpace {
    ExtSpace {
        x: space.x,
        y: space.y,
        z: space.z,
        length: space.length,
        width: space.width,
        height: space.height,
    }
}
