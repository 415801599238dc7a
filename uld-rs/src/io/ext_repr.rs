use serde::{Deserialize, Serialize};

#[cfg(feature = "presets")]
use crate::entities::ContainerPreset;
use crate::geometry::Orientation;

/// External representation of a [`Container`](crate::entities::Container).
/// Either a named preset or explicit dimensions, never both.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtContainer {
    /// One of the standard sea containers or air ULDs
    #[cfg(feature = "presets")]
    Preset { preset: ContainerPreset },
    /// Explicit inner dimensions and weight capacity
    Dimensions {
        length: f64,
        width: f64,
        height: f64,
        #[serde(alias = "maxWeight")]
        max_weight: f64,
    },
}

/// External representation of a [`CargoItem`](crate::entities::CargoItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCargoItem {
    /// Identifier of the item type, shared by all its units
    pub id: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Weight of a single unit
    pub weight: f64,
    /// Number of units requested.
    /// 1 if not specified
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    /// Which pair of dimensions may form the footprint.
    /// Any rotation if not specified
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_quantity() -> i64 {
    1
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// The container to load
    pub container: ExtContainer,
    /// Cargo item types to load into the container
    pub items: Vec<ExtCargoItem>,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem),
/// positioned in the container's frame (origin at its back-bottom-left corner, +x depth, +y right, +z up).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    pub unit_id: String,
    pub original_item_id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Rotated extents
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// A unit that could not be placed, as a cargo item record with quantity 1.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtUnplacedItem {
    pub unit_id: String,
    pub original_item_id: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    /// Always 1
    pub quantity: u64,
    pub orientation: Orientation,
    pub reason: ExtRejectionReason,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtRejectionReason {
    Overweight,
    NoFit,
}

/// External representation of a free [`Space`](crate::entities::Space).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSpace {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`LoadingSolution`](crate::entities::LoadingSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Placed units, in order of placement
    pub placed_items: Vec<ExtPlacedItem>,
    /// Units that could not be placed, in order of processing
    pub unplaced_items: Vec<ExtUnplacedItem>,
    /// The final free-space pool
    pub remaining_spaces: Vec<ExtSpace>,
    pub remaining_weight: f64,
    /// Placed volume over container volume
    pub density: f64,
    /// Placed weight over the container's weight capacity
    pub weight_utilization: f64,
    /// Time elapsed between the epoch and the creation of the solution
    pub run_time_ms: u64,
}
