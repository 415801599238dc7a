use crate::geometry::Orientation;
use crate::geometry::geo_traits::Solid;
use crate::geometry::primitives::Dims;

/// A cargo item type requested to be loaded, `quantity` times.
///
/// The loading core assumes positive dimensions, positive weight and `quantity >= 1`.
/// Filtering out entries violating this is the responsibility of the caller,
/// see [`Importer`](crate::io::import::Importer).
#[derive(Clone, Debug, PartialEq)]
pub struct CargoItem {
    pub id: String,
    /// Original (unrotated) dimensions
    pub dims: Dims,
    pub weight: f64,
    pub quantity: usize,
    pub orientation: Orientation,
}

impl CargoItem {
    pub fn new(
        id: impl Into<String>,
        dims: Dims,
        weight: f64,
        quantity: usize,
        orientation: Orientation,
    ) -> Self {
        CargoItem {
            id: id.into(),
            dims,
            weight,
            quantity,
            orientation,
        }
    }

    /// True if the item satisfies the preconditions of the loading core.
    pub fn is_valid(&self) -> bool {
        self.dims.is_positive() && self.weight > 0.0 && self.quantity >= 1
    }

    pub fn unit_volume(&self) -> f64 {
        self.dims.volume()
    }
}
