use crate::entities::CargoItem;
use crate::geometry::Orientation;
use crate::geometry::primitives::Dims;

/// A single physical instance of a [`CargoItem`], after expanding its quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitItem {
    /// Unique per unit: `"{original_id}-{index}"`
    pub id: String,
    /// Id of the [`CargoItem`] this unit was derived from
    pub original_id: String,
    /// Original (unrotated) dimensions
    pub dims: Dims,
    pub weight: f64,
    pub volume: f64,
    pub orientation: Orientation,
}

impl UnitItem {
    /// The `index`-th unit of `item`.
    pub fn new(item: &CargoItem, index: usize) -> Self {
        UnitItem {
            id: format!("{}-{}", item.id, index),
            original_id: item.id.clone(),
            dims: item.dims,
            weight: item.weight,
            volume: item.unit_volume(),
            orientation: item.orientation,
        }
    }

    /// Expands `item` into its `quantity` units.
    pub fn expand(item: &CargoItem) -> impl Iterator<Item = UnitItem> + '_ {
        (0..item.quantity).map(move |i| UnitItem::new(item, i))
    }

    /// Admissible rotations of this unit, see [`Orientation::rotations`].
    pub fn rotations(&self) -> Vec<Dims> {
        self.orientation.rotations(&self.dims)
    }
}
