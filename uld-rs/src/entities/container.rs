use crate::geometry::geo_traits::Solid;
use crate::geometry::primitives::{Cuboid, Dims};

/// A rigid container (or ULD) in which [`UnitItem`](crate::entities::UnitItem)s can be placed.
/// Its own back-bottom-left corner is the origin of the coordinate frame used for all placements:
/// +x runs along the length (depth), +y along the width, +z upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub dims: Dims,
    /// Maximum total weight of the cargo
    pub max_weight: f64,
}

impl Container {
    pub fn new(length: f64, width: f64, height: f64, max_weight: f64) -> Self {
        Container {
            dims: Dims::new(length, width, height),
            max_weight,
        }
    }

    /// True if any field is non-positive (or NaN). Nothing can be loaded in a degenerate container.
    pub fn is_degenerate(&self) -> bool {
        !(self.dims.is_positive() && self.max_weight > 0.0)
    }

    /// The interior of the container as a [`Cuboid`] anchored at the origin, `None` if degenerate.
    pub fn interior(&self) -> Option<Cuboid> {
        match self.is_degenerate() {
            true => None,
            false => Some(Cuboid::from_corner(0.0, 0.0, 0.0, self.dims)),
        }
    }

    pub fn volume(&self) -> f64 {
        match self.is_degenerate() {
            true => 0.0,
            false => self.dims.volume(),
        }
    }
}
