use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{AlmostCollidesWith, CollidesWith, Solid};
use crate::geometry::primitives::Dims;
use crate::util::FPA;

/// Axis-aligned box anchored at its back-bottom-left corner `(x, y, z)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Cuboid {
    pub fn try_new(x: f64, y: f64, z: f64, length: f64, width: f64, height: f64) -> Result<Self> {
        ensure!(
            length > 0.0 && width > 0.0 && height > 0.0,
            "invalid cuboid, length: {length}, width: {width}, height: {height}"
        );
        Ok(Cuboid {
            x,
            y,
            z,
            length,
            width,
            height,
        })
    }

    /// Cuboid with extents `dims` anchored at `(x, y, z)`, no validation.
    pub fn from_corner(x: f64, y: f64, z: f64, dims: Dims) -> Self {
        Cuboid {
            x,
            y,
            z,
            length: dims.length,
            width: dims.width,
            height: dims.height,
        }
    }

    pub fn dims(&self) -> Dims {
        Dims::new(self.length, self.width, self.height)
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.length
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.width
    }

    pub fn z_max(&self) -> f64 {
        self.z + self.height
    }

    /// True if `other` lies completely inside `self` (shared faces allowed).
    pub fn encloses(&self, other: &Cuboid) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.z <= other.z
            && other.x_max() <= self.x_max()
            && other.y_max() <= self.y_max()
            && other.z_max() <= self.z_max()
    }

    /// Same as [`Cuboid::encloses`], with a tolerance for floating point precision.
    pub fn almost_encloses(&self, other: &Cuboid) -> bool {
        FPA(self.x) <= FPA(other.x)
            && FPA(self.y) <= FPA(other.y)
            && FPA(self.z) <= FPA(other.z)
            && FPA(other.x_max()) <= FPA(self.x_max())
            && FPA(other.y_max()) <= FPA(self.y_max())
            && FPA(other.z_max()) <= FPA(self.z_max())
    }
}

impl Solid for Cuboid {
    fn volume(&self) -> f64 {
        self.dims().volume()
    }

    fn min_dim(&self) -> f64 {
        self.dims().min_dim()
    }
}

impl CollidesWith<Cuboid> for Cuboid {
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid) -> bool {
        f64::max(self.x, other.x) < f64::min(self.x_max(), other.x_max())
            && f64::max(self.y, other.y) < f64::min(self.y_max(), other.y_max())
            && f64::max(self.z, other.z) < f64::min(self.z_max(), other.z_max())
    }
}

impl AlmostCollidesWith<Cuboid> for Cuboid {
    #[inline(always)]
    fn almost_collides_with(&self, other: &Cuboid) -> bool {
        FPA(f64::max(self.x, other.x)) < FPA(f64::min(self.x_max(), other.x_max()))
            && FPA(f64::max(self.y, other.y)) < FPA(f64::min(self.y_max(), other.y_max()))
            && FPA(f64::max(self.z, other.z)) < FPA(f64::min(self.z_max(), other.z_max()))
    }
}

impl Display for Cuboid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}x{}x{} @ ({}, {}, {})]",
            self.length, self.width, self.height, self.x, self.y, self.z
        )
    }
}
