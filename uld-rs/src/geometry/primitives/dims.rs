use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::Solid;

/// Extents of an axis-aligned box along the container's three axes.
/// `length` runs along +x (depth), `width` along +y and `height` along +z (up).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dims {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dims {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Dims {
            length,
            width,
            height,
        }
    }

    /// True if `self` fits inside `other` without rotation (componentwise `<=`).
    #[inline(always)]
    pub fn fits_in(&self, other: &Dims) -> bool {
        self.length <= other.length && self.width <= other.width && self.height <= other.height
    }

    /// True if all three extents are strictly positive (NaN is not).
    pub fn is_positive(&self) -> bool {
        self.length > 0.0 && self.width > 0.0 && self.height > 0.0
    }

    /// Componentwise difference `other - self`, the leftover margins when `self` is put in `other`.
    #[inline(always)]
    pub fn margins_in(&self, other: &Dims) -> [f64; 3] {
        [
            other.length - self.length,
            other.width - self.width,
            other.height - self.height,
        ]
    }
}

impl Solid for Dims {
    fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    fn min_dim(&self) -> f64 {
        f64::min(self.length, f64::min(self.width, self.height))
    }
}

impl Display for Dims {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}
