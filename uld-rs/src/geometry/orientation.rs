use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Dims;

/// Which pair of an item's original dimensions may form its horizontal footprint.
/// The remaining original dimension is then fixed as the vertical extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// All six axis-aligned permutations are allowed
    #[default]
    #[serde(rename = "any", alias = "Any")]
    Any,
    /// Footprint {length, width}, vertical extent = original height
    #[serde(rename = "l_w", alias = "LengthWidth")]
    LengthWidth,
    /// Footprint {length, height}, vertical extent = original width
    #[serde(rename = "l_h", alias = "LengthHeight")]
    LengthHeight,
    /// Footprint {width, height}, vertical extent = original length
    #[serde(rename = "w_h", alias = "WidthHeight")]
    WidthHeight,
}

impl Orientation {
    /// Generates the admissible axis-aligned rotations of an item with original dimensions `dims`.
    ///
    /// Rotations are enumerated in a fixed order:
    /// `(l,w,h) (w,l,h) (l,h,w) (h,l,w) (w,h,l) (h,w,l)`.
    /// Constrained orientations keep the two rotations of their footprint pair, collapsed to one when the
    /// footprint is square. For [`Orientation::Any`], rotations identical to an earlier one are dropped.
    ///
    /// The returned list is never empty.
    pub fn rotations(&self, dims: &Dims) -> Vec<Dims> {
        let Dims {
            length: l,
            width: w,
            height: h,
        } = *dims;

        let footprint_pair = |a: f64, b: f64, vertical: f64| match a == b {
            true => vec![Dims::new(a, b, vertical)],
            false => vec![Dims::new(a, b, vertical), Dims::new(b, a, vertical)],
        };

        match self {
            Orientation::Any => [
                Dims::new(l, w, h),
                Dims::new(w, l, h),
                Dims::new(l, h, w),
                Dims::new(h, l, w),
                Dims::new(w, h, l),
                Dims::new(h, w, l),
            ]
            .into_iter()
            .fold(Vec::with_capacity(6), |mut unique, r| {
                if !unique.contains(&r) {
                    unique.push(r);
                }
                unique
            }),
            Orientation::LengthWidth => footprint_pair(l, w, h),
            Orientation::LengthHeight => footprint_pair(l, h, w),
            Orientation::WidthHeight => footprint_pair(w, h, l),
        }
    }

    /// The original dimension that must remain vertical, `None` for [`Orientation::Any`].
    pub fn fixed_vertical(&self, dims: &Dims) -> Option<f64> {
        match self {
            Orientation::Any => None,
            Orientation::LengthWidth => Some(dims.height),
            Orientation::LengthHeight => Some(dims.width),
            Orientation::WidthHeight => Some(dims.length),
        }
    }

    /// True if `rotation` is one of the admissible rotations of an item with original dimensions `dims`.
    pub fn admits(&self, dims: &Dims, rotation: &Dims) -> bool {
        self.rotations(dims).iter().contains(rotation)
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Orientation::Any => "any",
            Orientation::LengthWidth => "l_w",
            Orientation::LengthHeight => "l_h",
            Orientation::WidthHeight => "w_h",
        };
        write!(f, "{s}")
    }
}
