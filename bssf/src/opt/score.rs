use std::fmt::{Display, Formatter};

use ordered_float::NotNan;
use uld_rs::geometry::primitives::Dims;

/// The score BSSF assigns to a placing option: the smallest leftover margin across the three axes
/// when a rotation is put in a free space. Lower is better.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord)]
pub struct BSSFScore(NotNan<f64>);

impl BSSFScore {
    /// Score of `rotation` placed in a space with extents `space`. Only meaningful if the rotation fits.
    pub fn new(rotation: &Dims, space: &Dims) -> Self {
        debug_assert!(rotation.fits_in(space));
        let [dl, dw, dh] = rotation.margins_in(space);
        let short_side = f64::min(dl, f64::min(dw, dh));
        BSSFScore(NotNan::new(short_side).expect("score is NaN"))
    }

    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }

    /// No leftover margin on at least one axis, nothing can score lower.
    pub fn is_perfect(&self) -> bool {
        self.value() == 0.0
    }
}

impl Display for BSSFScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_margin() {
        let score = BSSFScore::new(&Dims::new(10.0, 20.0, 30.0), &Dims::new(15.0, 22.0, 40.0));
        assert_eq!(score.value(), 2.0);
    }

    #[test]
    fn exact_fit_is_perfect() {
        let dims = Dims::new(10.0, 20.0, 30.0);
        let exact = BSSFScore::new(&dims, &dims);
        assert!(exact.is_perfect());
        assert!(exact < BSSFScore::new(&dims, &Dims::new(11.0, 21.0, 31.0)));
    }
}
