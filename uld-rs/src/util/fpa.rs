use std::cmp::Ordering;

/// Absolute tolerance, well below any meaningful length (cm) or weight (kg)
const EPSILON: f64 = 1e-9;
const ULPS: i64 = 4;

/// Float with tolerant comparison, see [`float_cmp::approx_eq!()`].
/// Coordinates of residual spaces accumulate rounding errors, two faces meant to touch can be a few ulps apart.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = EPSILON, ulps = ULPS)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self == other {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
