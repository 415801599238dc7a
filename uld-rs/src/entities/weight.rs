/// Running counter of the weight capacity left in the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightTracker {
    remaining: f64,
}

impl WeightTracker {
    /// Seeded with `max_weight`, or 0 if `max_weight` is not positive.
    pub fn new(max_weight: f64) -> Self {
        let remaining = match max_weight > 0.0 {
            true => max_weight,
            false => 0.0,
        };
        WeightTracker { remaining }
    }

    /// False if loading `weight` would exceed the remaining capacity.
    #[inline(always)]
    pub fn admits(&self, weight: f64) -> bool {
        weight <= self.remaining
    }

    pub fn register(&mut self, weight: f64) {
        debug_assert!(self.admits(weight));
        self.remaining -= weight;
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }
}
