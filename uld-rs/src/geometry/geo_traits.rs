/// Trait for types that can detect collisions between `Self` and `T`.
/// Two solids that merely share a face do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can detect 'almost-collisions' between `Self` and `T`.
///
/// Due to floating point arithmetic precision, two solids sharing a face can appear to overlap by a tiny amount.
/// This trait errs on the side of false negatives: overlaps within the tolerance of [`FPA`](crate::util::FPA) are ignored.
pub trait AlmostCollidesWith<T> {
    fn almost_collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of axis-aligned solids.
pub trait Solid {
    /// Volume of the interior of the solid
    fn volume(&self) -> f64;

    /// Smallest of the three extents
    fn min_dim(&self) -> f64;
}
