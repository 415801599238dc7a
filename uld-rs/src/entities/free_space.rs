use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::entities::Container;
use crate::geometry::geo_traits::Solid;
use crate::geometry::primitives::{Cuboid, Dims};

/// A free axis-aligned box inside the container.
/// Spaces in a [`FreeSpacePool`] never overlap each other nor any placed item.
pub type Space = Cuboid;

/// The working set of free [`Space`]s available for placement.
///
/// The order of the spaces is significant: searches iterate the pool front to back and
/// ties are broken in favor of the first space encountered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FreeSpacePool {
    spaces: Vec<Space>,
}

impl FreeSpacePool {
    /// A pool containing a single space spanning the whole container.
    /// Empty if the container is degenerate.
    pub fn new(container: &Container) -> Self {
        FreeSpacePool {
            spaces: container.interior().into_iter().collect(),
        }
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Stable sort ascending by each space's smallest extent.
    /// Precedes every site search, as the pool changes after each placement.
    pub fn sort_for_search(&mut self) {
        self.spaces.sort_by_key(|s| OrderedFloat(s.min_dim()));
    }

    /// Consumes the space at `index` by placing a box with extents `rotation` in its back-bottom-left corner.
    /// The space is replaced in place by its guillotine residuals, after which the pool is compacted.
    /// Returns the number of residual spaces that were inserted.
    pub fn consume(&mut self, index: usize, rotation: &Dims) -> usize {
        let space = self.spaces[index];
        debug_assert!(rotation.fits_in(&space.dims()));

        let residuals = guillotine_split(&space, rotation);
        let n_residuals = residuals.len();
        self.spaces.splice(index..=index, residuals);
        self.compact();

        n_residuals
    }

    /// Stable sort descending by volume.
    ///
    /// No geometric merging of adjacent spaces is performed: residual boxes that could be
    /// fused into a larger free volume remain separate.
    pub fn compact(&mut self) {
        self.spaces.sort_by_key(|s| Reverse(OrderedFloat(s.volume())));
    }
}

/// Splits `space` after a box with extents `item` was placed in its back-bottom-left corner.
///
/// Produces up to three mutually disjoint residuals, in this order:
/// * top: the full footprint of the space, above the item
/// * right: the full length of the space, beside the item, capped at the item's height
/// * front: in front of the item, capped at the item's width and height
///
/// Residuals with an empty interior are omitted.
pub fn guillotine_split(space: &Space, item: &Dims) -> Vec<Space> {
    let mut residuals = Vec::with_capacity(3);

    if space.height > item.height {
        residuals.push(Cuboid {
            x: space.x,
            y: space.y,
            z: space.z + item.height,
            length: space.length,
            width: space.width,
            height: space.height - item.height,
        });
    }

    if space.width > item.width {
        residuals.push(Cuboid {
            x: space.x,
            y: space.y + item.width,
            z: space.z,
            length: space.length,
            width: space.width - item.width,
            height: item.height,
        });
    }

    if space.length > item.length {
        residuals.push(Cuboid {
            x: space.x + item.length,
            y: space.y,
            z: space.z,
            length: space.length - item.length,
            width: item.width,
            height: item.height,
        });
    }

    residuals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_traits::CollidesWith;

    #[test]
    fn split_produces_disjoint_residuals() {
        let space = Cuboid::try_new(0.0, 0.0, 0.0, 100.0, 50.0, 40.0).unwrap();
        let item = Dims::new(30.0, 20.0, 10.0);
        let residuals = guillotine_split(&space, &item);

        assert_eq!(
            residuals,
            vec![
                Cuboid::try_new(0.0, 0.0, 10.0, 100.0, 50.0, 30.0).unwrap(),
                Cuboid::try_new(0.0, 20.0, 0.0, 100.0, 30.0, 10.0).unwrap(),
                Cuboid::try_new(30.0, 0.0, 0.0, 70.0, 20.0, 10.0).unwrap(),
            ]
        );

        let placed = Cuboid::from_corner(0.0, 0.0, 0.0, item);
        for (i, a) in residuals.iter().enumerate() {
            assert!(space.encloses(a));
            assert!(!a.collides_with(&placed));
            for b in residuals.iter().skip(i + 1) {
                assert!(!a.collides_with(b));
            }
        }
        let residual_volume: f64 = residuals.iter().map(|r| r.volume()).sum();
        assert_eq!(residual_volume + placed.volume(), space.volume());
    }

    #[test]
    fn exact_fit_leaves_no_residuals() {
        let space = Cuboid::try_new(5.0, 5.0, 5.0, 10.0, 10.0, 10.0).unwrap();
        assert!(guillotine_split(&space, &Dims::new(10.0, 10.0, 10.0)).is_empty());
    }

    #[test]
    fn consume_splices_and_compacts() {
        let container = Container::new(100.0, 50.0, 40.0, 1000.0);
        let mut pool = FreeSpacePool::new(&container);
        assert_eq!(pool.len(), 1);

        let n = pool.consume(0, &Dims::new(30.0, 20.0, 10.0));
        assert_eq!(n, 3);
        let volumes = pool.spaces().iter().map(|s| s.volume()).collect::<Vec<_>>();
        assert_eq!(volumes, vec![150_000.0, 30_000.0, 14_000.0]);
    }

    #[test]
    fn sorting_is_stable() {
        let container = Container::new(100.0, 100.0, 150.0, 1000.0);
        let mut pool = FreeSpacePool::new(&container);
        // top and right residuals tie on both volume and smallest extent
        pool.consume(0, &Dims::new(100.0, 50.0, 100.0));
        let top = Cuboid::try_new(0.0, 0.0, 100.0, 100.0, 100.0, 50.0).unwrap();
        let right = Cuboid::try_new(0.0, 50.0, 0.0, 100.0, 50.0, 100.0).unwrap();
        assert_eq!(pool.spaces(), &[top, right]);

        pool.sort_for_search();
        assert_eq!(pool.spaces(), &[top, right]);
        pool.compact();
        assert_eq!(pool.spaces(), &[top, right]);
    }

    #[test]
    fn degenerate_container_has_empty_pool() {
        let pool = FreeSpacePool::new(&Container::new(100.0, 0.0, 100.0, 10.0));
        assert!(pool.is_empty());
    }
}
