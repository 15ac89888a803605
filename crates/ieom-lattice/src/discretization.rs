//! Capability shared by every discretization.

use std::fmt::Debug;
use std::ops::Range;

/// Finite periodic set of sites (real space) or momenta (momentum space).
///
/// Sites are addressed by a dense linear index in `0..size()`. Index
/// arithmetic wraps around the periodic boundary and treats the index of the
/// zero vector as the additive identity.
pub trait Discretization: Send + Sync {
    /// Coordinate vector of a site or momentum.
    type Vector: Copy + Debug + Send + Sync;

    /// Number of sites.
    fn size(&self) -> usize;

    /// All linear indices in ascending order.
    fn indices(&self) -> Range<usize> {
        0..self.size()
    }

    /// True when `index` addresses a site of this discretization.
    fn contains(&self, index: usize) -> bool {
        index < self.size()
    }

    /// Index of the zero vector, the identity of [`Discretization::add`].
    fn zero(&self) -> usize {
        self.sub(0, 0)
    }

    /// Coordinate of `index`.
    fn position(&self, index: usize) -> Self::Vector;

    /// Distinct nearest neighbours of `index`, excluding `index` itself.
    fn neighbours(&self, index: usize) -> Vec<usize>;

    /// Neighbours with a larger index, so that every bond is listed once
    /// across all sites.
    fn unique_neighbours(&self, index: usize) -> Vec<usize> {
        self.neighbours(index)
            .into_iter()
            .filter(|&neighbour| neighbour > index)
            .collect()
    }

    /// Primitive vectors of the grid.
    fn lattice_vectors(&self) -> Vec<Self::Vector>;

    /// Index of `position(a) + position(b)`, folded back into the grid.
    fn add(&self, a: usize, b: usize) -> usize;

    /// Index of `position(a) - position(b)`, folded back into the grid.
    fn sub(&self, a: usize, b: usize) -> usize;

    /// Euclidean scalar product.
    fn dot(&self, a: &Self::Vector, b: &Self::Vector) -> f64;

    /// Index of the grid point closest to `vector` after periodic folding.
    fn closest(&self, vector: Self::Vector) -> usize;
}
