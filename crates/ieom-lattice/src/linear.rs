//! Periodic chain.

use ieom_core::Result;
use serde::{Deserialize, Serialize};

use crate::axis::PeriodicAxis;
use crate::discretization::Discretization;

/// One-dimensional ring of `n` sites in real or momentum space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearDiscretization {
    axis: PeriodicAxis,
}

impl LinearDiscretization {
    /// Real-space chain with spacing `dx`.
    pub fn new(n: usize, dx: f64) -> Result<Self> {
        Ok(Self {
            axis: PeriodicAxis::real(n, dx)?,
        })
    }

    /// Momentum grid of a unit-spacing chain of `n` sites.
    pub fn momentum(n: usize) -> Result<Self> {
        Ok(Self {
            axis: PeriodicAxis::momentum(n)?,
        })
    }

    /// Underlying periodic axis.
    pub fn axis(&self) -> &PeriodicAxis {
        &self.axis
    }

    /// Index of the zero vector.
    pub fn origin(&self) -> usize {
        self.axis.origin
    }
}

impl Discretization for LinearDiscretization {
    type Vector = f64;

    fn size(&self) -> usize {
        self.axis.n
    }

    fn position(&self, index: usize) -> f64 {
        self.axis.coordinate(index)
    }

    fn neighbours(&self, index: usize) -> Vec<usize> {
        let mut result = Vec::with_capacity(2);
        for neighbour in [self.axis.left(index), self.axis.right(index)] {
            if neighbour != index && !result.contains(&neighbour) {
                result.push(neighbour);
            }
        }
        result
    }

    fn lattice_vectors(&self) -> Vec<f64> {
        vec![self.axis.step]
    }

    fn add(&self, a: usize, b: usize) -> usize {
        self.axis.add(a, b)
    }

    fn sub(&self, a: usize, b: usize) -> usize {
        self.axis.sub(a, b)
    }

    fn dot(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn closest(&self, vector: f64) -> usize {
        self.axis.closest(vector)
    }
}
