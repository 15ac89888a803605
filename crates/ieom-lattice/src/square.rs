//! Periodic square lattice.

use ieom_core::Result;
use serde::{Deserialize, Serialize};

use crate::axis::PeriodicAxis;
use crate::discretization::Discretization;

/// `L × L` torus, site `(x, y)` stored at linear index `x + L·y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareDiscretization {
    axis: PeriodicAxis,
}

impl SquareDiscretization {
    /// Real-space square lattice with side `side` and spacing `dx`.
    pub fn new(side: usize, dx: f64) -> Result<Self> {
        Ok(Self {
            axis: PeriodicAxis::real(side, dx)?,
        })
    }

    /// Momentum grid of a unit-spacing square lattice with side `side`.
    pub fn momentum(side: usize) -> Result<Self> {
        Ok(Self {
            axis: PeriodicAxis::momentum(side)?,
        })
    }

    /// Number of sites along one axis.
    pub fn side(&self) -> usize {
        self.axis.n
    }

    /// Splits a linear index into `(x, y)`.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index % self.axis.n, index / self.axis.n)
    }

    /// Joins `(x, y)` into a linear index.
    pub fn linear_index(&self, x: usize, y: usize) -> usize {
        x + self.axis.n * y
    }

    fn combine(
        &self,
        a: usize,
        b: usize,
        op: impl Fn(&PeriodicAxis, usize, usize) -> usize,
    ) -> usize {
        let (ax, ay) = self.coordinates(a);
        let (bx, by) = self.coordinates(b);
        self.linear_index(op(&self.axis, ax, bx), op(&self.axis, ay, by))
    }
}

impl Discretization for SquareDiscretization {
    type Vector = [f64; 2];

    fn size(&self) -> usize {
        self.axis.n * self.axis.n
    }

    fn position(&self, index: usize) -> [f64; 2] {
        let (x, y) = self.coordinates(index);
        [self.axis.coordinate(x), self.axis.coordinate(y)]
    }

    fn neighbours(&self, index: usize) -> Vec<usize> {
        let (x, y) = self.coordinates(index);
        let candidates = [
            self.linear_index(self.axis.left(x), y),
            self.linear_index(self.axis.right(x), y),
            self.linear_index(x, self.axis.left(y)),
            self.linear_index(x, self.axis.right(y)),
        ];
        let mut result = Vec::with_capacity(4);
        for neighbour in candidates {
            if neighbour != index && !result.contains(&neighbour) {
                result.push(neighbour);
            }
        }
        result
    }

    fn lattice_vectors(&self) -> Vec<[f64; 2]> {
        vec![[self.axis.step, 0.0], [0.0, self.axis.step]]
    }

    fn add(&self, a: usize, b: usize) -> usize {
        self.combine(a, b, PeriodicAxis::add)
    }

    fn sub(&self, a: usize, b: usize) -> usize {
        self.combine(a, b, PeriodicAxis::sub)
    }

    fn dot(&self, a: &[f64; 2], b: &[f64; 2]) -> f64 {
        a[0] * b[0] + a[1] * b[1]
    }

    fn closest(&self, vector: [f64; 2]) -> usize {
        self.linear_index(self.axis.closest(vector[0]), self.axis.closest(vector[1]))
    }
}
