//! One periodic axis of a discretization.

use std::f64::consts::PI;

use ieom_core::{ErrorInfo, IeomError, Result};
use serde::{Deserialize, Serialize};

/// `n` equally spaced points on a ring. Coordinate `i` sits at
/// `(i - origin) * step`, so `origin` is the index of the zero coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodicAxis {
    /// Number of points.
    pub n: usize,
    /// Index of the zero coordinate.
    pub origin: usize,
    /// Spacing between neighbouring points.
    pub step: f64,
}

impl PeriodicAxis {
    /// Real-space axis with spacing `dx` starting at the origin.
    pub fn real(n: usize, dx: f64) -> Result<Self> {
        check_points(n)?;
        if !(dx.is_finite() && dx > 0.0) {
            return Err(IeomError::Lattice(
                ErrorInfo::new("invalid-spacing", "lattice spacing must be positive and finite")
                    .with_context("dx", dx),
            ));
        }
        Ok(Self {
            n,
            origin: 0,
            step: dx,
        })
    }

    /// Momentum axis of a unit-spacing ring with `k_i = 2π(i - ⌊n/2⌋)/n`,
    /// covering `[-π, π)`.
    pub fn momentum(n: usize) -> Result<Self> {
        check_points(n)?;
        Ok(Self {
            n,
            origin: n / 2,
            step: 2.0 * PI / n as f64,
        })
    }

    /// Coordinate of index `i`.
    pub fn coordinate(&self, i: usize) -> f64 {
        (i as f64 - self.origin as f64) * self.step
    }

    /// Periodic sum of two indices.
    pub fn add(&self, a: usize, b: usize) -> usize {
        (a + b + self.n - self.origin) % self.n
    }

    /// Periodic difference of two indices.
    pub fn sub(&self, a: usize, b: usize) -> usize {
        (a + self.n - b + self.origin) % self.n
    }

    /// Index one step to the left.
    pub fn left(&self, i: usize) -> usize {
        (i + self.n - 1) % self.n
    }

    /// Index one step to the right.
    pub fn right(&self, i: usize) -> usize {
        (i + 1) % self.n
    }

    /// Index closest to coordinate `x` after folding onto the ring.
    pub fn closest(&self, x: f64) -> usize {
        let offset = (x / self.step).round() as i64 + self.origin as i64;
        offset.rem_euclid(self.n as i64) as usize
    }
}

fn check_points(n: usize) -> Result<()> {
    if n == 0 {
        return Err(IeomError::Lattice(
            ErrorInfo::new("empty-lattice", "a discretization needs at least one point")
                .with_hint("use a positive number of sites"),
        ));
    }
    Ok(())
}
