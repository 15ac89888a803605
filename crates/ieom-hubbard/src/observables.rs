//! Expectation values evaluated from coefficient vectors.

use std::f64::consts::PI;

use ieom_core::{ErrorInfo, IeomError, Result};
use ieom_lattice::{Discretization, LinearDiscretization};
use num_complex::Complex64;

use crate::basis::Basis;

/// `⟨c†_{i,σ} c_{j,σ}⟩` in the half-filled Fermi sea of a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectationValue1DHalfFilled {
    n: usize,
}

impl ExpectationValue1DHalfFilled {
    /// Correlations on `lattice`.
    pub fn new(lattice: &LinearDiscretization) -> Self {
        Self { n: lattice.size() }
    }

    /// Periodic distance between two sites.
    pub fn distance(&self, i: usize, j: usize) -> usize {
        let d = i.abs_diff(j) % self.n;
        d.min(self.n - d)
    }

    /// `1/2` on site, `sin(πr/2)/(πr)` at distance `r`.
    pub fn correlation(&self, i: usize, j: usize) -> f64 {
        match self.distance(i, j) {
            0 => 0.5,
            r => {
                let x = PI * r as f64;
                (x / 2.0).sin() / x
            }
        }
    }
}

/// Occupation `⟨n_{0,↑}⟩(t)` of the site whose creator started the
/// evolution, `Σ_ij h_i h_j^* ⟨c†_i c_j⟩`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteOccupation {
    correlations: ExpectationValue1DHalfFilled,
}

impl SiteOccupation {
    /// Observable backed by the given correlations.
    pub fn new(correlations: ExpectationValue1DHalfFilled) -> Self {
        Self { correlations }
    }

    /// Evaluates the occupation for coefficients `h` of a one-operator basis.
    pub fn evaluate(&self, basis: &Basis, h: &[Complex64]) -> Result<f64> {
        let Basis::OneOperator(one) = basis else {
            return Err(IeomError::Basis(
                ErrorInfo::new("unsupported-basis", "site occupation needs the one-operator basis")
                    .with_hint("run with the one-operator basis"),
            ));
        };
        if h.len() != one.size() {
            return Err(IeomError::Basis(
                ErrorInfo::new("dimension-mismatch", "coefficient vector and basis differ in size")
                    .with_context("coefficients", h.len())
                    .with_context("basis", one.size()),
            ));
        }
        let mut value = Complex64::new(0.0, 0.0);
        for (i, hi) in h.iter().enumerate() {
            for (j, hj) in h.iter().enumerate() {
                value += hi * hj.conj() * self.correlations.correlation(i, j);
            }
        }
        Ok(value.re)
    }
}
