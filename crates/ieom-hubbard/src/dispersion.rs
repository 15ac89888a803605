//! Tight-binding dispersion on a momentum grid.

use std::f64::consts::PI;

use ieom_core::{ErrorInfo, IeomError, Result};
use ieom_lattice::Discretization;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Fermi momentum of a one-dimensional chain, `k_F = filling · π`.
pub fn fermi_momentum_1d(filling: f64) -> f64 {
    filling * PI
}

/// Table of `ε_k = −2J Σ_a cos(k·a)` over all momenta of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispersion {
    values: Vec<f64>,
}

impl Dispersion {
    /// Tabulates the dispersion of hopping `J` over `momentum`, summing over
    /// the primitive vectors of `lattice`.
    pub fn new<M, L>(hopping: f64, momentum: &M, lattice: &L) -> Self
    where
        M: Discretization,
        L: Discretization<Vector = M::Vector>,
    {
        let lattice_vectors = lattice.lattice_vectors();
        let values = momentum
            .indices()
            .into_par_iter()
            .map(|k| {
                let position = momentum.position(k);
                let sum: f64 = lattice_vectors
                    .iter()
                    .map(|a| momentum.dot(&position, a).cos())
                    .sum();
                -2.0 * hopping * sum
            })
            .collect();
        Self { values }
    }

    /// Energy of momentum index `k`.
    pub fn energy(&self, k: usize) -> Result<f64> {
        self.values.get(k).copied().ok_or_else(|| {
            IeomError::Lattice(
                ErrorInfo::new("momentum-out-of-range", "momentum index outside the table")
                    .with_context("index", k)
                    .with_context("size", self.values.len()),
            )
        })
    }

    /// All energies in momentum index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of tabulated momenta.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for an empty table.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
