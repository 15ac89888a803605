//! Assembly of the Liouvillian matrix `[H, b_j] = Σ_k M_kj b_k`.

use ieom_algebra::{deduplicate, remove_zero_terms};
use ieom_core::Result;
use ieom_lattice::Discretization;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::real_space::Hamiltonian;

/// Single non-zero matrix element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixTriplet {
    /// Row, the basis index of the produced term.
    pub row: usize,
    /// Column, the basis index of the commutated entry.
    pub col: usize,
    /// Coefficient of the produced term.
    pub value: f64,
}

/// Statistics collected while assembling a matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyReport {
    /// Number of basis entries, equal to rows and columns.
    pub dimension: usize,
    /// Raw terms produced by commutation.
    pub generated_terms: usize,
    /// Non-zero terms left after reduction.
    pub unique_terms: usize,
    /// Reduced terms without a basis entry, dropped from the matrix.
    pub truncated_terms: usize,
}

impl AssemblyReport {
    /// Number of stored matrix elements.
    pub fn nonzero_elements(&self) -> usize {
        self.unique_terms - self.truncated_terms
    }

    fn merge(mut self, other: AssemblyReport) -> AssemblyReport {
        self.generated_terms += other.generated_terms;
        self.unique_terms += other.unique_terms;
        self.truncated_terms += other.truncated_terms;
        self
    }
}

/// Computes the matrix of `[H, ·]` on `basis`.
///
/// Columns are processed in parallel. Triplets are ordered by column, then
/// row. Terms outside the basis are dropped and counted in the report.
pub fn init_matrix<D: Discretization>(
    hamiltonian: &Hamiltonian,
    basis: &Basis,
    lattice: &D,
) -> Result<(Vec<MatrixTriplet>, AssemblyReport)> {
    let columns = basis
        .terms()
        .par_iter()
        .enumerate()
        .map(|(col, entry)| {
            let raw = hamiltonian.commutate(entry, lattice)?;
            let mut unique = deduplicate(&raw);
            remove_zero_terms(&mut unique);

            let mut report = AssemblyReport {
                generated_terms: raw.len(),
                unique_terms: unique.len(),
                ..AssemblyReport::default()
            };
            let mut triplets = Vec::with_capacity(unique.len());
            for term in &unique {
                match basis.index_of(&term.operators) {
                    Some(row) => triplets.push(MatrixTriplet {
                        row,
                        col,
                        value: term.prefactor,
                    }),
                    None => report.truncated_terms += 1,
                }
            }
            triplets.sort_by_key(|triplet| triplet.row);
            Ok((triplets, report))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut report = AssemblyReport {
        dimension: basis.size(),
        ..AssemblyReport::default()
    };
    let mut triplets = Vec::new();
    for (column, column_report) in columns {
        triplets.extend(column);
        report = report.merge(column_report);
    }
    Ok((triplets, report))
}

/// Matrix of the hopping part alone.
pub fn init_kinetic_matrix<D: Discretization>(
    hopping: f64,
    basis: &Basis,
    lattice: &D,
) -> Result<(Vec<MatrixTriplet>, AssemblyReport)> {
    init_matrix(&Hamiltonian::hopping_only(hopping), basis, lattice)
}

/// Matrix of the interaction part alone.
pub fn init_interaction_matrix<D: Discretization>(
    interaction: f64,
    basis: &Basis,
    lattice: &D,
) -> Result<(Vec<MatrixTriplet>, AssemblyReport)> {
    init_matrix(&Hamiltonian::interaction_only(interaction), basis, lattice)
}
