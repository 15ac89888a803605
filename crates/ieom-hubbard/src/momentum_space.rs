//! Commutation engine of the momentum-space Hubbard Hamiltonian
//! `H = Σ_{kσ} ε_k n_{kσ} + (U/N) Σ_{k1 k2 k3} c†_{k1↑} c_{k2↑} c†_{k3↓} c_{k4↓}`
//! with `k4 = k1 − k2 + k3`.
//!
//! Numeric coefficients resolve momentum conservation while the interaction
//! sum is enumerated, so only the monomials that contract survive. Symbolic
//! coefficients enumerate the full sum and keep the constraint as a
//! Kronecker delta in the prefactor.

use ieom_algebra::{
    commutate_at, make_annihilator, make_creator, Contract, HubbardOperator, Term, TermList,
};
use ieom_core::{ErrorInfo, IeomError, Result};
use ieom_lattice::Discretization;
use serde::{Deserialize, Serialize};

use crate::dispersion::Dispersion;

/// Momentum-space Hubbard Hamiltonian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    /// Kinetic energies `ε_k`.
    pub dispersion: Dispersion,
    /// On-site interaction `U`.
    pub interaction: f64,
    /// Include the kinetic part.
    pub enable_hopping: bool,
    /// Include the interaction part.
    pub enable_interaction: bool,
}

/// Interaction monomial `c†_{k1↑} c_{k2↑} c†_{k3↓} c_{k4↓}` with
/// `k4 = k1 − k2 + k3` folded into the grid.
pub fn interaction_monomial<D: Discretization>(
    k1: usize,
    k2: usize,
    k3: usize,
    momentum: &D,
) -> [HubbardOperator; 4] {
    let k4 = momentum.add(momentum.sub(k1, k2), k3);
    [
        make_creator(k1, true),
        make_annihilator(k2, true),
        make_creator(k3, false),
        make_annihilator(k4, false),
    ]
}

/// Interaction monomials that can contract with `op`.
///
/// With `eager` set, the momentum of the contracting position is bound to
/// `op.index` and only the two free momenta are enumerated (`N²` entries).
/// Otherwise all `N³` monomials are listed.
pub fn interaction_monomials<D: Discretization>(
    op: &HubbardOperator,
    momentum: &D,
    eager: bool,
) -> Vec<[HubbardOperator; 4]> {
    let q = op.index;
    let n = momentum.size();
    if !eager {
        let mut monomials = Vec::with_capacity(n * n * n);
        for k1 in momentum.indices() {
            for k2 in momentum.indices() {
                for k3 in momentum.indices() {
                    monomials.push(interaction_monomial(k1, k2, k3, momentum));
                }
            }
        }
        return monomials;
    }

    let mut monomials = Vec::with_capacity(n * n);
    for a in momentum.indices() {
        for b in momentum.indices() {
            let (k1, k2, k3) = match (op.creator, op.spin) {
                // contracts with c_{k2↑}
                (true, true) => (a, q, b),
                // contracts with c†_{k1↑}
                (false, true) => (q, a, b),
                // contracts with c_{k4↓}, so k3 = q − k1 + k2
                (true, false) => (a, b, momentum.add(momentum.sub(q, a), b)),
                // contracts with c†_{k3↓}
                (false, false) => (a, b, q),
            };
            monomials.push(interaction_monomial(k1, k2, k3, momentum));
        }
    }
    monomials
}

impl Hamiltonian {
    /// Hamiltonian with both parts enabled.
    pub fn new(dispersion: Dispersion, interaction: f64) -> Self {
        Self {
            dispersion,
            interaction,
            enable_hopping: true,
            enable_interaction: true,
        }
    }

    /// Returns the raw terms of `[H, term]`.
    pub fn commutate<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        momentum: &D,
    ) -> Result<TermList<P, HubbardOperator>>
    where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        let mut result = Vec::new();
        self.commutate_into(term, momentum, &mut result)?;
        Ok(result)
    }

    /// Appends the raw terms of `[H, term]` to `result`.
    pub fn commutate_into<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        momentum: &D,
        result: &mut TermList<P, HubbardOperator>,
    ) -> Result<()>
    where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        if self.enable_hopping {
            self.commutate_kinetic(term, momentum, result)?;
        }
        if self.enable_interaction {
            self.generate_interaction_terms(term, momentum, result)?;
        }
        Ok(())
    }

    /// Appends `[Σ ε_k n_{kσ}, term]`; every operator picks up `±ε` of its
    /// own momentum.
    pub fn commutate_kinetic<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        momentum: &D,
        result: &mut TermList<P, HubbardOperator>,
    ) -> Result<()>
    where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        self.check_term(term, momentum)?;
        for (slot, op) in term.operators.iter().enumerate() {
            let energy = self.dispersion.energy(op.index)?;
            let density = [
                make_creator(op.index, op.spin),
                make_annihilator(op.index, op.spin),
            ];
            commutate_at(energy, &density, term, slot, result);
        }
        Ok(())
    }

    /// Appends `[H_int, term]`.
    pub fn generate_interaction_terms<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        momentum: &D,
        result: &mut TermList<P, HubbardOperator>,
    ) -> Result<()>
    where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        self.check_term(term, momentum)?;
        let coefficient = self.interaction / momentum.size() as f64;
        for (slot, op) in term.operators.iter().enumerate() {
            for monomial in interaction_monomials(op, momentum, P::EAGER) {
                commutate_at(coefficient, &monomial, term, slot, result);
            }
        }
        Ok(())
    }

    fn check_term<P, D: Discretization>(
        &self,
        term: &Term<P, HubbardOperator>,
        momentum: &D,
    ) -> Result<()> {
        if self.dispersion.len() != momentum.size() {
            return Err(IeomError::Lattice(
                ErrorInfo::new("size-mismatch", "dispersion and momentum grid differ in size")
                    .with_context("dispersion", self.dispersion.len())
                    .with_context("momentum", momentum.size()),
            ));
        }
        match term.operators.iter().find(|op| !momentum.contains(op.index)) {
            Some(op) => Err(IeomError::Algebra(
                ErrorInfo::new("index-out-of-lattice", "operator momentum outside the grid")
                    .with_context("index", op.index)
                    .with_context("grid_size", momentum.size()),
            )),
            None => Ok(()),
        }
    }
}
