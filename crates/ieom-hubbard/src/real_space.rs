//! Commutation engine of the real-space Hubbard Hamiltonian
//! `H = −J Σ_{⟨ij⟩σ} c†_{iσ} c_{jσ} + U Σ_i n_{i↑} n_{i↓}`.

use ieom_algebra::{
    commutate_at, make_annihilator, make_creator, Contract, HubbardOperator, Term, TermList,
};
use ieom_core::{ErrorInfo, IeomError, Result};
use ieom_lattice::Discretization;
use serde::{Deserialize, Serialize};

/// Real-space Hubbard Hamiltonian with switchable parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    /// Hopping amplitude `J`.
    pub hopping: f64,
    /// On-site interaction `U`.
    pub interaction: f64,
    /// Include the hopping part.
    pub enable_hopping: bool,
    /// Include the interaction part.
    pub enable_interaction: bool,
}

impl Default for Hamiltonian {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Hamiltonian {
    /// Full Hamiltonian with both parts enabled.
    pub fn new(hopping: f64, interaction: f64) -> Self {
        Self {
            hopping,
            interaction,
            enable_hopping: true,
            enable_interaction: true,
        }
    }

    /// Kinetic part only.
    pub fn hopping_only(hopping: f64) -> Self {
        Self {
            enable_interaction: false,
            ..Self::new(hopping, 0.0)
        }
    }

    /// Interaction part only.
    pub fn interaction_only(interaction: f64) -> Self {
        Self {
            enable_hopping: false,
            ..Self::new(0.0, interaction)
        }
    }

    /// Returns the raw terms of `[H, term]`. Terms are neither combined nor
    /// sorted; a pure scalar term yields an empty list.
    pub fn commutate<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        lattice: &D,
    ) -> Result<TermList<P, HubbardOperator>>
    where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        let mut result = Vec::new();
        self.commutate_into(term, lattice, &mut result)?;
        Ok(result)
    }

    /// Appends the raw terms of `[H, term]` to `result`.
    pub fn commutate_into<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        lattice: &D,
        result: &mut TermList<P, HubbardOperator>,
    ) -> Result<()>
    where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        check_sites(term, lattice)?;
        if self.enable_hopping {
            self.hopping_terms(term, lattice, result);
        }
        if self.enable_interaction {
            self.interaction_terms(term, result);
        }
        Ok(())
    }

    /// Appends `[H_hop, term]` regardless of `enable_hopping`.
    pub fn commutate_hopping<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        lattice: &D,
        result: &mut TermList<P, HubbardOperator>,
    ) -> Result<()>
    where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        check_sites(term, lattice)?;
        self.hopping_terms(term, lattice, result);
        Ok(())
    }

    /// Appends `[H_int, term]` regardless of `enable_interaction`.
    pub fn commutate_interaction<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        lattice: &D,
        result: &mut TermList<P, HubbardOperator>,
    ) -> Result<()>
    where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        check_sites(term, lattice)?;
        self.interaction_terms(term, result);
        Ok(())
    }

    // Only bonds touching the slot's site can contract with it: c†_a c_k for a
    // creator at k, c†_k c_b for an annihilator at k.
    fn hopping_terms<P, D>(
        &self,
        term: &Term<P, HubbardOperator>,
        lattice: &D,
        result: &mut TermList<P, HubbardOperator>,
    ) where
        P: Contract<usize, bool>,
        D: Discretization,
    {
        let coefficient = -self.hopping;
        for (slot, op) in term.operators.iter().enumerate() {
            for neighbour in lattice.neighbours(op.index) {
                let bond = if op.creator {
                    [
                        make_creator(neighbour, op.spin),
                        make_annihilator(op.index, op.spin),
                    ]
                } else {
                    [
                        make_creator(op.index, op.spin),
                        make_annihilator(neighbour, op.spin),
                    ]
                };
                commutate_at(coefficient, &bond, term, slot, result);
            }
        }
    }

    fn interaction_terms<P>(
        &self,
        term: &Term<P, HubbardOperator>,
        result: &mut TermList<P, HubbardOperator>,
    ) where
        P: Contract<usize, bool>,
    {
        for (slot, op) in term.operators.iter().enumerate() {
            let site = op.index;
            let density_pair = [
                make_creator(site, true),
                make_annihilator(site, true),
                make_creator(site, false),
                make_annihilator(site, false),
            ];
            commutate_at(self.interaction, &density_pair, term, slot, result);
        }
    }
}

fn check_sites<P, D: Discretization>(term: &Term<P, HubbardOperator>, lattice: &D) -> Result<()> {
    match term.operators.iter().find(|op| !lattice.contains(op.index)) {
        Some(op) => Err(IeomError::Algebra(
            ErrorInfo::new("index-out-of-lattice", "operator index outside the lattice")
                .with_context("index", op.index)
                .with_context("lattice_size", lattice.size()),
        )),
        None => Ok(()),
    }
}
