//! Unitary Fourier transformation of operator products between a real-space
//! lattice and its momentum grid.
//!
//! `c†_r = N^{-1/2} Σ_k e^{−ik·r} c†_k` and `c_r = N^{-1/2} Σ_k e^{ik·r} c_k`,
//! with the inverse phases for the way back. The momentum grid must be the
//! reciprocal grid of the lattice for the two directions to be inverse.

use ieom_algebra::{make_term, HubbardOperator, Term, TermList};
use ieom_core::{ErrorInfo, IeomError, Result};
use ieom_lattice::Discretization;
use num_complex::Complex64;

/// Term with a complex prefactor, as produced by the transformation.
pub type ComplexTerm = Term<Complex64, HubbardOperator>;

/// Transformation between `lattice` and `momentum`.
#[derive(Debug, Clone, Copy)]
pub struct Transformation<'a, L, M> {
    lattice: &'a L,
    momentum: &'a M,
    norm: f64,
}

impl<'a, L, M> Transformation<'a, L, M>
where
    L: Discretization,
    M: Discretization<Vector = L::Vector>,
{
    /// Pairs a lattice with its momentum grid. Both must have the same size.
    pub fn new(lattice: &'a L, momentum: &'a M) -> Result<Self> {
        if lattice.size() != momentum.size() {
            return Err(IeomError::Lattice(
                ErrorInfo::new("size-mismatch", "lattice and momentum grid differ in size")
                    .with_context("lattice", lattice.size())
                    .with_context("momentum", momentum.size()),
            ));
        }
        Ok(Self {
            lattice,
            momentum,
            norm: 1.0 / (lattice.size() as f64).sqrt(),
        })
    }

    /// Expands a real-space term into momentum-space terms.
    pub fn to_momentum(&self, term: &ComplexTerm) -> Result<TermList<Complex64, HubbardOperator>> {
        self.expand(term, self.lattice, self.momentum, -1.0)
    }

    /// Expands a momentum-space term into real-space terms.
    pub fn to_real(&self, term: &ComplexTerm) -> Result<TermList<Complex64, HubbardOperator>> {
        self.expand(term, self.momentum, self.lattice, 1.0)
    }

    // Creator phase is exp(sign·i·k·r), annihilator phase its inverse. The
    // Cartesian product keeps target indices in ascending order per slot.
    fn expand<S, T>(
        &self,
        term: &ComplexTerm,
        source: &S,
        target: &T,
        sign: f64,
    ) -> Result<TermList<Complex64, HubbardOperator>>
    where
        S: Discretization<Vector = L::Vector>,
        T: Discretization<Vector = L::Vector>,
    {
        if let Some(op) = term.operators.iter().find(|op| !source.contains(op.index)) {
            return Err(IeomError::Algebra(
                ErrorInfo::new("index-out-of-lattice", "operator index outside the source grid")
                    .with_context("index", op.index)
                    .with_context("size", source.size()),
            ));
        }

        let mut partial: TermList<Complex64, HubbardOperator> =
            vec![make_term(term.prefactor, [])];
        for op in &term.operators {
            let from = source.position(op.index);
            let mut next = Vec::with_capacity(partial.len() * target.size());
            for prefix in &partial {
                for index in target.indices() {
                    let phase = sign * self.lattice.dot(&from, &target.position(index));
                    let phase = if op.creator { phase } else { -phase };
                    let mut operators = prefix.operators.clone();
                    operators.push(HubbardOperator {
                        index,
                        ..*op
                    });
                    next.push(Term {
                        prefactor: prefix.prefactor * Complex64::from_polar(self.norm, phase),
                        operators,
                    });
                }
            }
            partial = next;
        }
        Ok(partial)
    }
}
