//! Canonical strict weak order over terms.

use std::cmp::Ordering;

use crate::coefficient::Coefficient;
use crate::term::Term;

/// Compares two terms: operator count first, then the operators
/// lexicographically, then the symbolic part of the prefactor.
///
/// Numeric prefactor values never take part, so terms that differ only by
/// value are equivalent and get merged by reduction. Symbolic parts are
/// compared in canonical form, so `δ(a, b)` and `δ(b, a)` tie.
pub fn compare_terms<P: Coefficient, O: Ord>(lhs: &Term<P, O>, rhs: &Term<P, O>) -> Ordering {
    lhs.operators
        .len()
        .cmp(&rhs.operators.len())
        .then_with(|| lhs.operators.iter().cmp(rhs.operators.iter()))
        .then_with(|| lhs.prefactor.symbolic_cmp(&rhs.prefactor))
}

/// Strict "less than" predicate induced by [`compare_terms`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TermSmaller;

impl TermSmaller {
    /// Returns `true` if `lhs` sorts strictly before `rhs`.
    pub fn less<P: Coefficient, O: Ord>(&self, lhs: &Term<P, O>, rhs: &Term<P, O>) -> bool {
        compare_terms(lhs, rhs) == Ordering::Less
    }
}

/// Sorts a term list in canonical order without merging.
pub fn sort_terms<P: Coefficient, O: Ord>(terms: &mut [Term<P, O>]) {
    terms.sort_by(compare_terms);
}
