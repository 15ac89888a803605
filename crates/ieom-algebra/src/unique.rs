//! Reduction of term lists to unique operator products.

use crate::coefficient::Coefficient;
use crate::comparison::compare_terms;
use crate::term::{Term, TermList};

/// Appends the unique terms of `original` to `result`.
///
/// A sorted working list is kept; every incoming term is located by binary
/// search and either merged into an equal entry by adding prefactors or
/// inserted at its position.
///
/// Numeric coefficients merge if and only if the operator sequences are
/// equal, so every sequence appears once. A [`Prefactor`](crate::Prefactor)
/// is a single delta product without a symbolic sum, so symbolic terms
/// merge only when their canonical delta products also agree; one operator
/// sequence may then appear once per distinct product. Evaluating the
/// prefactors and reducing again yields one entry per sequence.
pub fn copy_as_unique_terms<'a, P, O, It>(original: It, result: &mut TermList<P, O>)
where
    P: Coefficient + 'a,
    O: Ord + Clone + 'a,
    It: IntoIterator<Item = &'a Term<P, O>>,
{
    let mut sorted: TermList<P, O> = Vec::new();
    for term in original {
        let mut term = term.clone();
        term.prefactor.canonicalize();
        match sorted.binary_search_by(|probe| compare_terms(probe, &term)) {
            Ok(pos) => sorted[pos].prefactor.accumulate(&term.prefactor),
            Err(pos) => sorted.insert(pos, term),
        }
    }
    result.extend(sorted);
}

/// Returns the canonically sorted list of unique terms.
pub fn deduplicate<P: Coefficient, O: Ord + Clone>(terms: &[Term<P, O>]) -> TermList<P, O> {
    let mut result = Vec::with_capacity(terms.len());
    copy_as_unique_terms(terms, &mut result);
    result
}

/// Removes terms whose prefactor is exactly zero.
pub fn remove_zero_terms<P: Coefficient, O>(terms: &mut TermList<P, O>) {
    terms.retain(|term| !term.prefactor.is_zero());
}
