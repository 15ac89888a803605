//! Graded commutators of operator monomials.
//!
//! Every routine works by moving operators past each other one transposition
//! at a time. Each transposition of two fermionic operators contributes a
//! factor of −1 and, when the pair anticommutes to a scalar, a contracted term
//! whose prefactor is multiplied by `{a, b}` through [`Contract::contract`].

use crate::coefficient::Contract;
use crate::operator::{Operator, SiteIndex, Spin};
use crate::term::{Term, TermList};

/// Multiplies `prefactor` by the anticommutator `{a, b}`.
pub fn anticommutator<P, I, S>(prefactor: P, a: &Operator<I, S>, b: &Operator<I, S>) -> Option<P>
where
    P: Contract<I, S>,
    I: SiteIndex,
    S: Spin,
{
    prefactor.contract(a, b)
}

/// Appends `prefactor ⋅ [h, x}` to `result`, where `[h, x}` is the commutator
/// for an even monomial `h` and the anticommutator for an odd one.
///
/// `x` starts to the right of `h = y_0 … y_{n−1}` and is moved to its left.
/// Passing `y_j` yields `{y_j, x}` times the remaining operators with sign
/// `(−1)^{n−1−j}`, since `x` has already crossed `n−1−j` operators.
pub fn commutate_operator<P, I, S>(
    prefactor: &P,
    h: &[Operator<I, S>],
    x: &Operator<I, S>,
    result: &mut TermList<P, Operator<I, S>>,
) where
    P: Contract<I, S>,
    I: SiteIndex,
    S: Spin,
{
    let mut sign = 1.0;
    for j in (0..h.len()).rev() {
        if let Some(mut contracted) = anticommutator(prefactor.clone(), &h[j], x) {
            if sign < 0.0 {
                contracted.scale(sign);
            }
            let operators = h[..j].iter().chain(&h[j + 1..]).copied().collect();
            result.push(Term {
                prefactor: contracted,
                operators,
            });
        }
        sign = -sign;
    }
}

/// Appends the `slot`-th Leibniz contribution
/// `x_0 … x_{slot−1} [h, x_slot} x_{slot+1} …` of `coefficient ⋅ [h, term]`.
///
/// An odd `h` picks up `(−1)^{slot}` from being moved past the operators left
/// of the slot.
///
/// # Panics
///
/// Panics if `slot` is not a valid operator position of `term`.
pub fn commutate_at<P, I, S>(
    coefficient: f64,
    h: &[Operator<I, S>],
    term: &Term<P, Operator<I, S>>,
    slot: usize,
    result: &mut TermList<P, Operator<I, S>>,
) where
    P: Contract<I, S>,
    I: SiteIndex,
    S: Spin,
{
    let mut prefactor = term.prefactor.clone();
    let grading = if h.len() % 2 == 1 && slot % 2 == 1 {
        -1.0
    } else {
        1.0
    };
    prefactor.scale(coefficient * grading);

    let mut inner = Vec::new();
    commutate_operator(&prefactor, h, &term.operators[slot], &mut inner);

    let (left, right) = (&term.operators[..slot], &term.operators[slot + 1..]);
    result.extend(inner.into_iter().map(|contracted| {
        let capacity = left.len() + contracted.operators.len() + right.len();
        let mut operators = Vec::with_capacity(capacity);
        operators.extend_from_slice(left);
        operators.extend(contracted.operators);
        operators.extend_from_slice(right);
        Term {
            prefactor: contracted.prefactor,
            operators,
        }
    }));
}

/// Appends `coefficient ⋅ [h, term}` to `result`, summing over all slots.
///
/// A pure scalar term commutes with everything and contributes nothing.
pub fn commutate_monomials<P, I, S>(
    coefficient: f64,
    h: &[Operator<I, S>],
    term: &Term<P, Operator<I, S>>,
    result: &mut TermList<P, Operator<I, S>>,
) where
    P: Contract<I, S>,
    I: SiteIndex,
    S: Spin,
{
    for slot in 0..term.operators.len() {
        commutate_at(coefficient, h, term, slot, result);
    }
}

/// Convenience form of [`commutate_monomials`] returning a fresh list.
pub fn commutator<P, I, S>(
    coefficient: f64,
    h: &[Operator<I, S>],
    term: &Term<P, Operator<I, S>>,
) -> TermList<P, Operator<I, S>>
where
    P: Contract<I, S>,
    I: SiteIndex,
    S: Spin,
{
    let mut result = Vec::new();
    commutate_monomials(coefficient, h, term, &mut result);
    result
}
