//! Consistency checks on individual terms.

use ieom_algebra::{HubbardOperator, Term};
use ieom_lattice::Discretization;

/// Net momentum index of a momentum-space term: creators add their
/// momentum, annihilators subtract it. A pure scalar carries zero momentum.
pub fn total_momentum<P, D>(term: &Term<P, HubbardOperator>, momentum: &D) -> usize
where
    D: Discretization,
{
    term.operators.iter().fold(momentum.zero(), |total, op| {
        if op.creator {
            momentum.add(total, op.index)
        } else {
            momentum.sub(total, op.index)
        }
    })
}
