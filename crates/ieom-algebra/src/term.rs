//! Products of fermionic operators with a prefactor.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::operator::{Operator, SiteIndex, Spin};

/// Ordered operator product times a prefactor.
///
/// The operator order is physically significant. An empty operator sequence
/// is a valid term and stands for the identity times the prefactor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term<P, O> {
    /// Scalar or symbolic prefactor.
    pub prefactor: P,
    /// Operators in product order.
    pub operators: Vec<O>,
}

/// Sequence of terms produced by commutation and consumed by reduction.
pub type TermList<P, O> = Vec<Term<P, O>>;

/// Creates a term from a prefactor and its operators. An empty operator list
/// yields a pure scalar term.
pub fn make_term<P, O>(prefactor: P, operators: impl IntoIterator<Item = O>) -> Term<P, O> {
    Term {
        prefactor,
        operators: operators.into_iter().collect(),
    }
}

impl<P, O: PartialEq> Term<P, O> {
    /// True if both terms contain the same operators in the same order.
    pub fn same_operators(&self, rhs: &Self) -> bool {
        self.operators == rhs.operators
    }

    /// True for a pure scalar (identity) term.
    pub fn is_scalar(&self) -> bool {
        self.operators.is_empty()
    }

    /// Number of operators in the product.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Alias for [`Term::is_scalar`].
    pub fn is_empty(&self) -> bool {
        self.is_scalar()
    }
}

impl<P: Clone, I: SiteIndex, S: Spin> Term<P, Operator<I, S>> {
    /// Hermitian conjugate of the operator product: reversed order and every
    /// creator flag flipped.
    ///
    /// The prefactor is copied unchanged. Complex conjugation of the
    /// prefactor is the caller's responsibility.
    pub fn conjugate(&self) -> Self {
        Self {
            prefactor: self.prefactor.clone(),
            operators: self.operators.iter().rev().map(Operator::conjugate).collect(),
        }
    }

    /// In-place form of [`Term::conjugate`].
    pub fn conjugate_in_place(&mut self) {
        self.operators.reverse();
        for op in &mut self.operators {
            op.creator = !op.creator;
        }
    }
}

impl<P: Display, I: SiteIndex, S: Spin> Display for Term<P, Operator<I, S>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefactor)?;
        let Some((last, rest)) = self.operators.split_last() else {
            return Ok(());
        };
        write!(f, " ⋅ ")?;
        for op in rest {
            write!(f, "{op} ")?;
        }
        write!(f, "{last}")
    }
}
