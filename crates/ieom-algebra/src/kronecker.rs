//! Symbolic Kronecker deltas produced by index coincidences.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::operator::SiteIndex;

/// Symmetric equality constraint `δ(a, b)` between two indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kronecker<I> {
    /// First index.
    pub a: I,
    /// Second index.
    pub b: I,
}

impl<I: SiteIndex> Kronecker<I> {
    /// Creates `δ(a, b)` without normalising the index order.
    pub fn new(a: I, b: I) -> Self {
        Self { a, b }
    }

    /// Normalises the constraint in place so that `a <= b`.
    pub fn order(&mut self) {
        if self.b < self.a {
            std::mem::swap(&mut self.a, &mut self.b);
        }
    }

    /// Returns the normalised constraint.
    pub fn ordered(mut self) -> Self {
        self.order();
        self
    }

    /// True when both indices are literally the same, so the delta equals one.
    pub fn is_trivial(&self) -> bool {
        self.a == self.b
    }

    /// Evaluates the delta for concrete indices.
    pub fn evaluate(&self) -> bool {
        self.is_trivial()
    }
}

impl<I: SiteIndex> Display for Kronecker<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "δ_{{{},{}}}", self.a, self.b)
    }
}
