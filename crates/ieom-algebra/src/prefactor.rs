//! Symbolic prefactors: a numeric value times a product of Kronecker deltas.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Mul, MulAssign};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::coefficient::{Coefficient, Contract, Scalar};
use crate::kronecker::Kronecker;
use crate::operator::{Operator, SiteIndex, Spin};

/// Numeric value multiplied by the accumulated delta constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefactor<V, I> {
    /// Numeric part.
    pub value: V,
    /// Product of Kronecker deltas, in accumulation order until
    /// [`Prefactor::order_kroneckers`] is called.
    pub kroneckers: Vec<Kronecker<I>>,
}

/// Creates a prefactor from a value and an initial list of deltas.
pub fn make_prefactor<V: Scalar, I: SiteIndex>(
    value: V,
    kroneckers: impl IntoIterator<Item = Kronecker<I>>,
) -> Prefactor<V, I> {
    Prefactor {
        value,
        kroneckers: kroneckers.into_iter().collect(),
    }
}

impl<V: Scalar, I: SiteIndex> Prefactor<V, I> {
    /// Orders every delta and sorts the list by `(a, b)` so that equal
    /// products compare equal regardless of accumulation order.
    pub fn order_kroneckers(&mut self) {
        for kronecker in &mut self.kroneckers {
            kronecker.order();
        }
        self.kroneckers
            .sort_by(|lhs, rhs| lhs.a.cmp(&rhs.a).then_with(|| lhs.b.cmp(&rhs.b)));
    }

    /// Resolves all deltas for concrete indices.
    pub fn evaluate(&self) -> V {
        if self.kroneckers.iter().all(Kronecker::evaluate) {
            self.value
        } else {
            V::zero()
        }
    }

    /// Multiplies the numeric part by a scalar.
    pub fn multiply_value(&mut self, factor: V) {
        self.value *= factor;
    }

    /// Drops deltas whose indices are identical.
    pub fn remove_trivial_kroneckers(&mut self) {
        self.kroneckers.retain(|k| !k.is_trivial());
    }

    /// Non-trivial deltas as ordered index pairs, sorted.
    fn canonical_key(&self) -> Vec<(I, I)> {
        let mut key: Vec<(I, I)> = self
            .kroneckers
            .iter()
            .copied()
            .filter(|k| !k.is_trivial())
            .map(|k| {
                let k = k.ordered();
                (k.a, k.b)
            })
            .collect();
        key.sort_unstable();
        key
    }
}

impl<V: Scalar, I: SiteIndex> MulAssign<Kronecker<I>> for Prefactor<V, I> {
    fn mul_assign(&mut self, rhs: Kronecker<I>) {
        self.kroneckers.push(rhs);
    }
}

impl<V: Scalar, I: SiteIndex> MulAssign<&Prefactor<V, I>> for Prefactor<V, I> {
    fn mul_assign(&mut self, rhs: &Prefactor<V, I>) {
        self.kroneckers.extend(rhs.kroneckers.iter().copied());
        self.value *= rhs.value;
    }
}

impl<V: Scalar, I: SiteIndex> Mul<&Prefactor<V, I>> for &Prefactor<V, I> {
    type Output = Prefactor<V, I>;

    fn mul(self, rhs: &Prefactor<V, I>) -> Prefactor<V, I> {
        let mut copy = self.clone();
        copy *= rhs;
        copy
    }
}

impl<V: Scalar, I: SiteIndex> Display for Prefactor<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((last, rest)) = self.kroneckers.split_last() else {
            return write!(f, "{}", self.value);
        };
        if self.value == -V::one() {
            write!(f, "-")?;
        } else if self.value != V::one() {
            write!(f, "{} ⋅ ", self.value)?;
        }
        for kronecker in rest {
            write!(f, "{kronecker} ")?;
        }
        write!(f, "{last}")
    }
}

impl<V: Scalar, I: SiteIndex> Coefficient for Prefactor<V, I> {
    fn zero() -> Self {
        make_prefactor(V::zero(), [])
    }

    fn one() -> Self {
        make_prefactor(V::one(), [])
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(&self.value)
    }

    fn scale(&mut self, factor: f64) {
        self.value = self.value * factor;
    }

    fn accumulate(&mut self, rhs: &Self) {
        self.value += rhs.value;
    }

    fn canonicalize(&mut self) {
        self.order_kroneckers();
        self.remove_trivial_kroneckers();
    }

    // Operands need not be canonicalized: δ(a, b) and δ(b, a) share a key.
    fn symbolic_cmp(&self, other: &Self) -> Ordering {
        let lhs = self.canonical_key();
        let rhs = other.canonical_key();
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(&rhs))
    }
}

impl<V: Scalar, I: SiteIndex, S: Spin> Contract<I, S> for Prefactor<V, I> {
    const EAGER: bool = false;

    fn contract(mut self, a: &Operator<I, S>, b: &Operator<I, S>) -> Option<Self> {
        if a.creator == b.creator || a.spin != b.spin {
            return None;
        }
        if a.index != b.index {
            self *= Kronecker::new(a.index, b.index);
        }
        Some(self)
    }
}
