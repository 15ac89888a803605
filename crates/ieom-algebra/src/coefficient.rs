//! Scalar capabilities consumed by the commutation and reduction engines.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Mul, MulAssign, Neg};

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::operator::{Operator, SiteIndex, Spin};

/// Plain numeric value type (`f64` or `Complex64`).
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Display
    + Send
    + Sync
    + Zero
    + One
    + AddAssign
    + MulAssign
    + Mul<f64, Output = Self>
    + Neg<Output = Self>
{
}

impl Scalar for f64 {}
impl Scalar for Complex64 {}

/// Prefactor of a [`Term`](crate::Term).
pub trait Coefficient: Clone + PartialEq + Debug + Display + Send + Sync {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Exact zero test, no tolerance.
    fn is_zero(&self) -> bool;

    /// Multiplies by a real factor such as a coupling constant or a sign.
    fn scale(&mut self, factor: f64);

    /// Adds a coefficient with the same symbolic part.
    fn accumulate(&mut self, rhs: &Self);

    /// Brings the symbolic part into canonical form.
    fn canonicalize(&mut self) {}

    /// Orders the symbolic parts of two coefficients. Numbers have none.
    fn symbolic_cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

/// Contraction rule `{a, b}` for a coefficient type.
///
/// Numeric coefficients evaluate index coincidence immediately. Symbolic
/// coefficients record a Kronecker delta instead.
pub trait Contract<I: SiteIndex, S: Spin>: Coefficient {
    /// True when contractions are resolved to a boolean on the spot.
    const EAGER: bool;

    /// Multiplies `self` by `{a, b}` and returns `None` when it vanishes.
    fn contract(self, a: &Operator<I, S>, b: &Operator<I, S>) -> Option<Self>;
}

macro_rules! numeric_coefficient {
    ($ty:ty) => {
        impl Coefficient for $ty {
            fn zero() -> Self {
                <$ty as Zero>::zero()
            }

            fn one() -> Self {
                <$ty as One>::one()
            }

            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }

            fn scale(&mut self, factor: f64) {
                *self = *self * factor;
            }

            fn accumulate(&mut self, rhs: &Self) {
                *self += *rhs;
            }
        }

        impl<I: SiteIndex, S: Spin> Contract<I, S> for $ty {
            const EAGER: bool = true;

            fn contract(self, a: &Operator<I, S>, b: &Operator<I, S>) -> Option<Self> {
                a.contracts_with(b).then_some(self)
            }
        }
    };
}

numeric_coefficient!(f64);
numeric_coefficient!(Complex64);
