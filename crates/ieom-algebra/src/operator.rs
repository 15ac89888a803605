//! Fermionic creation and annihilation operators.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// Capability required from a site or momentum index.
pub trait SiteIndex: Copy + Ord + Debug + Display + Send + Sync {}

impl<T> SiteIndex for T where T: Copy + Ord + Debug + Display + Send + Sync {}

/// Capability required from a spin tag.
pub trait Spin: Copy + Ord + Debug + Send + Sync {
    /// Glyph used when rendering an operator, `None` for spinless models.
    fn glyph(&self) -> Option<&'static str>;
}

impl Spin for bool {
    fn glyph(&self) -> Option<&'static str> {
        Some(if *self { "↑" } else { "↓" })
    }
}

/// Spin tag of spinless fermions. All values are equal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NoSpin;

impl Spin for NoSpin {
    fn glyph(&self) -> Option<&'static str> {
        None
    }
}

/// Fermionic operator `c_{index,spin}` or `c^†_{index,spin}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operator<I, S> {
    /// `true` for a creation operator, `false` for an annihilation operator.
    pub creator: bool,
    /// Site or momentum index.
    pub index: I,
    /// Spin tag.
    pub spin: S,
}

/// Operator of the spinful Hubbard model on an integer-indexed discretization.
pub type HubbardOperator = Operator<usize, bool>;

impl<I: SiteIndex, S: Spin> Operator<I, S> {
    /// Returns the operator with the creator flag inverted.
    pub fn conjugate(&self) -> Self {
        Self {
            creator: !self.creator,
            ..*self
        }
    }

    /// True when `{self, other}` is the identity, i.e. the kinds differ and
    /// index and spin coincide.
    pub fn contracts_with(&self, other: &Self) -> bool {
        self.creator != other.creator && self.index == other.index && self.spin == other.spin
    }
}

/// Canonical order: annihilators before creators, then index, then spin.
impl<I: SiteIndex, S: Spin> Ord for Operator<I, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.creator
            .cmp(&other.creator)
            .then_with(|| self.index.cmp(&other.index))
            .then_with(|| self.spin.cmp(&other.spin))
    }
}

impl<I: SiteIndex, S: Spin> PartialOrd for Operator<I, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: SiteIndex, S: Spin> Display for Operator<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c")?;
        if self.creator {
            write!(f, "^†")?;
        }
        match self.spin.glyph() {
            Some(glyph) => write!(f, "_{{{},{}}}", self.index, glyph),
            None => write!(f, "_{{{}}}", self.index),
        }
    }
}

/// Creates `c^†_{index,spin}`.
pub fn make_creator<I: SiteIndex, S: Spin>(index: I, spin: S) -> Operator<I, S> {
    Operator {
        creator: true,
        index,
        spin,
    }
}

/// Creates `c_{index,spin}`.
pub fn make_annihilator<I: SiteIndex, S: Spin>(index: I, spin: S) -> Operator<I, S> {
    Operator {
        creator: false,
        index,
        spin,
    }
}

/// Creates a spinless `c^†_{index}`.
pub fn make_spinless_creator<I: SiteIndex>(index: I) -> Operator<I, NoSpin> {
    make_creator(index, NoSpin)
}

/// Creates a spinless `c_{index}`.
pub fn make_spinless_annihilator<I: SiteIndex>(index: I) -> Operator<I, NoSpin> {
    make_annihilator(index, NoSpin)
}
