//! Operator bases of the real-space Hubbard model.
//!
//! Both bases are built once from a discretization and are immutable
//! afterwards. Entries carry a unit prefactor.

use ieom_algebra::{make_annihilator, make_creator, make_term, HubbardOperator, Term};
use ieom_core::{ErrorInfo, IeomError, Result};
use ieom_lattice::Discretization;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Basis entry with a real prefactor.
pub type HubbardTerm = Term<f64, HubbardOperator>;

/// Reverses and flips a query so it can be matched against the
/// unconjugated entry patterns.
fn canonical_query(operators: &[HubbardOperator], conjugated: bool) -> Vec<HubbardOperator> {
    if conjugated {
        operators.iter().rev().map(HubbardOperator::conjugate).collect()
    } else {
        operators.to_vec()
    }
}

fn conjugate_all(terms: &mut [HubbardTerm]) {
    terms.par_iter_mut().for_each(|term| term.conjugate_in_place());
}

fn single_index(operators: &[HubbardOperator], n: usize) -> Option<usize> {
    match operators {
        [op] if op.creator && op.spin && op.index < n => Some(op.index),
        _ => None,
    }
}

/// `c†_{i,↑}` for every site `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basis1Operator {
    terms: Vec<HubbardTerm>,
    n: usize,
    conjugated: bool,
}

impl Basis1Operator {
    /// Builds the basis over all sites of `lattice`.
    pub fn new<D: Discretization>(lattice: &D) -> Self {
        let terms = lattice
            .indices()
            .map(|i| make_term(1.0, [make_creator(i, true)]))
            .collect();
        Self {
            terms,
            n: lattice.size(),
            conjugated: false,
        }
    }

    /// Number of sites.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    /// Entries in index order.
    pub fn terms(&self) -> &[HubbardTerm] {
        &self.terms
    }

    /// Index of `c†_{site,↑}`.
    pub fn get_1op_index(&self, site: usize) -> usize {
        site
    }

    /// True for the basis returned by [`Basis1Operator::get_conjugate`].
    pub fn is_conjugated(&self) -> bool {
        self.conjugated
    }

    /// Index of the entry with the given operator sequence.
    pub fn index_of(&self, operators: &[HubbardOperator]) -> Option<usize> {
        single_index(&canonical_query(operators, self.conjugated), self.n)
    }

    /// Independent copy with every entry conjugated.
    pub fn get_conjugate(&self) -> Self {
        let mut conjugate = self.clone();
        conjugate_all(&mut conjugate.terms);
        conjugate.conjugated = !self.conjugated;
        conjugate
    }
}

/// The `N` entries of [`Basis1Operator`] followed by
/// `c†_{i1,↑} c†_{i2,↓} c_{i3,↓}` for every ordered triple of sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basis3Operator {
    terms: Vec<HubbardTerm>,
    n: usize,
    conjugated: bool,
}

impl Basis3Operator {
    /// Builds the basis over all sites of `lattice`.
    pub fn new<D: Discretization>(lattice: &D) -> Self {
        let n = lattice.size();
        let mut terms = Vec::with_capacity(n * (n * n + 1));
        terms.extend(lattice.indices().map(|i| make_term(1.0, [make_creator(i, true)])));
        for i1 in lattice.indices() {
            for i2 in lattice.indices() {
                for i3 in lattice.indices() {
                    terms.push(make_term(
                        1.0,
                        [
                            make_creator(i1, true),
                            make_creator(i2, false),
                            make_annihilator(i3, false),
                        ],
                    ));
                }
            }
        }
        Self {
            terms,
            n,
            conjugated: false,
        }
    }

    /// Number of sites.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of entries, `N(N² + 1)`.
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    /// Entries in index order.
    pub fn terms(&self) -> &[HubbardTerm] {
        &self.terms
    }

    /// Index of `c†_{site,↑}`.
    pub fn get_1op_index(&self, site: usize) -> usize {
        site
    }

    /// Index of `c†_{i1,↑} c†_{i2,↓} c_{i3,↓}`, `N + N²·i1 + N·i2 + i3`.
    ///
    /// All three sites must be smaller than `N`; the result is meaningless
    /// otherwise. Use [`Basis3Operator::try_3op_index`] for untrusted input.
    pub fn get_3op_index(&self, i1: usize, i2: usize, i3: usize) -> usize {
        debug_assert!(i1 < self.n && i2 < self.n && i3 < self.n);
        self.n + self.n * self.n * i1 + self.n * i2 + i3
    }

    /// Checked form of [`Basis3Operator::get_3op_index`].
    pub fn try_3op_index(&self, i1: usize, i2: usize, i3: usize) -> Result<usize> {
        if i1 < self.n && i2 < self.n && i3 < self.n {
            return Ok(self.get_3op_index(i1, i2, i3));
        }
        Err(IeomError::Basis(
            ErrorInfo::new("site-out-of-range", "three-operator index needs sites below N")
                .with_context("i1", i1)
                .with_context("i2", i2)
                .with_context("i3", i3)
                .with_context("n", self.n),
        ))
    }

    /// True for the basis returned by [`Basis3Operator::get_conjugate`].
    pub fn is_conjugated(&self) -> bool {
        self.conjugated
    }

    /// Index of the entry with the given operator sequence.
    pub fn index_of(&self, operators: &[HubbardOperator]) -> Option<usize> {
        let query = canonical_query(operators, self.conjugated);
        match query.as_slice() {
            [_] => single_index(&query, self.n),
            [a, b, c]
                if a.creator && a.spin && b.creator && !b.spin && !c.creator && !c.spin =>
            {
                self.try_3op_index(a.index, b.index, c.index).ok()
            }
            _ => None,
        }
    }

    /// Independent copy with every entry conjugated.
    pub fn get_conjugate(&self) -> Self {
        let mut conjugate = self.clone();
        conjugate_all(&mut conjugate.terms);
        conjugate.conjugated = !self.conjugated;
        conjugate
    }
}

/// Which basis to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BasisKind {
    /// [`Basis1Operator`].
    OneOperator,
    /// [`Basis3Operator`].
    ThreeOperator,
}

/// Either operator basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Basis {
    /// Single creators.
    OneOperator(Basis1Operator),
    /// Single creators and three-operator products.
    ThreeOperator(Basis3Operator),
}

impl Basis {
    /// Builds the requested basis over `lattice`.
    pub fn new<D: Discretization>(kind: BasisKind, lattice: &D) -> Self {
        match kind {
            BasisKind::OneOperator => Basis::OneOperator(Basis1Operator::new(lattice)),
            BasisKind::ThreeOperator => Basis::ThreeOperator(Basis3Operator::new(lattice)),
        }
    }

    /// Variant tag.
    pub fn kind(&self) -> BasisKind {
        match self {
            Basis::OneOperator(_) => BasisKind::OneOperator,
            Basis::ThreeOperator(_) => BasisKind::ThreeOperator,
        }
    }

    /// Number of sites.
    pub fn n(&self) -> usize {
        match self {
            Basis::OneOperator(basis) => basis.n(),
            Basis::ThreeOperator(basis) => basis.n(),
        }
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.terms().len()
    }

    /// Entries in index order.
    pub fn terms(&self) -> &[HubbardTerm] {
        match self {
            Basis::OneOperator(basis) => basis.terms(),
            Basis::ThreeOperator(basis) => basis.terms(),
        }
    }

    /// Index of the entry with the given operator sequence.
    pub fn index_of(&self, operators: &[HubbardOperator]) -> Option<usize> {
        match self {
            Basis::OneOperator(basis) => basis.index_of(operators),
            Basis::ThreeOperator(basis) => basis.index_of(operators),
        }
    }

    /// Independent copy with every entry conjugated.
    pub fn get_conjugate(&self) -> Self {
        match self {
            Basis::OneOperator(basis) => Basis::OneOperator(basis.get_conjugate()),
            Basis::ThreeOperator(basis) => Basis::ThreeOperator(basis.get_conjugate()),
        }
    }
}
