#![deny(missing_docs)]
#![doc = "Symbolic algebra of fermionic creation and annihilation operators."]

//! Terms are ordered operator products with a scalar or symbolic prefactor.
//! Commutation produces raw term lists, which [`deduplicate`] reduces to a
//! canonical, sorted list of unique operator products.

pub mod coefficient;
pub mod commutator;
pub mod comparison;
pub mod kronecker;
pub mod operator;
pub mod prefactor;
pub mod term;
pub mod unique;

pub use coefficient::{Coefficient, Contract, Scalar};
pub use commutator::{
    anticommutator, commutate_at, commutate_monomials, commutate_operator, commutator,
};
pub use comparison::{compare_terms, sort_terms, TermSmaller};
pub use kronecker::Kronecker;
pub use operator::{
    make_annihilator, make_creator, make_spinless_annihilator, make_spinless_creator,
    HubbardOperator, NoSpin, Operator, SiteIndex, Spin,
};
pub use prefactor::{make_prefactor, Prefactor};
pub use term::{make_term, Term, TermList};
pub use unique::{copy_as_unique_terms, deduplicate, remove_zero_terms};

/// Re-exported complex scalar used for time-evolution coefficients.
pub use num_complex::Complex64;
