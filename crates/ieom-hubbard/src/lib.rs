#![deny(missing_docs)]
#![doc = "Hubbard model equations of motion: commutation, bases and matrix assembly."]

//! The real-space engine feeds basis entries through `[H, ·]`, the reduced
//! results become Liouvillian matrix elements. The momentum-space engine and
//! the Fourier transformation work on the same operator algebra.

pub mod basis;
pub mod checks;
pub mod dispersion;
pub mod fourier;
pub mod liouvillian;
pub mod momentum_space;
pub mod observables;
pub mod real_space;

pub use basis::{Basis, Basis1Operator, Basis3Operator, BasisKind, HubbardTerm};
pub use checks::total_momentum;
pub use dispersion::{fermi_momentum_1d, Dispersion};
pub use fourier::{ComplexTerm, Transformation};
pub use liouvillian::{
    init_interaction_matrix, init_kinetic_matrix, init_matrix, AssemblyReport, MatrixTriplet,
};
pub use momentum_space::{interaction_monomial, interaction_monomials};
pub use observables::{ExpectationValue1DHalfFilled, SiteOccupation};

/// Real-space Hamiltonian, the one used for matrix assembly.
pub use real_space::Hamiltonian;
/// Momentum-space Hamiltonian.
pub use momentum_space::Hamiltonian as MomentumHamiltonian;
