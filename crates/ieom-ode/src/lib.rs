#![deny(missing_docs)]
#![doc = "Sparse complex linear algebra and RK4 integration of linear ODE systems."]

pub mod rk4;
pub mod sparse;

pub use rk4::Rk4;
pub use sparse::{SparseMatrix, Triplet};
