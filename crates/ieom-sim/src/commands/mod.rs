//! Subcommands of the `ieom-sim` binary.

pub mod coefficients;
pub mod expand;
pub mod interaction_matrix;
pub mod kinetic;
