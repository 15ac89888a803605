#![deny(missing_docs)]
#![doc = "Periodic discretizations in real and momentum space."]

//! Every discretization maps a dense linear index to a coordinate and
//! provides the periodic index arithmetic used for momentum conservation.

pub mod axis;
pub mod discretization;
pub mod linear;
pub mod square;

pub use axis::PeriodicAxis;
pub use discretization::Discretization;
pub use linear::LinearDiscretization;
pub use square::SquareDiscretization;
