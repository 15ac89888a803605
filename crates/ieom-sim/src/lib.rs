#![deny(missing_docs)]
#![doc = "Configuration, logging and file formats of the ieom command line drivers."]

pub mod config;
pub mod driver;
pub mod logging;
pub mod output;

pub use config::{ConfigOverrides, SimulationConfig};
pub use output::{checkpoint_path, parse_checkpoint_step, Checkpoint, OutputFile};
