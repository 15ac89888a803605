#![deny(missing_docs)]
#![doc = "Shared error taxonomy and provenance types for the ieom workspace."]

pub mod errors;
pub mod provenance;

pub use errors::{ErrorInfo, IeomError};
pub use provenance::{PlatformInfo, RunProvenance, SchemaVersion};

/// Convenience alias used by every ieom crate.
pub type Result<T> = std::result::Result<T, IeomError>;
