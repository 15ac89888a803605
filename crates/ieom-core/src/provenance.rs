//! Provenance and platform descriptors written next to every simulation artefact.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Description of the machine and build that produced an artefact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Operating system family (`linux`, `macos`, ...).
    pub os: String,
    /// CPU architecture.
    pub arch: String,
    /// Number of logical CPUs available to the process.
    pub threads: usize,
    /// Whether the binary was compiled with debug assertions.
    pub debug_build: bool,
}

impl PlatformInfo {
    /// Captures the platform the current process is running on.
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            debug_build: cfg!(debug_assertions),
        }
    }

    /// Renders the platform as `#`-prefixed header lines for text output files.
    pub fn header_lines(&self) -> Vec<String> {
        vec![
            format!("# os:      {}", self.os),
            format!("# arch:    {}", self.arch),
            format!("# threads: {}", self.threads),
            format!("# debug:   {}", self.debug_build),
        ]
    }
}

/// Provenance information attached to every serialized artefact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProvenance {
    /// Schema of the provenance payload.
    pub schema_version: SchemaVersion,
    /// Name of the program that produced the artefact.
    pub program: String,
    /// Hash of the effective configuration.
    pub input_hash: String,
    /// ISO-8601 timestamp recording when the artefact was generated.
    pub created_at: String,
    /// Platform the run executed on.
    pub platform: PlatformInfo,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}
