//! `tracing` subscriber setup for the command line drivers.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use ieom_core::{IeomError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` selects the level, `info` by
/// default. With `log_file` set, events are also written there without ANSI
/// colours.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|err| IeomError::io("log-mkdir", err))?;
            }
            let file = File::create(path).map_err(|err| IeomError::io("log-create", err))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|err| IeomError::io("log-init", err))
}
