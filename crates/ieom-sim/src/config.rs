//! YAML run configuration shared by the integrating commands.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use ieom_core::{ErrorInfo, IeomError, Result};
use ieom_hubbard::BasisKind;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Parameters of a single equation of motion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of lattice sites of the chain.
    #[serde(default = "default_sites")]
    pub sites: usize,
    /// Hopping amplitude `J`.
    #[serde(default = "default_hopping")]
    pub hopping: f64,
    /// On-site interaction `U`.
    #[serde(default = "default_interaction")]
    pub interaction: f64,
    /// RK4 step width.
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Stop time, used when `steps` is not given.
    #[serde(default = "default_t_end")]
    pub t_end: f64,
    /// Explicit number of integrator steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u64>,
    /// Steps between measurements.
    #[serde(default = "default_measurement_interval")]
    pub measurement_interval: u64,
    /// Steps between checkpoint files.
    #[serde(default = "default_checkpoint_interval")]
    pub checkpoint_interval: u64,
    /// Steps between flushes of the output file.
    #[serde(default = "default_flush_interval")]
    pub flush_interval: u64,
    /// Include the hopping part of the Hamiltonian.
    #[serde(default = "default_enabled")]
    pub enable_hopping: bool,
    /// Include the interaction part of the Hamiltonian.
    #[serde(default = "default_enabled")]
    pub enable_interaction: bool,
    /// Operator basis the coefficients refer to.
    #[serde(default = "default_basis")]
    pub basis: BasisKind,
}

fn default_sites() -> usize {
    16
}

fn default_hopping() -> f64 {
    1.0
}

fn default_interaction() -> f64 {
    1.0
}

fn default_dt() -> f64 {
    0.01
}

fn default_t_end() -> f64 {
    10.0
}

fn default_measurement_interval() -> u64 {
    10
}

fn default_checkpoint_interval() -> u64 {
    100
}

fn default_flush_interval() -> u64 {
    100
}

fn default_enabled() -> bool {
    true
}

fn default_basis() -> BasisKind {
    BasisKind::ThreeOperator
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sites: default_sites(),
            hopping: default_hopping(),
            interaction: default_interaction(),
            dt: default_dt(),
            t_end: default_t_end(),
            steps: None,
            measurement_interval: default_measurement_interval(),
            checkpoint_interval: default_checkpoint_interval(),
            flush_interval: default_flush_interval(),
            enable_hopping: default_enabled(),
            enable_interaction: default_enabled(),
            basis: default_basis(),
        }
    }
}

impl SimulationConfig {
    /// Parses a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents)
            .map_err(|err| IeomError::Config(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Reads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| {
            IeomError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| {
            IeomError::Config(err.info().clone().with_context("path", path.display()))
        })
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|err| IeomError::Config(ErrorInfo::new("config-serialize", err.to_string())))
    }

    /// Rejects configurations no run can start from.
    pub fn validate(&self) -> Result<()> {
        if self.sites == 0 {
            return Err(invalid("sites", "at least one lattice site is required"));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(invalid("dt", "step width must be positive and finite"));
        }
        if self.steps.is_none() && !(self.t_end.is_finite() && self.t_end >= 0.0) {
            return Err(invalid("t_end", "stop time must be finite and not negative"));
        }
        for (field, value) in [
            ("measurement_interval", self.measurement_interval),
            ("checkpoint_interval", self.checkpoint_interval),
            ("flush_interval", self.flush_interval),
        ] {
            if value == 0 {
                return Err(invalid(field, "interval must be at least one step"));
            }
        }
        if !(self.hopping.is_finite() && self.interaction.is_finite()) {
            return Err(invalid("hopping", "couplings must be finite"));
        }
        Ok(())
    }

    /// Number of integrator steps, from `steps` or `t_end / dt`.
    pub fn total_steps(&self) -> u64 {
        match self.steps {
            Some(steps) => steps,
            None => (self.t_end / self.dt - 1e-9).ceil().max(0.0) as u64,
        }
    }

    /// SHA-256 of the canonical JSON form, hex encoded.
    pub fn hash(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)
            .map_err(|err| IeomError::Config(ErrorInfo::new("config-serialize", err.to_string())))?;
        Ok(hex::encode(Sha256::digest(bytes)))
    }
}

fn invalid(field: &str, message: &str) -> IeomError {
    IeomError::Config(ErrorInfo::new("invalid-config", message).with_context("field", field))
}

/// Command line values that take precedence over the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// YAML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of lattice sites.
    #[arg(long = "sites", short = 'N')]
    pub sites: Option<usize>,
    /// Hopping amplitude.
    #[arg(long = "hopping", short = 'J')]
    pub hopping: Option<f64>,
    /// Interaction strength.
    #[arg(long = "interaction", short = 'U')]
    pub interaction: Option<f64>,
    /// Step width of the RK4 integrator.
    #[arg(long)]
    pub dt: Option<f64>,
    /// Stop time of the simulation.
    #[arg(long = "t-end")]
    pub t_end: Option<f64>,
    /// Number of integrator steps, overrides `--t-end`.
    #[arg(long)]
    pub steps: Option<u64>,
    /// Steps between measurements.
    #[arg(long = "measurement-interval")]
    pub measurement_interval: Option<u64>,
    /// Steps between checkpoints.
    #[arg(long = "checkpoint-interval")]
    pub checkpoint_interval: Option<u64>,
    /// Steps between output flushes.
    #[arg(long = "flush-interval")]
    pub flush_interval: Option<u64>,
}

impl ConfigOverrides {
    /// Loads the configuration file (or defaults) and applies the overrides.
    pub fn resolve(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Writes every given value into `config`.
    pub fn apply(&self, config: &mut SimulationConfig) {
        if let Some(sites) = self.sites {
            config.sites = sites;
        }
        if let Some(hopping) = self.hopping {
            config.hopping = hopping;
        }
        if let Some(interaction) = self.interaction {
            config.interaction = interaction;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(t_end) = self.t_end {
            config.t_end = t_end;
            config.steps = None;
        }
        if self.steps.is_some() {
            config.steps = self.steps;
        }
        if let Some(interval) = self.measurement_interval {
            config.measurement_interval = interval;
        }
        if let Some(interval) = self.checkpoint_interval {
            config.checkpoint_interval = interval;
        }
        if let Some(interval) = self.flush_interval {
            config.flush_interval = interval;
        }
    }
}
