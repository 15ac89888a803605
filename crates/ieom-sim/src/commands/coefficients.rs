use std::path::PathBuf;

use clap::Args;
use ieom_core::Result;
use ieom_hubbard::{init_matrix, Basis, Hamiltonian};
use ieom_lattice::LinearDiscretization;
use ieom_sim::config::ConfigOverrides;
use ieom_sim::driver::{equation_of_motion, integrate, write_matrix};
use ieom_sim::output::{derived_path, provenance, write_json, RunRecord};
use tracing::info;

pub const PROGRAM: &str = "hubbard_real_1d_rk4_coefficients";

#[derive(Args, Debug)]
pub struct CoefficientsArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,
    /// Disable the hopping part of the Hamiltonian.
    #[arg(long)]
    pub no_hopping: bool,
    /// Disable the interaction part of the Hamiltonian.
    #[arg(long)]
    pub no_interaction: bool,
    /// Output file receiving `t` and the real and imaginary part of every
    /// coefficient per measurement.
    #[arg(long, default_value = "hubbard_real_1d_rk4_coefficients.txt")]
    pub out: PathBuf,
    /// Checkpoint to resume from, named `<stem>_checkpoint_<step>.bin`.
    #[arg(long)]
    pub checkpoint: Option<PathBuf>,
}

/// Hubbard chain in the configured basis, recording all coefficients.
pub fn run(args: &CoefficientsArgs) -> Result<()> {
    let mut config = args.overrides.resolve()?;
    if args.no_hopping {
        config.enable_hopping = false;
    }
    if args.no_interaction {
        config.enable_interaction = false;
    }
    info!(
        sites = config.sites,
        hopping = config.hopping,
        interaction = config.interaction,
        dt = config.dt,
        steps = config.total_steps(),
        basis = ?config.basis,
        out = %args.out.display(),
        "options"
    );
    write_json(
        &derived_path(&args.out, "_run.json"),
        &RunRecord {
            config: config.clone(),
            provenance: provenance(PROGRAM, &config)?,
        },
    )?;

    let lattice = LinearDiscretization::new(config.sites, 1.0)?;
    info!("setting up operator basis");
    let basis = Basis::new(config.basis, &lattice);
    let hamiltonian = Hamiltonian {
        hopping: config.hopping,
        interaction: config.interaction,
        enable_hopping: config.enable_hopping,
        enable_interaction: config.enable_interaction,
    };
    let (triplets, report) = init_matrix(&hamiltonian, &basis, &lattice)?;
    let matrix = equation_of_motion(&triplets, &report)?;
    write_matrix(&args.out, PROGRAM, &config, &matrix)?;

    let h = integrate(&config, &matrix, &args.out, args.checkpoint.as_deref(), |t, h| {
        if let Some(first) = h.first() {
            info!("h[0]({t}) = {first}");
        }
        Ok(h.iter().flat_map(|value| [value.re, value.im]).collect())
    })?;
    let norm: f64 = h.iter().map(|value| value.norm_sqr()).sum();
    info!(norm, "final coefficient norm");
    Ok(())
}
