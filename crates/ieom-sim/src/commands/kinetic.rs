use std::path::PathBuf;

use clap::Args;
use ieom_core::Result;
use ieom_hubbard::{
    init_kinetic_matrix, Basis, BasisKind, ExpectationValue1DHalfFilled, SiteOccupation,
};
use ieom_lattice::LinearDiscretization;
use ieom_sim::config::{ConfigOverrides, SimulationConfig};
use ieom_sim::driver::{equation_of_motion, integrate, write_matrix};
use ieom_sim::output::{derived_path, provenance, write_json, RunRecord};
use tracing::info;

pub const PROGRAM: &str = "hubbard_real_1d_kinetic_rk4";

#[derive(Args, Debug)]
pub struct KineticArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,
    /// Output file receiving `t` and `<n_{0,↑}>(t)` per measurement.
    #[arg(long, default_value = "hubbard_real_1d_kinetic_rk4.txt")]
    pub out: PathBuf,
    /// Checkpoint to resume from, named `<stem>_checkpoint_<step>.bin`.
    #[arg(long)]
    pub checkpoint: Option<PathBuf>,
}

/// Hopping-only chain in the one-operator basis, measuring the occupation of
/// site 0.
pub fn run(args: &KineticArgs) -> Result<()> {
    let mut config = args.overrides.resolve()?;
    force_kinetic(&mut config);
    info!(sites = config.sites, hopping = config.hopping, out = %args.out.display(), "options");
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
    let (triplets, report) = init_kinetic_matrix(config.hopping, &basis, &lattice)?;
    let matrix = equation_of_motion(&triplets, &report)?;
    write_matrix(&args.out, PROGRAM, &config, &matrix)?;

    let observable = SiteOccupation::new(ExpectationValue1DHalfFilled::new(&lattice));
    integrate(&config, &matrix, &args.out, args.checkpoint.as_deref(), |t, h| {
        let occupation = observable.evaluate(&basis, h)?;
        info!("<n_{{0,↑}}>({t}) = {occupation}");
        Ok(vec![occupation])
    })?;
    Ok(())
}

fn force_kinetic(config: &mut SimulationConfig) {
    config.basis = BasisKind::OneOperator;
    config.enable_hopping = true;
    config.enable_interaction = false;
}
