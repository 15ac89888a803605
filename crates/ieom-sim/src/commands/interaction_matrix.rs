use std::path::PathBuf;

use clap::Args;
use ieom_core::Result;
use ieom_hubbard::{init_interaction_matrix, Basis, BasisKind};
use ieom_lattice::LinearDiscretization;
use ieom_sim::config::ConfigOverrides;
use ieom_sim::output::{provenance, write_json, MatrixFile};
use tracing::info;

pub const PROGRAM: &str = "interaction_matrix_1d_real";

#[derive(Args, Debug)]
pub struct InteractionMatrixArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,
    /// JSON file receiving the matrix triplets.
    #[arg(long, short = 'o', default_value = "interaction_matrix_1d_real.json")]
    pub out: PathBuf,
}

/// Interaction part of the chain Liouvillian in the three-operator basis.
pub fn run(args: &InteractionMatrixArgs) -> Result<()> {
    let mut config = args.overrides.resolve()?;
    config.basis = BasisKind::ThreeOperator;
    config.enable_hopping = false;
    info!(sites = config.sites, interaction = config.interaction, "options");

    let lattice = LinearDiscretization::new(config.sites, 1.0)?;
    let basis = Basis::new(config.basis, &lattice);
    let (triplets, report) = init_interaction_matrix(config.interaction, &basis, &lattice)?;
    info!(
        "{} x {} matrix with {} elements, {} terms outside the basis",
        report.dimension,
        report.dimension,
        report.nonzero_elements(),
        report.truncated_terms
    );

    write_json(
        &args.out,
        &MatrixFile {
            provenance: provenance(PROGRAM, &config)?,
            rows: report.dimension,
            cols: report.dimension,
            triplets,
        },
    )
}
