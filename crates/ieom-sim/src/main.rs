use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ieom_core::Result;
use ieom_sim::logging;
use ieom_sim::output::derived_path;
use tracing::{error, info};

use commands::{
    coefficients::{self, CoefficientsArgs},
    expand::{self, ExpandArgs},
    interaction_matrix::{self, InteractionMatrixArgs},
    kinetic::{self, KineticArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "ieom-sim", version, about = "Equations of motion for the Hubbard model")]
struct Cli {
    /// Log file, defaults to `<stem>.log` next to the output of integrating commands.
    #[arg(long, global = true)]
    log: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integrate the hopping-only chain and record the occupation of site 0.
    Kinetic(KineticArgs),
    /// Integrate the Hubbard chain and record every basis coefficient.
    Coefficients(CoefficientsArgs),
    /// Write the interaction matrix of the three-operator basis.
    InteractionMatrix(InteractionMatrixArgs),
    /// Print the momentum-space interaction expansion of a single creator.
    Expand(ExpandArgs),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Kinetic(_) => kinetic::PROGRAM,
            Command::Coefficients(_) => coefficients::PROGRAM,
            Command::InteractionMatrix(_) => interaction_matrix::PROGRAM,
            Command::Expand(_) => "expand",
        }
    }

    fn out(&self) -> Option<&Path> {
        match self {
            Command::Kinetic(args) => Some(&args.out),
            Command::Coefficients(args) => Some(&args.out),
            Command::InteractionMatrix(_) | Command::Expand(_) => None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_file = cli
        .log
        .clone()
        .or_else(|| cli.command.out().map(|out| derived_path(out, ".log")));
    if let Err(err) = logging::init(log_file.as_deref()) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let started = std::time::Instant::now();
    info!(program = cli.command.name(), "starting");
    match dispatch(&cli.command) {
        Ok(()) => {
            info!(elapsed = ?started.elapsed(), "execution finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "execution failed");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::Kinetic(args) => kinetic::run(args),
        Command::Coefficients(args) => coefficients::run(args),
        Command::InteractionMatrix(args) => interaction_matrix::run(args),
        Command::Expand(args) => expand::run(args),
    }
}
