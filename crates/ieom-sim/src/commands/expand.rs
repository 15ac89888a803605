use clap::Args;
use ieom_algebra::{deduplicate, make_creator, make_term, remove_zero_terms};
use ieom_core::Result;
use ieom_hubbard::{total_momentum, Dispersion, HubbardTerm, MomentumHamiltonian};
use ieom_lattice::LinearDiscretization;
use tracing::info;

#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Number of momentum points.
    #[arg(long = "sites", short = 'N', default_value_t = 8)]
    pub sites: usize,
    /// Hopping amplitude entering the dispersion.
    #[arg(long = "hopping", short = 'J', default_value_t = 1.0)]
    pub hopping: f64,
    /// Interaction strength.
    #[arg(long = "interaction", short = 'U', default_value_t = 1.0)]
    pub interaction: f64,
    /// Momentum index of the expanded creator.
    #[arg(long, default_value_t = 0)]
    pub momentum: usize,
    /// Expand a spin-down creator instead of spin-up.
    #[arg(long)]
    pub spin_down: bool,
    /// Combine equal operator products and drop vanishing terms.
    #[arg(long)]
    pub reduce: bool,
}

/// Prints the momentum-space interaction terms of `[H_int, c†_{k,σ}]`, one
/// per line, followed by their total momentum index.
pub fn run(args: &ExpandArgs) -> Result<()> {
    let momentum = LinearDiscretization::momentum(args.sites)?;
    let lattice = LinearDiscretization::new(args.sites, 1.0)?;
    let dispersion = Dispersion::new(args.hopping, &momentum, &lattice);
    let hamiltonian = MomentumHamiltonian::new(dispersion, args.interaction);

    let initial: HubbardTerm = make_term(1.0, [make_creator(args.momentum, !args.spin_down)]);
    let mut terms = Vec::new();
    hamiltonian.generate_interaction_terms(&initial, &momentum, &mut terms)?;
    info!(initial = %initial, generated = terms.len(), "expanded interaction");
    if args.reduce {
        terms = deduplicate(&terms);
        remove_zero_terms(&mut terms);
        info!(unique = terms.len(), "reduced");
    }

    for term in &terms {
        println!("{term}\t{}", total_momentum(term, &momentum));
    }
    Ok(())
}
