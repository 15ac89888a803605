//! Matrix setup and the RK4 loop shared by the integrating commands.

use std::path::Path;
use std::time::Instant;

use ieom_core::{ErrorInfo, IeomError, Result};
use ieom_hubbard::{AssemblyReport, MatrixTriplet};
use ieom_ode::{Rk4, SparseMatrix, Triplet};
use num_complex::Complex64;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::output::{
    checkpoint_path, derived_path, provenance, write_json, Checkpoint, MatrixFile, OutputFile,
};

/// Turns `[H, ·]` triplets into the generator `i M` of `dh/dt = i M h`.
pub fn equation_of_motion(
    triplets: &[MatrixTriplet],
    report: &AssemblyReport,
) -> Result<SparseMatrix> {
    info!(
        dimension = report.dimension,
        generated = report.generated_terms,
        nonzero = report.nonzero_elements(),
        truncated = report.truncated_terms,
        "matrix assembled"
    );
    let mut matrix = SparseMatrix::from_triplets(
        report.dimension,
        report.dimension,
        triplets.iter().map(|t| Triplet {
            row: t.row,
            col: t.col,
            value: Complex64::new(t.value, 0.0),
        }),
    )?;
    info!(
        "{} out of {} matrix elements are non-zero",
        matrix.nnz(),
        report.dimension * report.dimension
    );
    info!("multiplying matrix with prefactor 1i");
    matrix.scale(Complex64::new(0.0, 1.0));
    Ok(matrix)
}

/// Writes the generator next to `out` as `<stem>_matrix.json`.
pub fn write_matrix(
    out: &Path,
    program: &str,
    config: &SimulationConfig,
    matrix: &SparseMatrix,
) -> Result<()> {
    let path = derived_path(out, "_matrix.json");
    info!(path = %path.display(), "writing matrix");
    let file = MatrixFile {
        provenance: provenance(program, config)?,
        rows: matrix.rows(),
        cols: matrix.cols(),
        triplets: matrix.triplets().collect(),
    };
    write_json(&path, &file)
}

/// Integrates `dh/dt = matrix · h` from `h = e_0` or from a checkpoint,
/// writing `measure(h)` every `measurement_interval` steps.
pub fn integrate<F>(
    config: &SimulationConfig,
    matrix: &SparseMatrix,
    out: &Path,
    checkpoint: Option<&Path>,
    mut measure: F,
) -> Result<Vec<Complex64>>
where
    F: FnMut(f64, &[Complex64]) -> Result<Vec<f64>>,
{
    let dimension = matrix.rows();
    let total = config.total_steps();
    let dt = config.dt;

    let (mut h, initial_step, mut output) = match checkpoint {
        Some(path) => {
            info!(path = %path.display(), "resuming from checkpoint");
            let restored = Checkpoint::load(path)?;
            if restored.coefficients.len() != dimension {
                return Err(IeomError::Config(
                    ErrorInfo::new("checkpoint-dimension", "checkpoint does not fit the basis")
                        .with_context("checkpoint", restored.coefficients.len())
                        .with_context("basis", dimension)
                        .with_hint("resume with the configuration the checkpoint came from"),
                ));
            }
            let output = OutputFile::resume(out, restored.step as f64 * dt)?;
            (restored.coefficients, restored.step, output)
        }
        None => {
            info!(dimension, "setting up initial vector");
            let mut h = vec![Complex64::new(0.0, 0.0); dimension];
            if let Some(first) = h.first_mut() {
                *first = Complex64::new(1.0, 0.0);
            }
            (h, 0, OutputFile::create(out)?)
        }
    };
    info!(path = %output.path().display(), initial_step, total, dt, "starting integration");

    let started = Instant::now();
    let mut solver = Rk4::new(dimension, dt)?;
    for step in initial_step..total {
        let t = step as f64 * dt;
        if step % config.measurement_interval == 0 {
            info!(t, "measuring");
            let values = measure(t, &h)?;
            output.write_row(t, &values)?;
        }

        debug!(step, total, t, "integrating");
        solver.step(matrix, &mut h)?;

        let done = step + 1;
        if done % config.checkpoint_interval == 0 {
            let path = checkpoint_path(out, done);
            info!(path = %path.display(), step = done, "writing checkpoint");
            Checkpoint {
                step: done,
                time: done as f64 * dt,
                coefficients: h.clone(),
            }
            .store(&path)?;
        }
        if done % config.flush_interval == 0 {
            debug!(path = %output.path().display(), "flushing output");
            output.flush()?;
        }
    }

    if total % config.measurement_interval == 0 {
        let t = total as f64 * dt;
        info!(t, "measuring");
        let values = measure(t, &h)?;
        output.write_row(t, &values)?;
    }
    output.flush()?;
    info!(elapsed = ?started.elapsed(), "integration finished");
    Ok(h)
}
