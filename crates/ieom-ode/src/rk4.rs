//! Classical fourth-order Runge-Kutta integrator for `dh/dt = M h`.

use ieom_core::{ErrorInfo, IeomError, Result};
use num_complex::Complex64;
use tracing::{debug, trace};

use crate::sparse::SparseMatrix;

/// Fixed-step RK4 stepper with preallocated stage buffers.
#[derive(Debug, Clone)]
pub struct Rk4 {
    dt: f64,
    k1: Vec<Complex64>,
    k2: Vec<Complex64>,
    k3: Vec<Complex64>,
    k4: Vec<Complex64>,
    stage: Vec<Complex64>,
}

impl Rk4 {
    /// Stepper for vectors of length `dimension` with step width `dt`.
    pub fn new(dimension: usize, dt: f64) -> Result<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(IeomError::Ode(
                ErrorInfo::new("invalid-step", "step width must be positive and finite")
                    .with_context("dt", dt),
            ));
        }
        debug!(dimension, dt, "allocating rk4 stages");
        let zeros = vec![Complex64::new(0.0, 0.0); dimension];
        Ok(Self {
            dt,
            k1: zeros.clone(),
            k2: zeros.clone(),
            k3: zeros.clone(),
            k4: zeros.clone(),
            stage: zeros,
        })
    }

    /// Step width.
    pub fn step_size(&self) -> f64 {
        self.dt
    }

    /// Length of the vectors this stepper integrates.
    pub fn dimension(&self) -> usize {
        self.stage.len()
    }

    /// Advances `h` by one step of `dh/dt = matrix · h`.
    pub fn step(&mut self, matrix: &SparseMatrix, h: &mut [Complex64]) -> Result<()> {
        let dimension = self.dimension();
        if h.len() != dimension || matrix.rows() != dimension || matrix.cols() != dimension {
            return Err(IeomError::Ode(
                ErrorInfo::new("dimension-mismatch", "matrix, vector and stepper disagree")
                    .with_context("stepper", dimension)
                    .with_context("vector", h.len())
                    .with_context("matrix", format!("{}x{}", matrix.rows(), matrix.cols())),
            ));
        }
        trace!(dimension, dt = self.dt, "rk4 step");

        let dt = self.dt;
        matrix.matvec_into(h, &mut self.k1)?;

        combine(&mut self.stage, h, &self.k1, dt / 2.0);
        matrix.matvec_into(&self.stage, &mut self.k2)?;

        combine(&mut self.stage, h, &self.k2, dt / 2.0);
        matrix.matvec_into(&self.stage, &mut self.k3)?;

        combine(&mut self.stage, h, &self.k3, dt);
        matrix.matvec_into(&self.stage, &mut self.k4)?;

        for (i, value) in h.iter_mut().enumerate() {
            *value += (self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i]) * (dt / 6.0);
        }
        Ok(())
    }
}

// out = h + factor · k
fn combine(out: &mut [Complex64], h: &[Complex64], k: &[Complex64], factor: f64) {
    for ((out, h), k) in out.iter_mut().zip(h).zip(k) {
        *out = h + k * factor;
    }
}
