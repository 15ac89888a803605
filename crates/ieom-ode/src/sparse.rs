//! Compressed sparse row matrix with complex entries.

use ieom_core::{ErrorInfo, IeomError, Result};
use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Matrix element in coordinate form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triplet {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// Entry value.
    pub value: Complex64,
}

/// Square or rectangular sparse matrix in CSR layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<Complex64>,
}

impl SparseMatrix {
    /// Builds a matrix from unordered triplets. Entries sharing a position
    /// are summed.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: impl IntoIterator<Item = Triplet>,
    ) -> Result<Self> {
        let mut per_row: Vec<Vec<(usize, Complex64)>> = vec![Vec::new(); rows];
        for triplet in triplets {
            if triplet.row >= rows || triplet.col >= cols {
                return Err(IeomError::Ode(
                    ErrorInfo::new("index-out-of-bounds", "triplet lies outside the matrix")
                        .with_context("row", triplet.row)
                        .with_context("col", triplet.col)
                        .with_context("shape", format!("{rows}x{cols}")),
                ));
            }
            per_row[triplet.row].push((triplet.col, triplet.value));
        }

        let mut row_ptr = Vec::with_capacity(rows + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);
        for row in &mut per_row {
            row.sort_by_key(|&(col, _)| col);

            let mut merged: Vec<(usize, Complex64)> = Vec::with_capacity(row.len());
            for &(col, value) in row.iter() {
                if let Some(last) = merged.last_mut() {
                    if last.0 == col {
                        last.1 += value;
                        continue;
                    }
                }
                merged.push((col, value));
            }

            for (col, value) in merged {
                col_indices.push(col);
                values.push(value);
            }
            row_ptr.push(col_indices.len());
        }

        Ok(Self {
            rows,
            cols,
            row_ptr,
            col_indices,
            values,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Entry at `(row, col)`, zero when not stored or out of range.
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        if row >= self.rows {
            return Complex64::new(0.0, 0.0);
        }
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        match self.col_indices[range.clone()].binary_search(&col) {
            Ok(offset) => self.values[range.start + offset],
            Err(_) => Complex64::new(0.0, 0.0),
        }
    }

    /// Multiplies every entry by `factor`.
    pub fn scale(&mut self, factor: Complex64) {
        self.values.par_iter_mut().for_each(|value| *value *= factor);
    }

    /// Stored entries in row-major order.
    pub fn triplets(&self) -> impl Iterator<Item = Triplet> + '_ {
        (0..self.rows).flat_map(move |row| {
            (self.row_ptr[row]..self.row_ptr[row + 1]).map(move |idx| Triplet {
                row,
                col: self.col_indices[idx],
                value: self.values[idx],
            })
        })
    }

    /// Returns `A·x`.
    pub fn matvec(&self, x: &[Complex64]) -> Result<Vec<Complex64>> {
        let mut y = vec![Complex64::new(0.0, 0.0); self.rows];
        self.matvec_into(x, &mut y)?;
        Ok(y)
    }

    /// Writes `A·x` into `y`, rows in parallel.
    pub fn matvec_into(&self, x: &[Complex64], y: &mut [Complex64]) -> Result<()> {
        if x.len() != self.cols || y.len() != self.rows {
            return Err(IeomError::Ode(
                ErrorInfo::new("dimension-mismatch", "vector length does not match the matrix")
                    .with_context("shape", format!("{}x{}", self.rows, self.cols))
                    .with_context("x", x.len())
                    .with_context("y", y.len()),
            ));
        }
        y.par_iter_mut().enumerate().for_each(|(row, out)| {
            let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
            *out = self.col_indices[start..end]
                .iter()
                .zip(&self.values[start..end])
                .map(|(&col, value)| value * x[col])
                .sum();
        });
        Ok(())
    }
}
