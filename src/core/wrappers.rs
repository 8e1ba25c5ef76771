//! Conversions between morpheus types and `faer` dense matrices.
//!
//! `faer` stores column-major while [`Matrix`] is row-major, so every
//! conversion copies entry by entry through `(i, j)` indexing.

use faer::Mat;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::vector::Vector;

impl TryFrom<&Mat<f64>> for Matrix {
    type Error = LinalgError;

    /// Copy a `faer` matrix. Fails on an empty (0-row or 0-column) input.
    fn try_from(a: &Mat<f64>) -> Result<Self, Self::Error> {
        let mut m = Matrix::try_new(a.nrows(), a.ncols())?;
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                m[(i, j)] = a[(i, j)];
            }
        }
        Ok(m)
    }
}

impl Matrix {
    /// Copy into a `faer` matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)])
    }
}

impl Vector {
    /// Copy into a single-column `faer` matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.num_elements(), 1, |i, _| self[i])
    }
}
