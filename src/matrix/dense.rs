//! Dense, fixed-size matrix stored row-major in one owned buffer.
//!
//! Entry `(r, c)` lives at `r * ncols + c`. Element access is bounds-checked:
//! an out-of-range subscript is a precondition violation and panics.
//!
//! Products follow the output-parameter convention of [`Multiply`]: the caller
//! owns and sizes `y`, the matrix only writes into it.

use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::core::traits::{MatShape, Multiply};
use crate::error::{LinalgError, check_dim, fatal};
use crate::vector::Vector;

/// Dense `nrows × ncols` matrix of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Allocate a zero-filled `nrows × ncols` matrix.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    #[track_caller]
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self::try_new(nrows, ncols).unwrap_or_else(|e| fatal(e))
    }

    pub fn try_new(nrows: usize, ncols: usize) -> Result<Self, LinalgError> {
        if nrows == 0 || ncols == 0 {
            return Err(LinalgError::InvalidDimension { what: "matrix", rows: nrows, cols: ncols });
        }
        Ok(Self { data: vec![f64::zero(); nrows * ncols], nrows, ncols })
    }

    /// The `n × n` identity.
    #[track_caller]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.data[i * n + i] = f64::one();
        }
        m
    }

    /// Build from row-major `data`.
    ///
    /// # Panics
    /// Panics if a dimension is zero or `data.len() != nrows * ncols`.
    #[track_caller]
    pub fn from_row_slice(nrows: usize, ncols: usize, data: &[f64]) -> Self {
        Self::try_from_row_slice(nrows, ncols, data).unwrap_or_else(|e| fatal(e))
    }

    pub fn try_from_row_slice(nrows: usize, ncols: usize, data: &[f64]) -> Result<Self, LinalgError> {
        let mut m = Self::try_new(nrows, ncols)?;
        if data.len() != m.data.len() {
            return Err(LinalgError::ShapeMismatch { rows: nrows, cols: ncols, len: data.len() });
        }
        m.data.copy_from_slice(data);
        Ok(m)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `nrows * ncols`.
    pub fn num_entries(&self) -> usize {
        self.nrows * self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.ncols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row < self.nrows && col < self.ncols {
            Some(&self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Row-major view of every entry.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Entries of row `r`.
    ///
    /// # Panics
    /// Panics if `r >= nrows`.
    #[track_caller]
    pub fn row(&self, r: usize) -> &[f64] {
        if r >= self.nrows {
            fatal(LinalgError::MatrixIndexOutOfBounds { row: r, col: 0, nrows: self.nrows, ncols: self.ncols });
        }
        let start = self.offset(r, 0);
        &self.data[start..start + self.ncols]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.ncols)
    }

    /// Exact test `a[r][c] == a[c][r]`; a non-square matrix is never symmetric.
    ///
    /// Recomputed on every call, O(n²).
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.nrows {
            for c in 0..self.ncols {
                if self.data[self.offset(r, c)] != self.data[self.offset(c, r)] {
                    return false;
                }
            }
        }
        true
    }

    /// True iff the matrix is square and every entry with `c > r` is exactly
    /// zero.
    pub fn is_upper_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.nrows {
            for c in (r + 1)..self.ncols {
                if self.data[self.offset(r, c)] != f64::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Same shape and `|self[r][c] - other[r][c]| <= tol` everywhere.
    pub fn approx_equal(&self, other: &Matrix, tol: f64) -> bool {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return false;
        }
        !self
            .data
            .iter()
            .zip(&other.data)
            .any(|(&a, &b)| (a - b).abs() > tol)
    }

    /// Largest signed column sum, seeded with `0.0`.
    pub fn norm1(&self) -> f64 {
        let mut max_col_sum = f64::zero();
        for c in 0..self.ncols {
            let mut col_sum = f64::zero();
            for r in 0..self.nrows {
                col_sum = col_sum + self.data[self.offset(r, c)];
            }
            if col_sum > max_col_sum {
                max_col_sum = col_sum;
            }
        }
        max_col_sum
    }

    /// Largest signed row sum, seeded with `0.0`.
    pub fn norm_inf(&self) -> f64 {
        self.rows()
            .map(|row| row.iter().fold(f64::zero(), |acc, &x| acc + x))
            .fold(f64::zero(), |max, s| if s > max { s } else { max })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        if row >= self.nrows || col >= self.ncols {
            fatal(LinalgError::MatrixIndexOutOfBounds { row, col, nrows: self.nrows, ncols: self.ncols });
        }
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        if row >= self.nrows || col >= self.ncols {
            fatal(LinalgError::MatrixIndexOutOfBounds { row, col, nrows: self.nrows, ncols: self.ncols });
        }
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

/// y ← A x for a dense vector `x`.
impl Multiply<Vector> for Matrix {
    fn try_multiply(&self, x: &Vector, y: &mut Vector) -> Result<(), LinalgError> {
        check_dim("Matrix::multiply (x length vs columns)", self.ncols, x.num_elements())?;
        check_dim("Matrix::multiply (y length vs rows)", self.nrows, y.num_elements())?;
        log::trace!("matvec {}x{} * {}", self.nrows, self.ncols, x.num_elements());
        let x = x.as_slice();
        for (yi, row) in y.iter_mut().zip(self.rows()) {
            *yi = f64::zero();
            for (&a, &xj) in row.iter().zip(x) {
                *yi = *yi + a * xj;
            }
        }
        Ok(())
    }
}

/// Y ← A X, the plain triple loop.
impl Multiply<Matrix> for Matrix {
    fn try_multiply(&self, x: &Matrix, y: &mut Matrix) -> Result<(), LinalgError> {
        check_dim("Matrix::multiply (rows of Y)", self.nrows, y.nrows)?;
        check_dim("Matrix::multiply (rows of X)", self.ncols, x.nrows)?;
        check_dim("Matrix::multiply (columns of Y)", x.ncols, y.ncols)?;
        log::trace!("matmat {}x{} * {}x{}", self.nrows, self.ncols, x.nrows, x.ncols);
        for r in 0..y.nrows {
            for c in 0..y.ncols {
                let mut acc = f64::zero();
                for k in 0..self.ncols {
                    acc = acc + self.data[self.offset(r, k)] * x.data[x.offset(k, c)];
                }
                let offset = y.offset(r, c);
                y.data[offset] = acc;
            }
        }
        Ok(())
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}
