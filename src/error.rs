use thiserror::Error;

// Unified error type for morpheus

/// A violated precondition of a vector or matrix operation.
///
/// The panicking API (`Vector::add`, `Matrix::multiply`, indexing, ...) treats
/// every variant as fatal. The `try_*` variants hand it back instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("invalid {what} dimensions {rows}x{cols}: sizes must be positive")]
    InvalidDimension {
        what: &'static str,
        rows: usize,
        cols: usize,
    },
    #[error("dimension mismatch in {op}: expected {expected}, found {found}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("index ({row}, {col}) out of range for {nrows}x{ncols} matrix")]
    MatrixIndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
}

/// Abort the current operation on a precondition violation.
#[track_caller]
pub(crate) fn fatal(err: LinalgError) -> ! {
    log::error!("precondition violation: {err}");
    panic!("{err}")
}

/// Check `expected == found`, naming the operation in the error.
pub(crate) fn check_dim(op: &'static str, expected: usize, found: usize) -> Result<(), LinalgError> {
    if expected == found {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch { op, expected, found })
    }
}
