//! Core linear-algebra traits for morpheus.

use crate::error::LinalgError;

/// Output-parameter product: y ← A x.
///
/// Implemented by [`Matrix`](crate::Matrix) for both vector and matrix
/// operands. `y` must already exist with the right shape; it is overwritten,
/// never reallocated.
pub trait Multiply<X> {
    /// Compute y = A · x, or report which dimension does not line up.
    ///
    /// `y` is left untouched when an error is returned.
    fn try_multiply(&self, x: &X, y: &mut X) -> Result<(), LinalgError>;

    /// Compute y = A · x.
    ///
    /// # Panics
    /// Panics if the operand dimensions are inconsistent.
    #[track_caller]
    fn multiply(&self, x: &X, y: &mut X) {
        if let Err(e) = self.try_multiply(x, y) {
            crate::error::fatal(e);
        }
    }
}

/// Row/column counts of a dense operand (a vector is a single column).
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}
