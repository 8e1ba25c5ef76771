//! morpheus: dense vector and matrix primitives
//!
//! A fixed-length [`Vector`] and a fixed-size, row-major [`Matrix`] of `f64`,
//! with scaling, addition, dot products, matrix-vector and matrix-matrix
//! products, structural queries and norms. Products and sums write into a
//! caller-owned output; a violated precondition (zero size, mismatched
//! operands, out-of-range subscript) panics, and the `try_*` variants return
//! [`LinalgError`] instead.
//!
//! ```
//! use morpheus::{Matrix, Multiply, Vector};
//!
//! let a = Matrix::identity(3);
//! let mut x = Vector::new(3);
//! x.set_value(2.0);
//! let mut y = Vector::new(3);
//! a.multiply(&x, &mut y);
//! assert_eq!(y.norm1(), 6.0);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use self::core::{MatShape, Multiply};
pub use config::PrintOptions;
pub use error::LinalgError;
pub use matrix::{Matrix, MatrixProperties};
pub use utils::{Dump, Report};
pub use vector::Vector;
