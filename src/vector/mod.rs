//! Vector module: the dense, fixed-length vector type.

pub mod dense;
pub use dense::Vector;
