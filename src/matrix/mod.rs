//! Matrix module: the dense matrix type and its structural properties.

pub mod dense;
pub use dense::Matrix;
pub mod properties;
pub use properties::MatrixProperties;
