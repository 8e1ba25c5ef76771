//! Shared traits and `faer` interop.

pub mod traits;
pub mod wrappers;

pub use traits::{MatShape, Multiply};
