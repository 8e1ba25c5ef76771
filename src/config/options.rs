//! Formatting options for the text dumps produced by [`Report`](crate::Report).
//!
//! The defaults print every entry with Rust's shortest round-trip formatting
//! and separate matrix columns with a single space.

/// How entries are rendered when a vector or matrix is dumped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Digits after the decimal point; `None` for full precision.
    pub precision: Option<usize>,

    /// Text placed after each matrix entry on a row.
    pub separator: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self { precision: None, separator: " ".to_string() }
    }
}

impl PrintOptions {
    pub fn with_precision(precision: usize) -> Self {
        Self { precision: Some(precision), ..Self::default() }
    }
}
