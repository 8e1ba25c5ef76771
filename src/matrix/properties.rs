use bitflags::bitflags;

use crate::matrix::Matrix;

bitflags! {
    /// Structural properties of a dense matrix, as reported by
    /// [`Matrix::properties`]. Nothing is cached: each call rescans the entries.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct MatrixProperties: u32 {
        const SQUARE           = 0b0001;
        const SYMMETRIC        = 0b0010;
        const UPPER_TRIANGULAR = 0b0100;
        const DIAGONAL         = Self::SYMMETRIC.bits() | Self::UPPER_TRIANGULAR.bits();
    }
}

impl Matrix {
    pub fn properties(&self) -> MatrixProperties {
        let mut props = MatrixProperties::empty();
        if !self.is_square() {
            return props;
        }
        props |= MatrixProperties::SQUARE;
        if self.is_symmetric() {
            props |= MatrixProperties::SYMMETRIC;
        }
        if self.is_upper_triangular() {
            props |= MatrixProperties::UPPER_TRIANGULAR;
        }
        props
    }
}
