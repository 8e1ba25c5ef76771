//! Dense, fixed-length vector.
//!
//! A `Vector` owns a single contiguous buffer whose length is fixed at
//! construction. Arithmetic writes into caller-supplied outputs instead of
//! allocating, and the three norms keep their historical (literal) meaning:
//!
//! | method       | value computed                              |
//! |--------------|---------------------------------------------|
//! | `norm1`      | signed sum of the entries                   |
//! | `norm_inf`   | largest entry, compared against `0.0`       |
//! | `norm2`      | sum of squares (no square root)             |

use std::ops::{AddAssign, Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::Zero;

use crate::core::traits::MatShape;
use crate::error::{LinalgError, check_dim, fatal};

/// Dense vector of `f64` with a length fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Allocate a zero-filled vector with `len` entries.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    #[track_caller]
    pub fn new(len: usize) -> Self {
        Self::try_new(len).unwrap_or_else(|e| fatal(e))
    }

    pub fn try_new(len: usize) -> Result<Self, LinalgError> {
        if len == 0 {
            return Err(LinalgError::InvalidDimension { what: "vector", rows: len, cols: 1 });
        }
        Ok(Self { data: vec![f64::zero(); len] })
    }

    /// Copy `values` into a new vector.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    #[track_caller]
    pub fn from_slice(values: &[f64]) -> Self {
        let mut v = Self::new(values.len());
        v.data.copy_from_slice(values);
        v
    }

    /// Number of entries. Never changes after construction.
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, i: usize) -> Option<&f64> {
        self.data.get(i)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Set every entry to `alpha`.
    pub fn set_value(&mut self, alpha: f64) {
        self.data.fill(alpha);
    }

    /// Set every entry to zero.
    pub fn set_zero(&mut self) {
        self.set_value(f64::zero());
    }

    /// Multiply every entry by `alpha` in place.
    pub fn scale(&mut self, alpha: f64) {
        for x in self.data.iter_mut() {
            *x = alpha * *x;
        }
    }

    /// sum ← self + b.
    ///
    /// `sum` is filled in, not allocated. To accumulate into one of the
    /// operands use `a += &b`.
    ///
    /// # Panics
    /// Panics unless `self`, `b` and `sum` all have the same length.
    #[track_caller]
    pub fn add(&self, b: &Vector, sum: &mut Vector) {
        if let Err(e) = self.try_add(b, sum) {
            fatal(e);
        }
    }

    pub fn try_add(&self, b: &Vector, sum: &mut Vector) -> Result<(), LinalgError> {
        check_dim("Vector::add", self.num_elements(), b.num_elements())?;
        check_dim("Vector::add", self.num_elements(), sum.num_elements())?;
        for ((si, &ai), &bi) in sum.data.iter_mut().zip(&self.data).zip(&b.data) {
            *si = ai + bi;
        }
        Ok(())
    }

    /// Dot product `Σ self[i] * b[i]`.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    #[track_caller]
    pub fn dot(&self, b: &Vector) -> f64 {
        self.try_dot(b).unwrap_or_else(|e| fatal(e))
    }

    pub fn try_dot(&self, b: &Vector) -> Result<f64, LinalgError> {
        check_dim("Vector::dot", self.num_elements(), b.num_elements())?;
        Ok(self
            .data
            .iter()
            .zip(&b.data)
            .fold(f64::zero(), |acc, (&x, &y)| acc + x * y))
    }

    /// Signed sum of the entries.
    ///
    /// This is not the mathematical 1-norm: negative entries reduce the
    /// result instead of contributing their magnitude.
    pub fn norm1(&self) -> f64 {
        self.data.iter().fold(f64::zero(), |acc, &x| acc + x)
    }

    /// Largest entry, seeded with `0.0`; a vector with no positive entry
    /// reports `0.0`.
    pub fn norm_inf(&self) -> f64 {
        self.data
            .iter()
            .fold(f64::zero(), |max, &x| if x > max { x } else { max })
    }

    /// Sum of squares, i.e. the *square* of the Euclidean length.
    ///
    /// Always equal to `self.dot(self)`.
    pub fn norm2(&self) -> f64 {
        self.data.iter().fold(f64::zero(), |acc, &x| acc + x * x)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        let len = self.data.len();
        self.data
            .get(index)
            .unwrap_or_else(|| fatal(LinalgError::IndexOutOfBounds { index, len }))
    }
}

impl IndexMut<usize> for Vector {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .unwrap_or_else(|| fatal(LinalgError::IndexOutOfBounds { index, len }))
    }
}

/// In-place form of [`Vector::add`] where the output aliases `self`.
impl AddAssign<&Vector> for Vector {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Vector) {
        if let Err(e) = check_dim("Vector::add", self.num_elements(), rhs.num_elements()) {
            fatal(e);
        }
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a + b;
        }
    }
}

impl From<Vec<f64>> for Vector {
    /// # Panics
    /// Panics if `values` is empty.
    #[track_caller]
    fn from(values: Vec<f64>) -> Self {
        if values.is_empty() {
            fatal(LinalgError::InvalidDimension { what: "vector", rows: 0, cols: 1 });
        }
        Vector { data: values }
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl MatShape for Vector {
    fn nrows(&self) -> usize {
        self.num_elements()
    }
    fn ncols(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_is_zero_filled() {
        let v = Vector::new(4);
        assert_eq!(v.num_elements(), 4);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(
            Vector::try_new(0),
            Err(LinalgError::InvalidDimension { what: "vector", rows: 0, cols: 1 })
        );
    }

    #[test]
    #[should_panic(expected = "sizes must be positive")]
    fn zero_length_panics() {
        let _ = Vector::new(0);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for vector of length 3")]
    fn index_past_end_panics() {
        let v = Vector::new(3);
        let _value = v[3];
    }

    #[test]
    fn set_value_fills_every_slot() {
        for n in 1..8 {
            let mut v = Vector::new(n);
            v.set_value(2.5);
            assert!(v.iter().all(|&x| x == 2.5));
            v.set_zero();
            assert!(v.iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn scale_multiplies_each_entry() {
        let mut v = Vector::from_slice(&[1.0, -2.0, 3.5]);
        v.scale(-2.0);
        assert_eq!(v.as_slice(), &[-2.0, 4.0, -7.0]);
    }

    #[test]
    fn add_writes_into_output() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[10.0, 20.0, 30.0]);
        let mut sum = Vector::new(3);
        a.add(&b, &mut sum);
        assert_eq!(sum.as_slice(), &[11.0, 22.0, 33.0]);
        // same operand twice
        a.add(&a, &mut sum);
        assert_eq!(sum.as_slice(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn add_assign_matches_add() {
        let a = Vector::from_slice(&[1.0, -4.0]);
        let b = Vector::from_slice(&[0.5, 4.0]);
        let mut expected = Vector::new(2);
        a.add(&b, &mut expected);

        // sum aliases a
        let mut lhs = a.clone();
        lhs += &b;
        assert_eq!(lhs, expected);

        // sum aliases b
        let mut rhs = b.clone();
        rhs += &a;
        assert_eq!(rhs, expected);
    }

    #[test]
    fn add_mismatch_leaves_output_untouched() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let mut sum = Vector::from_slice(&[7.0, 7.0]);
        let err = a.try_add(&b, &mut sum).unwrap_err();
        assert_eq!(err, LinalgError::DimensionMismatch { op: "Vector::add", expected: 2, found: 3 });
        assert_eq!(sum.as_slice(), &[7.0, 7.0]);
    }

    #[test]
    #[should_panic(expected = "Vector::add")]
    fn add_mismatch_panics() {
        let a = Vector::new(2);
        let b = Vector::new(2);
        let mut sum = Vector::new(5);
        a.add(&b, &mut sum);
    }

    #[test]
    fn dot_starts_from_zero() {
        let x = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let y = Vector::from_slice(&[4.0, -5.0, 6.0]);
        assert_abs_diff_eq!(x.dot(&y), 12.0, epsilon = 1e-12);
        assert_eq!(Vector::new(6).dot(&Vector::new(6)), 0.0);
    }

    #[test]
    #[should_panic(expected = "Vector::dot")]
    fn dot_mismatch_panics() {
        let _ = Vector::new(2).dot(&Vector::new(3));
    }

    #[test]
    fn norms_keep_literal_definitions() {
        let v = Vector::from_slice(&[-1.0, 0.0, 0.0]);
        assert_eq!(v.norm1(), -1.0);
        assert_eq!(v.norm_inf(), 0.0);
        assert_eq!(v.norm2(), 1.0);

        let w = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(w.norm1(), 6.0);
        assert_eq!(w.norm_inf(), 3.0);
        assert_eq!(w.norm2(), 14.0);
    }

    #[test]
    fn dot_with_self_equals_norm2() {
        let v = Vector::from_slice(&[0.3, -1.7, 2.25, 1e-3]);
        assert_eq!(v.dot(&v), v.norm2());
    }

    #[test]
    fn shape_is_a_column() {
        let v = Vector::new(7);
        assert_eq!((v.nrows(), v.ncols()), (7, 1));
    }
}
