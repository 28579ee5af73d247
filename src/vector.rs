//! Owned dense vector

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::scalar::Scalar;

/// Owned, resizable vector of floating-point values.
///
/// Cloning performs a full deep copy; a zero-length vector owns no
/// allocation. Arithmetic operators allocate fresh results; the only
/// in-place mutations are indexed writes and the shaping functions.
///
/// Addition and subtraction of vectors with differing lengths are
/// fail-soft: the result is computed over the smaller length and a
/// shape-mismatch warning is logged, rather than failing the operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T = f64> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Zero-filled vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Vector {
            data: vec![T::zero(); n],
        }
    }

    /// Vector of length `n` with every entry set to `a`.
    pub fn from_elem(n: usize, a: T) -> Self {
        Vector { data: vec![a; n] }
    }

    /// Copy of the given slice.
    pub fn from_slice(a: &[T]) -> Self {
        Vector { data: a.to_vec() }
    }

    /// Vector of length `n` with entry `i` set to `f(i)`.
    pub fn from_fn(n: usize, f: impl FnMut(usize) -> T) -> Self {
        Vector {
            data: (0..n).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Resize to length `n`, discarding the previous contents (zero fill).
    pub fn resize(&mut self, n: usize) {
        self.data.clear();
        self.data.resize(n, T::zero());
    }

    /// Resize to length `n`, preserving the overlapping prefix; any newly
    /// added tail is zero-filled.
    pub fn resize_copy(&mut self, n: usize) {
        self.data.resize(n, T::zero());
    }

    /// Resize to length `n` and set every entry to `a`.
    pub fn assign(&mut self, n: usize, a: T) {
        self.data.clear();
        self.data.resize(n, a);
    }

    /// Fresh vector scaled by `s`.
    pub fn scale(&self, s: T) -> Self {
        Vector {
            data: self.data.iter().map(|&x| x * s).collect(),
        }
    }

    /// Sort the entries ascending, in place.
    pub fn sort(&mut self) {
        self.data
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    fn add_impl(&self, other: &Vector<T>) -> Vector<T> {
        let n = self.truncated_len(other, "add");
        Vector::from_fn(n, |i| self.data[i] + other.data[i])
    }

    fn sub_impl(&self, other: &Vector<T>) -> Vector<T> {
        let n = self.truncated_len(other, "subtract");
        Vector::from_fn(n, |i| self.data[i] - other.data[i])
    }

    // Fail-soft sizing rule: the smaller operand length governs.
    fn truncated_len(&self, other: &Vector<T>, op: &str) -> usize {
        let n = self.len().min(other.len());
        if self.len() != other.len() {
            log::warn!(
                "vector {op}: operand lengths {} and {} differ, truncating result to {n}",
                self.len(),
                other.len()
            );
        }
        n
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        Vector {
            data: self.data.iter().map(|&x| -x).collect(),
        }
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        -&self
    }
}

impl<T: Scalar> Add for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, other: &Vector<T>) -> Vector<T> {
        self.add_impl(other)
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Vector<T>;

    fn add(self, other: Vector<T>) -> Vector<T> {
        self.add_impl(&other)
    }
}

impl<T: Scalar> Sub for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, other: &Vector<T>) -> Vector<T> {
        self.sub_impl(other)
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Vector<T>;

    fn sub(self, other: Vector<T>) -> Vector<T> {
        self.sub_impl(&other)
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, s: T) -> Vector<T> {
        self.scale(s)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, s: T) -> Vector<T> {
        self.scale(s)
    }
}

impl Mul<&Vector<f64>> for f64 {
    type Output = Vector<f64>;

    fn mul(self, v: &Vector<f64>) -> Vector<f64> {
        v.scale(self)
    }
}

impl Mul<Vector<f64>> for f64 {
    type Output = Vector<f64>;

    fn mul(self, v: Vector<f64>) -> Vector<f64> {
        v.scale(self)
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn construction_and_indexing() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);

        let filled = Vector::from_elem(2, 4.0);
        assert_eq!(filled.as_slice(), &[4.0, 4.0]);

        let z: Vector = Vector::zeros(0);
        assert!(z.is_empty());
    }

    #[test]
    fn resize_discards_resize_copy_preserves() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        v.resize_copy(5);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 0.0, 0.0]);
        v.resize_copy(2);
        assert_eq!(v.as_slice(), &[1.0, 2.0]);

        v.resize(3);
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);

        v.assign(2, 7.0);
        assert_eq!(v.as_slice(), &[7.0, 7.0]);
    }

    #[test]
    fn mismatched_add_truncates_to_smaller() {
        let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let w = Vector::from_slice(&[1.0, 1.0, 1.0, 1.0, 1.0]);
        let sum = &u + &w;
        assert_eq!(sum.as_slice(), &[2.0, 3.0, 4.0]);

        // Order must not matter for the sizing rule.
        let sum = &w + &u;
        assert_eq!(sum.len(), 3);
    }

    #[test]
    fn scalar_multiply_both_sides() {
        let v = Vector::from_slice(&[1.0, -2.0]);
        assert_eq!((&v * 2.0).as_slice(), &[2.0, -4.0]);
        assert_eq!((2.0 * &v).as_slice(), &[2.0, -4.0]);
    }

    #[test]
    fn negate_and_subtract() {
        let u = Vector::from_slice(&[3.0, 1.0]);
        let w = Vector::from_slice(&[1.0, 4.0]);
        let d = &u - &w;
        assert_abs_diff_eq!(d[0], 2.0);
        assert_abs_diff_eq!(d[1], -3.0);
        assert_eq!((-&u).as_slice(), &[-3.0, -1.0]);
    }

    #[test]
    fn sort_ascending() {
        let mut v = Vector::from_slice(&[3.0, -5.0, 1.0]);
        v.sort();
        assert_eq!(v.as_slice(), &[-5.0, 1.0, 3.0]);
    }

    #[test]
    fn display() {
        let v = Vector::from_slice(&[1.0, 2.5]);
        assert_eq!(v.to_string(), "[1, 2.5]");
    }
}
