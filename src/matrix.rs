//! Owned dense matrix with contiguous row-major storage

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Range, Sub};

use crate::error::LinAlgError;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Owned, resizable r×c matrix of floating-point values.
///
/// Entries live in a single contiguous row-major buffer indexed by
/// `row * cols + col`. Cloning performs a full deep copy; zero rows or
/// columns imply an empty buffer. Row and column extraction return
/// copies, never views, so mutating the source afterwards cannot
/// invalidate a previously extracted vector.
///
/// Addition and subtraction follow the same fail-soft truncation policy
/// as `Vector`; multiplicative shape mismatches are hard errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Zero-filled m×n matrix.
    pub fn zeros(m: usize, n: usize) -> Self {
        Matrix {
            rows: m,
            cols: n,
            data: vec![T::zero(); m * n],
        }
    }

    /// m×n matrix with every entry set to `a`.
    pub fn from_elem(m: usize, n: usize, a: T) -> Self {
        Matrix {
            rows: m,
            cols: n,
            data: vec![a; m * n],
        }
    }

    /// m×n matrix with entry (i, j) set to `f(i, j)`.
    pub fn from_fn(m: usize, n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(m * n);
        for i in 0..m {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Matrix { rows: m, cols: n, data }
    }

    /// Matrix of `m` row copies of the given vector.
    pub fn from_row_vector(m: usize, v: &Vector<T>) -> Self {
        Matrix::from_fn(m, v.len(), |_, j| v[j])
    }

    /// n×n identity.
    pub fn identity(n: usize) -> Self {
        Matrix::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Resize to m×n, discarding the previous contents (zero fill).
    pub fn resize(&mut self, m: usize, n: usize) {
        self.rows = m;
        self.cols = n;
        self.data.clear();
        self.data.resize(m * n, T::zero());
    }

    /// Resize to m×n and set every entry to `a`.
    pub fn assign(&mut self, m: usize, n: usize, a: T) {
        self.rows = m;
        self.cols = n;
        self.data.clear();
        self.data.resize(m * n, a);
    }

    /// Entry (i, j) by value.
    pub fn get(&self, i: usize, j: usize) -> T {
        self[[i, j]]
    }

    /// Row `i` as a raw element slice.
    pub fn row(&self, i: usize) -> &[T] {
        debug_assert!(i < self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy of row `i`.
    pub fn row_as_vector(&self, i: usize) -> Vector<T> {
        Vector::from_slice(self.row(i))
    }

    /// Copy of column `j`.
    pub fn col_as_vector(&self, j: usize) -> Vector<T> {
        debug_assert!(j < self.cols);
        Vector::from_fn(self.rows, |i| self[[i, j]])
    }

    /// Replace row `i` with `v`. The length must match exactly; on
    /// mismatch the matrix is left untouched.
    pub fn set_row(&mut self, i: usize, v: &Vector<T>) -> Result<(), LinAlgError> {
        if v.len() != self.cols {
            return Err(LinAlgError::Dimension(format!(
                "row of length {} cannot replace a row of a {}x{} matrix",
                v.len(),
                self.rows,
                self.cols
            )));
        }
        for j in 0..self.cols {
            self[[i, j]] = v[j];
        }
        Ok(())
    }

    /// Replace column `j` with `v`. The length must match exactly; on
    /// mismatch the matrix is left untouched.
    pub fn set_col(&mut self, j: usize, v: &Vector<T>) -> Result<(), LinAlgError> {
        if v.len() != self.rows {
            return Err(LinAlgError::Dimension(format!(
                "column of length {} cannot replace a column of a {}x{} matrix",
                v.len(),
                self.rows,
                self.cols
            )));
        }
        for i in 0..self.rows {
            self[[i, j]] = v[i];
        }
        Ok(())
    }

    /// Swap rows `i` and `j` in full.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.swap_rows_in(i, j, 0..self.cols);
    }

    /// Swap rows `i` and `j` over the given column range only. Pivoting
    /// needs this: at step k only the untouched part of each row moves.
    pub fn swap_rows_in(&mut self, i: usize, j: usize, cols: Range<usize>) {
        debug_assert!(i < self.rows && j < self.rows && cols.end <= self.cols);
        if i == j {
            return;
        }
        for c in cols {
            self.data.swap(i * self.cols + c, j * self.cols + c);
        }
    }

    /// Remove row `i`, shrinking the matrix by one row.
    pub fn remove_row(&mut self, i: usize) {
        debug_assert!(i < self.rows);
        self.data.drain(i * self.cols..(i + 1) * self.cols);
        self.rows -= 1;
    }

    /// Fresh transposed matrix.
    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.cols, self.rows, |i, j| self[[j, i]])
    }

    /// Fresh matrix scaled by `s`.
    pub fn scale(&self, s: T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x * s).collect(),
        }
    }

    /// Matrix product `self * other`. The inner dimensions must agree.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, LinAlgError> {
        if self.cols != other.rows {
            return Err(LinAlgError::Dimension(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let aik = self[[i, k]];
                for j in 0..other.cols {
                    out[[i, j]] += aik * other[[k, j]];
                }
            }
        }
        Ok(out)
    }

    /// Matrix–vector product `self * v`.
    pub fn matvec(&self, v: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
        if self.cols != v.len() {
            return Err(LinAlgError::Dimension(format!(
                "cannot multiply {}x{} by a vector of length {}",
                self.rows,
                self.cols,
                v.len()
            )));
        }
        let mut out = Vector::zeros(self.rows);
        for i in 0..self.rows {
            let mut sum = T::zero();
            for j in 0..self.cols {
                sum += self[[i, j]] * v[j];
            }
            out[i] = sum;
        }
        Ok(out)
    }

    /// Row-vector–matrix product `vᵗ * self`.
    pub fn vecmat(&self, v: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
        if self.rows != v.len() {
            return Err(LinAlgError::Dimension(format!(
                "cannot multiply a vector of length {} by {}x{}",
                v.len(),
                self.rows,
                self.cols
            )));
        }
        let mut out = Vector::zeros(self.cols);
        for j in 0..self.cols {
            let mut sum = T::zero();
            for i in 0..self.rows {
                sum += v[i] * self[[i, j]];
            }
            out[j] = sum;
        }
        Ok(out)
    }

    fn add_impl(&self, other: &Matrix<T>, subtract: bool) -> Matrix<T> {
        let m = self.rows.min(other.rows);
        let n = self.cols.min(other.cols);
        if (self.rows, self.cols) != (other.rows, other.cols) {
            log::warn!(
                "matrix {}: operand shapes {}x{} and {}x{} differ, truncating result to {m}x{n}",
                if subtract { "subtract" } else { "add" },
                self.rows,
                self.cols,
                other.rows,
                other.cols
            );
        }
        Matrix::from_fn(m, n, |i, j| {
            if subtract {
                self[[i, j]] - other[[i, j]]
            } else {
                self[[i, j]] + other[[i, j]]
            }
        })
    }
}

impl<T: Scalar> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, [i, j]: [usize; 2]) -> &T {
        debug_assert!(i < self.rows && j < self.cols);
        &self.data[i * self.cols + j]
    }
}

impl<T: Scalar> IndexMut<[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, [i, j]: [usize; 2]) -> &mut T {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.data[i * self.cols + j]
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| -x).collect(),
        }
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, other: &Matrix<T>) -> Matrix<T> {
        self.add_impl(other, false)
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, other: Matrix<T>) -> Matrix<T> {
        self.add_impl(&other, false)
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, other: &Matrix<T>) -> Matrix<T> {
        self.add_impl(other, true)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, other: Matrix<T>) -> Matrix<T> {
        self.add_impl(&other, true)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, s: T) -> Matrix<T> {
        self.scale(s)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, s: T) -> Matrix<T> {
        self.scale(s)
    }
}

impl Mul<&Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, m: &Matrix<f64>) -> Matrix<f64> {
        m.scale(self)
    }
}

impl Mul<Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, m: Matrix<f64>) -> Matrix<f64> {
        m.scale(self)
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", self[[i, j]])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
