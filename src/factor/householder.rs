//! Householder QR factorization and implicit reflector application

use crate::error::LinAlgError;
use crate::matrix::Matrix;
use crate::norms::norm_2;
use crate::scalar::Scalar;
use crate::vector::Vector;

use super::DEFAULT_PIVOT_TOL;

/// Result of a Householder QR factorization of an m×n matrix, m ≥ n.
///
/// `r` is the transformed matrix, upper-triangular in its first n rows;
/// `v` stores one unit Householder reflector per factored column k in
/// column k, zero above row k. Q is never materialized here — apply it
/// with [`implicit_qx`]/[`implicit_qtb`], or reconstruct it with
/// [`explicit_q`].
#[derive(Debug, Clone)]
pub struct QrFactors<T: Scalar> {
    pub r: Matrix<T>,
    pub v: Matrix<T>,
}

/// Factor an m×n matrix (m ≥ n) by Householder triangularization.
///
/// A trailing subcolumn with vanishing norm leaves no direction to
/// reflect along and signals `LinAlgError::Factorization`.
pub fn householder_qr<T: Scalar>(a: &Matrix<T>) -> Result<QrFactors<T>, LinAlgError> {
    let m = a.nrows();
    let n = a.ncols();
    if m < n {
        return Err(LinAlgError::Dimension(format!(
            "Householder QR requires m >= n, got {m}x{n}"
        )));
    }

    let tol = <T as From<f64>>::from(DEFAULT_PIVOT_TOL);
    let two = <T as From<f64>>::from(2.0);
    let mut r = a.clone();
    let mut v = Matrix::zeros(m, n);

    for k in 0..n {
        let mut w = Vector::from_fn(m - k, |i| r[[k + i, k]]);
        let norm = norm_2(&w);
        if norm < tol {
            return Err(LinAlgError::Factorization(format!(
                "trailing subcolumn {k} has vanishing norm {norm}"
            )));
        }
        // Grow the leading entry away from zero so the reflector never
        // suffers catastrophic cancellation.
        let value = if w[0] < T::zero() { -norm } else { norm };
        w[0] += value;
        let wnorm = norm_2(&w);
        w = w.scale(T::one() / wnorm);

        // Apply I - 2wwᵗ to the trailing submatrix, one column at a time.
        for j in k..n {
            let mut dot = T::zero();
            for i in 0..(m - k) {
                dot += w[i] * r[[k + i, j]];
            }
            let coeff = two * dot;
            for i in 0..(m - k) {
                let upd = r[[k + i, j]] - coeff * w[i];
                r[[k + i, j]] = upd;
            }
        }

        for i in 0..(m - k) {
            v[[k + i, k]] = w[i];
        }
    }

    Ok(QrFactors { r, v })
}

/// Apply Q to `x` in place without forming Q, processing the reflector
/// columns from last to first.
pub fn implicit_qx<T: Scalar>(v: &Matrix<T>, x: &mut Vector<T>) -> Result<(), LinAlgError> {
    let m = v.nrows();
    let n = v.ncols();
    if x.len() != m {
        return Err(LinAlgError::Dimension(format!(
            "vector of length {} incompatible with {}x{} reflector matrix",
            x.len(),
            m,
            n
        )));
    }
    let two = <T as From<f64>>::from(2.0);
    for k in (0..n).rev() {
        let mut dot = T::zero();
        for i in k..m {
            dot += v[[i, k]] * x[i];
        }
        let coeff = two * dot;
        for i in k..m {
            x[i] = x[i] - coeff * v[[i, k]];
        }
    }
    Ok(())
}

/// Apply Qᵗ to `b` in place without forming Q, processing the reflector
/// columns from first to last.
pub fn implicit_qtb<T: Scalar>(v: &Matrix<T>, b: &mut Vector<T>) -> Result<(), LinAlgError> {
    let m = v.nrows();
    let n = v.ncols();
    if b.len() != m {
        return Err(LinAlgError::Dimension(format!(
            "vector of length {} incompatible with {}x{} reflector matrix",
            b.len(),
            m,
            n
        )));
    }
    let two = <T as From<f64>>::from(2.0);
    for k in 0..n {
        let mut dot = T::zero();
        for i in k..m {
            dot += v[[i, k]] * b[i];
        }
        let coeff = two * dot;
        for i in k..m {
            b[i] = b[i] - coeff * v[[i, k]];
        }
    }
    Ok(())
}

/// Materialize Q by applying it to each standard basis vector in turn:
/// n applications of O(mn) each, O(mn²) total.
pub fn explicit_q<T: Scalar>(v: &Matrix<T>) -> Result<Matrix<T>, LinAlgError> {
    let m = v.nrows();
    let n = v.ncols();
    let mut q = Matrix::zeros(m, n);
    for j in 0..n {
        let mut e = Vector::zeros(m);
        e[j] = T::one();
        implicit_qx(v, &mut e)?;
        q.set_col(j, &e)?;
    }
    Ok(q)
}

/// Reduce a square matrix to upper-Hessenberg form H = QᵗAQ.
///
/// Returns H and a reflector matrix laid out like the QR one (column k
/// holds the step-k reflector, zero through row k), so
/// [`implicit_qx`]/[`explicit_q`] recover Q. A symmetric input reduces
/// to tridiagonal form. Sub-tolerance subcolumns are already reduced and
/// are skipped rather than reflected.
pub fn hessenberg<T: Scalar>(a: &Matrix<T>) -> Result<(Matrix<T>, Matrix<T>), LinAlgError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(LinAlgError::Dimension(format!(
            "Hessenberg reduction requires a square matrix, got {}x{}",
            n,
            a.ncols()
        )));
    }

    let tol = <T as From<f64>>::from(DEFAULT_PIVOT_TOL);
    let two = <T as From<f64>>::from(2.0);
    let mut h = a.clone();
    let mut v = Matrix::zeros(n, n);

    for k in 0..n.saturating_sub(2) {
        let len = n - k - 1;
        let mut w = Vector::from_fn(len, |i| h[[k + 1 + i, k]]);
        let norm = norm_2(&w);
        if norm < tol {
            continue;
        }
        let value = if w[0] < T::zero() { -norm } else { norm };
        w[0] += value;
        let wnorm = norm_2(&w);
        w = w.scale(T::one() / wnorm);

        // Similarity transform: reflect from the left on rows k+1..,
        // then from the right on columns k+1.. .
        for j in k..n {
            let mut dot = T::zero();
            for i in 0..len {
                dot += w[i] * h[[k + 1 + i, j]];
            }
            let coeff = two * dot;
            for i in 0..len {
                let upd = h[[k + 1 + i, j]] - coeff * w[i];
                h[[k + 1 + i, j]] = upd;
            }
        }
        for i in 0..n {
            let mut dot = T::zero();
            for j in 0..len {
                dot += w[j] * h[[i, k + 1 + j]];
            }
            let coeff = two * dot;
            for j in 0..len {
                let upd = h[[i, k + 1 + j]] - coeff * w[j];
                h[[i, k + 1 + j]] = upd;
            }
        }

        for i in 0..len {
            v[[k + 1 + i, k]] = w[i];
        }
    }

    Ok((h, v))
}
