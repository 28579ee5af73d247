//! Linear system solvers built on the factorizations

use crate::error::LinAlgError;
use crate::factor::cholesky::cholesky;
use crate::factor::householder::{householder_qr, implicit_qtb, QrFactors};
use crate::factor::lu::{implicit_pb, lu_factor, LuFactors};
use crate::factor::DEFAULT_PIVOT_TOL;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Solve the upper-triangular system Rx = y by back substitution, last
/// row upward; O(n²). A diagonal entry below the singularity tolerance
/// signals `LinAlgError::Singular` before the division it would poison.
pub fn backsub<T: Scalar>(r: &Matrix<T>, y: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
    let dim = r.nrows();
    if y.len() != dim || r.ncols() < dim {
        return Err(LinAlgError::Dimension(format!(
            "back substitution of a length-{} vector against a {}x{} matrix",
            y.len(),
            dim,
            r.ncols()
        )));
    }

    let tol = <T as From<f64>>::from(DEFAULT_PIVOT_TOL);
    let mut x = Vector::zeros(dim);
    for k in (0..dim).rev() {
        let diag = r[[k, k]];
        if diag.abs() < tol {
            return Err(LinAlgError::Singular(format!(
                "triangular diagonal entry {diag} at row {k} below tolerance"
            )));
        }
        let mut sum = T::zero();
        for i in (k + 1)..dim {
            sum += x[i] * r[[k, i]];
        }
        x[k] = (y[k] - sum) / diag;
    }
    Ok(x)
}

// Forward substitution against the implicit unit-lower-triangular factor
// stored strictly below the diagonal of a combined LU matrix; in place.
fn forward_sub_unit<T: Scalar>(lu: &Matrix<T>, x: &mut Vector<T>) {
    for i in 1..lu.nrows() {
        let mut sum = T::zero();
        for j in 0..i {
            sum += lu[[i, j]] * x[j];
        }
        x[i] = x[i] - sum;
    }
}

// Forward substitution of Rᵗw = b for upper-triangular R.
fn forward_sub_transposed<T: Scalar>(
    r: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinAlgError> {
    let dim = r.nrows();
    if b.len() != dim {
        return Err(LinAlgError::Dimension(format!(
            "forward substitution of a length-{} vector against a {}x{} matrix",
            b.len(),
            dim,
            r.ncols()
        )));
    }
    let tol = <T as From<f64>>::from(DEFAULT_PIVOT_TOL);
    let mut w = Vector::zeros(dim);
    for i in 0..dim {
        let diag = r[[i, i]];
        if diag.abs() < tol {
            return Err(LinAlgError::Singular(format!(
                "triangular diagonal entry {diag} at row {i} below tolerance"
            )));
        }
        let mut sum = T::zero();
        for j in 0..i {
            sum += r[[j, i]] * w[j];
        }
        w[i] = (b[i] - sum) / diag;
    }
    Ok(w)
}

/// Solve Ax = b for square nonsingular A via Householder QR: factor,
/// apply Qᵗ to b implicitly, back-substitute against R.
pub fn qr_solve<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
    if a.nrows() != a.ncols() {
        return Err(LinAlgError::Dimension(format!(
            "QR solve requires a square matrix, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }
    let f = householder_qr(a)?;
    qr_solve_prefactored(&f, b)
}

/// Solve against a precomputed QR factorization, avoiding the O(mn²)
/// factor step on repeated right-hand sides.
pub fn qr_solve_prefactored<T: Scalar>(
    f: &QrFactors<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinAlgError> {
    let mut x = b.clone();
    implicit_qtb(&f.v, &mut x)?;
    backsub(&f.r, &x)
}

/// Solve the full-rank least-squares problem min ‖Ax − b‖ for
/// over-determined A (m ≥ n): factor, apply Qᵗ to b, truncate R and Qᵗb
/// to the first n rows, back-substitute. m < n signals
/// `LinAlgError::RankDeficient`.
pub fn qr_least_squares<T: Scalar>(
    a: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinAlgError> {
    let m = a.nrows();
    let n = a.ncols();
    if m < n {
        return Err(LinAlgError::RankDeficient(format!(
            "least squares with {m} equations in {n} unknowns"
        )));
    }
    let QrFactors { mut r, v } = householder_qr(a)?;
    let mut x = b.clone();
    implicit_qtb(&v, &mut x)?;
    for i in (n..m).rev() {
        r.remove_row(i);
    }
    x.resize_copy(n);
    backsub(&r, &x)
}

/// Solve Ax = b via LU with partial pivoting: permute b, forward- then
/// back-substitute.
pub fn lu_solve<T: Scalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
    let f = lu_factor(a)?;
    lu_solve_prefactored(&f, b)
}

/// Solve against a precomputed LU factorization.
pub fn lu_solve_prefactored<T: Scalar>(
    f: &LuFactors<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinAlgError> {
    let n = f.lu.nrows();
    if b.len() != n {
        return Err(LinAlgError::Dimension(format!(
            "right-hand side of length {} for a {}x{} factorization",
            b.len(),
            n,
            n
        )));
    }
    let mut x = b.clone();
    implicit_pb(&f.perm, &mut x);
    forward_sub_unit(&f.lu, &mut x);
    // The upper part of the combined matrix is U; back substitution
    // never reads below the diagonal.
    backsub(&f.lu, &x)
}

/// Solve Ax = b for symmetric positive-definite A via Cholesky:
/// Rᵗw = b forward, then Rx = w backward.
pub fn cholesky_solve<T: Scalar>(
    a: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinAlgError> {
    let r = cholesky(a)?;
    let w = forward_sub_transposed(&r, b)?;
    backsub(&r, &w)
}
