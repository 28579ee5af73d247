//! Modified Gram-Schmidt QR factorization

use crate::error::LinAlgError;
use crate::matrix::Matrix;
use crate::norms::{inner, norm_2};
use crate::scalar::Scalar;

use super::DEFAULT_PIVOT_TOL;

/// Orthonormalize the columns of a square, full-rank matrix, returning
/// (Q, R) with Q·R = A, Q's columns orthonormal, and R upper-triangular
/// with strictly positive diagonal (each diagonal entry is a column
/// norm). A column whose residual norm falls below the tolerance makes
/// the matrix effectively rank-deficient and signals
/// `LinAlgError::Factorization`.
pub fn gram_schmidt_qr<T: Scalar>(
    a: &Matrix<T>,
) -> Result<(Matrix<T>, Matrix<T>), LinAlgError> {
    let dim = a.nrows();
    if dim != a.ncols() {
        return Err(LinAlgError::Dimension(format!(
            "Gram-Schmidt QR requires a square matrix, got {}x{}",
            dim,
            a.ncols()
        )));
    }

    let tol = <T as From<f64>>::from(DEFAULT_PIVOT_TOL);
    let mut q_cols = Vec::with_capacity(dim);
    let mut r = Matrix::zeros(dim, dim);

    for j in 0..dim {
        let mut y = a.col_as_vector(j);
        // Subtract each established direction in turn, refreshing the
        // projection from the partially reduced vector.
        for (i, qi) in q_cols.iter().enumerate() {
            let proj = inner(qi, &y)?;
            r[[i, j]] = proj;
            y = &y - &qi.scale(proj);
        }
        let norm = norm_2(&y);
        if norm < tol {
            return Err(LinAlgError::Factorization(format!(
                "column {j} is linearly dependent on its predecessors (residual norm {norm})"
            )));
        }
        r[[j, j]] = norm;
        q_cols.push(y.scale(T::one() / norm));
    }

    let mut q = Matrix::zeros(dim, dim);
    for (j, col) in q_cols.iter().enumerate() {
        q.set_col(j, col)?;
    }
    Ok((q, r))
}
