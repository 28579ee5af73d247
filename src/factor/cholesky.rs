//! Cholesky factorization of symmetric positive-definite matrices

use crate::error::LinAlgError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Factor a symmetric positive-definite matrix as A = RᵗR with R upper
/// triangular, column by column. Each diagonal pivot must be strictly
/// positive; otherwise the matrix is not positive definite and the
/// factorization aborts with `LinAlgError::NotPositiveDefinite`.
pub fn cholesky<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>, LinAlgError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(LinAlgError::Dimension(format!(
            "Cholesky factorization requires a square matrix, got {}x{}",
            n,
            a.ncols()
        )));
    }

    let mut r = Matrix::zeros(n, n);
    for j in 0..n {
        let mut d = a[[j, j]];
        for k in 0..j {
            d = d - r[[k, j]] * r[[k, j]];
        }
        if d <= T::zero() {
            return Err(LinAlgError::NotPositiveDefinite(format!(
                "pivot {d} at column {j} is not strictly positive"
            )));
        }
        let rjj = d.sqrt();
        r[[j, j]] = rjj;

        for i in (j + 1)..n {
            let mut s = a[[j, i]];
            for k in 0..j {
                s = s - r[[k, j]] * r[[k, i]];
            }
            r[[j, i]] = s / rjj;
        }
    }
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reconstructs_spd_input() {
        // Tridiagonal SPD matrix, eigenvalues 3 and 3 ± 2√2.
        let a = Matrix::from_fn(3, 3, |i, j| {
            [[3.0, 2.0, 0.0], [2.0, 3.0, 2.0], [0.0, 2.0, 3.0]][i][j]
        });
        let r = cholesky(&a).unwrap();

        for i in 0..3 {
            for j in 0..i {
                assert_abs_diff_eq!(r[[i, j]], 0.0);
            }
            assert!(r[[i, i]] > 0.0);
        }

        let back = r.transpose().matmul(&r).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(back[[i, j]], a[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn indefinite_matrix_is_rejected() {
        let a = Matrix::from_fn(2, 2, |i, j| [[1.0, 3.0], [3.0, 1.0]][i][j]);
        assert!(matches!(
            cholesky(&a),
            Err(LinAlgError::NotPositiveDefinite(_))
        ));
    }
}
