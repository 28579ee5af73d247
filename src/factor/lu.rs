//! LU factorization by Gaussian elimination with partial pivoting

use crate::error::LinAlgError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

use super::DEFAULT_PIVOT_TOL;

/// Result of an LU factorization.
///
/// `lu` stores U on and above the diagonal and the multipliers of L
/// strictly below it; the unit diagonal of L is implicit and never
/// stored. `perm` records, for elimination step k, the row that was
/// swapped into position k (length n − 1).
#[derive(Debug, Clone)]
pub struct LuFactors<T: Scalar> {
    pub lu: Matrix<T>,
    pub perm: Vec<usize>,
}

/// Factor a square matrix as P·A = L·U with the default pivot tolerance.
pub fn lu_factor<T: Scalar>(a: &Matrix<T>) -> Result<LuFactors<T>, LinAlgError> {
    lu_factor_with_tol(a, <T as From<f64>>::from(DEFAULT_PIVOT_TOL))
}

/// Factor a square matrix as P·A = L·U, failing with
/// `LinAlgError::Singular` when the best available pivot magnitude falls
/// below `tol`.
pub fn lu_factor_with_tol<T: Scalar>(
    a: &Matrix<T>,
    tol: T,
) -> Result<LuFactors<T>, LinAlgError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(LinAlgError::Dimension(format!(
            "LU factorization requires a square matrix, got {}x{}",
            n,
            a.ncols()
        )));
    }

    let mut b = a.clone();
    let mut l = Matrix::identity(n);
    let mut perm = Vec::with_capacity(n.saturating_sub(1));

    for k in 0..n.saturating_sub(1) {
        // Largest-magnitude candidate in column k; only a strict
        // improvement moves the pivot, so ties keep the lowest index.
        let mut pivot = k;
        let mut best = b[[k, k]].abs();
        for i in (k + 1)..n {
            let cand = b[[i, k]].abs();
            if cand > best {
                best = cand;
                pivot = i;
            }
        }
        if best < tol {
            return Err(LinAlgError::Singular(format!(
                "pivot magnitude {best} below tolerance {tol} at elimination step {k}"
            )));
        }

        // The already-eliminated part of each row lives in the
        // multiplier matrix, so the two swaps cover disjoint column
        // ranges.
        b.swap_rows_in(k, pivot, k..n);
        l.swap_rows_in(k, pivot, 0..k);
        perm.push(pivot);

        for j in (k + 1)..n {
            let mult = b[[j, k]] / b[[k, k]];
            l[[j, k]] = mult;
            for c in k..n {
                let upd = b[[j, c]] - mult * b[[k, c]];
                b[[j, c]] = upd;
            }
        }
    }

    // Store the strictly-lower multipliers in the combined matrix.
    for i in 1..n {
        for j in 0..i {
            b[[i, j]] = l[[i, j]];
        }
    }

    Ok(LuFactors { lu: b, perm })
}

/// Materialize the permutation matrix P as the composition of the n − 1
/// elementary row transpositions, applied in step order.
pub fn explicit_p<T: Scalar>(perm: &[usize]) -> Matrix<T> {
    let dim = perm.len() + 1;
    let mut p = Matrix::identity(dim);
    for (i, &swapped) in perm.iter().enumerate() {
        // Left-multiplying by the step-i transposition swaps these rows.
        p.swap_rows(i, swapped);
    }
    p
}

/// Apply the recorded row swaps directly to a vector, without forming
/// the permutation matrix: O(n) instead of O(n²).
pub fn implicit_pb<T: Scalar>(perm: &[usize], b: &mut Vector<T>) {
    for (i, &swapped) in perm.iter().enumerate() {
        b.swap(i, swapped);
    }
}
