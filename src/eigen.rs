//! Iterative eigen-solvers: power, shifted inverse, Rayleigh quotient

use crate::error::LinAlgError;
use crate::factor::lu::{lu_factor, LuFactors};
use crate::matrix::Matrix;
use crate::norms::{inner, norm_2};
use crate::scalar::Scalar;
use crate::solve::lu_solve_prefactored;
use crate::vector::Vector;

/// Outcome of an eigen-iteration.
///
/// Hitting the iteration cap is never silent: `converged` distinguishes
/// a genuine fixed point from the last estimate at the cap.
#[derive(Debug, Clone)]
pub struct EigenResult<T: Scalar> {
    /// Final eigenvalue estimate.
    pub value: T,
    /// Final eigenvector estimate.
    pub vector: Vector<T>,
    /// Iterations consumed.
    pub iterations: usize,
    /// Whether the tolerance was met before the cap.
    pub converged: bool,
}

// Signed entry of greatest absolute value; ties keep the earliest index.
fn dominant_entry<T: Scalar>(v: &Vector<T>) -> T {
    let mut best = T::zero();
    for i in 0..v.len() {
        if v[i].abs() > best.abs() {
            best = v[i];
        }
    }
    best
}

fn check_square_with_vector<T: Scalar>(
    a: &Matrix<T>,
    v: &Vector<T>,
    what: &str,
) -> Result<(), LinAlgError> {
    if a.nrows() != a.ncols() {
        return Err(LinAlgError::Dimension(format!(
            "{what} requires a square matrix, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }
    if v.len() != a.nrows() || v.is_empty() {
        return Err(LinAlgError::Dimension(format!(
            "{what}: initial vector of length {} for a {}x{} matrix",
            v.len(),
            a.nrows(),
            a.ncols()
        )));
    }
    Ok(())
}

/// Power iteration for the dominant eigenpair.
///
/// Repeatedly sets v ← Av, takes the entry of greatest absolute value
/// (signed) as the eigenvalue estimate, and rescales v by it. Converged
/// when both the eigenvalue change and the vector change fall below
/// `tol`.
pub fn power_iteration<T: Scalar>(
    a: &Matrix<T>,
    v0: &Vector<T>,
    tol: T,
    max_iter: usize,
) -> Result<EigenResult<T>, LinAlgError> {
    check_square_with_vector(a, v0, "power iteration")?;

    let mut v = v0.clone();
    let mut value = T::zero();
    let mut iterations = 0;
    let mut converged = false;

    for it in 1..=max_iter {
        iterations = it;
        let w = a.matvec(&v)?;
        let est = dominant_entry(&w);
        if est.abs() < T::epsilon() {
            return Err(LinAlgError::Singular(
                "power iterate collapsed to the zero vector".into(),
            ));
        }
        let next = w.scale(T::one() / est);
        let dvec = norm_2(&(&next - &v));
        let dval = (est - value).abs();
        value = est;
        v = next;
        if dval < tol && dvec < tol {
            converged = true;
            break;
        }
    }

    Ok(EigenResult {
        value,
        vector: v,
        iterations,
        converged,
    })
}

/// Shifted inverse iteration for the eigenpair nearest `shift`.
///
/// (A − shift·I) is factored once by LU; each iteration solves the
/// fixed factorization, takes the dominant entry θ of the solve, and
/// estimates the eigenvalue as shift + 1/θ. A shift that makes the
/// matrix singular to the pivot tolerance propagates
/// `LinAlgError::Singular`.
pub fn inverse_iteration<T: Scalar>(
    a: &Matrix<T>,
    v0: &Vector<T>,
    shift: T,
    tol: T,
    max_iter: usize,
) -> Result<EigenResult<T>, LinAlgError> {
    check_square_with_vector(a, v0, "inverse iteration")?;

    let n = a.nrows();
    let shifted = Matrix::from_fn(n, n, |i, j| {
        if i == j {
            a[[i, j]] - shift
        } else {
            a[[i, j]]
        }
    });
    let f: LuFactors<T> = lu_factor(&shifted)?;

    let mut v = v0.clone();
    let mut value = shift;
    let mut iterations = 0;
    let mut converged = false;

    for it in 1..=max_iter {
        iterations = it;
        let w = lu_solve_prefactored(&f, &v)?;
        let theta = dominant_entry(&w);
        if theta.abs() < T::epsilon() {
            return Err(LinAlgError::Singular(
                "inverse iterate collapsed to the zero vector".into(),
            ));
        }
        let next = w.scale(T::one() / theta);
        let est = shift + T::one() / theta;
        let dvec = norm_2(&(&next - &v));
        let dval = (est - value).abs();
        value = est;
        v = next;
        if dval < tol && dvec < tol {
            converged = true;
            break;
        }
    }

    Ok(EigenResult {
        value,
        vector: v,
        iterations,
        converged,
    })
}

/// Rayleigh-quotient iteration from an initial eigenvalue guess.
///
/// Refactors (A − μI) by LU on every iteration with the current shift
/// estimate μ — O(n³) per step, bought for cubic local convergence. μ is
/// updated by the Rayleigh quotient of the unit iterate; convergence is
/// a relative residual ‖Av − μv‖ below `tol`. A factorization that
/// reports singularity means μ has landed on an eigenvalue to within the
/// pivot tolerance, which is reported as convergence.
pub fn rayleigh_iteration<T: Scalar>(
    a: &Matrix<T>,
    v0: &Vector<T>,
    lambda0: T,
    tol: T,
    max_iter: usize,
) -> Result<EigenResult<T>, LinAlgError> {
    check_square_with_vector(a, v0, "Rayleigh-quotient iteration")?;

    let n = a.nrows();
    let v0norm = norm_2(v0);
    if v0norm < T::epsilon() {
        return Err(LinAlgError::Factorization(
            "Rayleigh-quotient iteration started from the zero vector".into(),
        ));
    }

    let mut v = v0.scale(T::one() / v0norm);
    let mut mu = lambda0;
    let mut iterations = 0;
    let mut converged = false;

    for it in 1..=max_iter {
        iterations = it;
        let shifted = Matrix::from_fn(n, n, |i, j| {
            if i == j {
                a[[i, j]] - mu
            } else {
                a[[i, j]]
            }
        });
        // A singular shifted system, whether caught at the pivot scan or
        // at the triangular diagonal, means μ sits on an eigenvalue.
        let solved = lu_factor(&shifted).and_then(|f| lu_solve_prefactored(&f, &v));
        let w = match solved {
            Ok(w) => w,
            Err(LinAlgError::Singular(_)) => {
                converged = true;
                break;
            }
            Err(e) => return Err(e),
        };
        let wnorm = norm_2(&w);
        if wnorm < T::epsilon() {
            return Err(LinAlgError::Singular(
                "Rayleigh iterate collapsed to the zero vector".into(),
            ));
        }
        v = w.scale(T::one() / wnorm);

        let av = a.matvec(&v)?;
        mu = inner(&v, &av)?;
        let residual = norm_2(&(&av - &v.scale(mu)));
        if residual < tol * mu.abs().max(T::one()) {
            converged = true;
            break;
        }
    }

    Ok(EigenResult {
        value: mu,
        vector: v,
        iterations,
        converged,
    })
}
