//! LU factorization properties: P·A = L·U reconstruction and solves

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dense_la::{explicit_p, lu_factor, lu_solve, lu_solve_prefactored, LinAlgError, Matrix, Vector};

// ===== Helper Functions =====

/// Random diagonally dominant (hence nonsingular) n×n matrix.
fn random_nonsingular(n: usize, rng: &mut StdRng) -> Matrix<f64> {
    let mut a = Matrix::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0));
    for i in 0..n {
        a[[i, i]] += n as f64;
    }
    a
}

/// Read L (implicit unit diagonal) and U off the combined LU matrix.
fn split_lu(lu: &Matrix<f64>) -> (Matrix<f64>, Matrix<f64>) {
    let n = lu.nrows();
    let l = Matrix::from_fn(n, n, |i, j| {
        if i == j {
            1.0
        } else if i > j {
            lu[[i, j]]
        } else {
            0.0
        }
    });
    let u = Matrix::from_fn(n, n, |i, j| if i <= j { lu[[i, j]] } else { 0.0 });
    (l, u)
}

fn assert_matrix_eq(a: &Matrix<f64>, b: &Matrix<f64>, eps: f64) {
    assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()));
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert_abs_diff_eq!(a[[i, j]], b[[i, j]], epsilon = eps);
        }
    }
}

// ===== Tests =====

#[test]
fn random_matrices_reconstruct_pa_as_lu() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [2, 3, 5, 8, 12] {
        let a = random_nonsingular(n, &mut rng);
        let f = lu_factor(&a).unwrap();
        assert_eq!(f.perm.len(), n - 1);

        let (l, u) = split_lu(&f.lu);
        let pa = explicit_p::<f64>(&f.perm).matmul(&a).unwrap();
        let lu = l.matmul(&u).unwrap();
        assert_matrix_eq(&pa, &lu, 1e-9);
    }
}

#[test]
fn diagonal_system_solves_exactly() {
    let a = Matrix::from_fn(2, 2, |i, j| [[2.0, 0.0], [0.0, 3.0]][i][j]);
    let b = Vector::from_slice(&[4.0, 9.0]);
    let x = lu_solve(&a, &b).unwrap();
    assert_abs_diff_eq!(x[0], 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x[1], 3.0, epsilon = 1e-9);
}

#[test]
fn pivoting_driver_system_solves() {
    // A dense 5×5 system that forces several pivot interchanges.
    let a = Matrix::from_fn(5, 5, |i, j| {
        [
            [11.0, 0.0, -3.0, 2.0, 4.0],
            [5.0, 41.0, 7.0, 8.0, -9.0],
            [1.0, 1.0, 6.0, 1.0, 1.0],
            [0.0, 0.0, 0.0, 2.0, 0.0],
            [2.0, -3.0, 2.0, -3.0, 18.0],
        ][i][j]
    });
    let b = Vector::from_slice(&[4.0, 3.0, 5.0, 1.0, 7.0]);
    let x = lu_solve(&a, &b).unwrap();
    let ax = a.matvec(&x).unwrap();
    for i in 0..5 {
        assert_abs_diff_eq!(ax[i], b[i], epsilon = 1e-9);
    }
}

#[test]
fn prefactored_solve_reuses_one_factorization() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_nonsingular(6, &mut rng);
    let f = lu_factor(&a).unwrap();

    for _ in 0..3 {
        let b = Vector::from_fn(6, |_| rng.gen_range(-2.0..2.0));
        let x = lu_solve_prefactored(&f, &b).unwrap();
        let ax = a.matvec(&x).unwrap();
        for i in 0..6 {
            assert_abs_diff_eq!(ax[i], b[i], epsilon = 1e-9);
        }
    }
}

#[test]
fn singular_matrix_reports_singular_not_garbage() {
    let a = Matrix::from_fn(3, 3, |i, j| {
        [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]][i][j]
    });
    let b = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert!(matches!(lu_solve(&a, &b), Err(LinAlgError::Singular(_))));
}
