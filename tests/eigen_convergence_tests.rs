//! Eigen-iteration convergence properties

use approx::assert_abs_diff_eq;

use dense_la::{
    inverse_iteration, norm_2, power_iteration, rayleigh_iteration, Matrix, Vector,
};

// Symmetric matrix with spectrum {1, 2, 3}; dominant eigenvalue 3.
fn diag_spectrum() -> Matrix<f64> {
    Matrix::from_fn(3, 3, |i, j| {
        [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 1.0]][i][j]
    })
}

// Dense symmetric matrix with an irrational spectrum.
fn dense_symmetric() -> Matrix<f64> {
    Matrix::from_fn(3, 3, |i, j| {
        [[1.0, 2.0, 3.0], [2.0, 2.0, 1.0], [3.0, 1.0, 1.0]][i][j]
    })
}

fn assert_eigenpair(a: &Matrix<f64>, value: f64, vector: &Vector<f64>, eps: f64) {
    let av = a.matvec(vector).unwrap();
    let residual = norm_2(&(&av - &vector.scale(value)));
    assert!(
        residual < eps * norm_2(vector).max(1.0),
        "residual {residual} too large for eigenvalue estimate {value}"
    );
}

#[test]
fn power_iteration_reaches_known_dominant_eigenvalue() {
    let a = diag_spectrum();
    let v0 = Vector::from_slice(&[1.0, 1.0, 1.0]);
    let out = power_iteration(&a, &v0, 1e-9, 300).unwrap();
    assert!(out.converged);
    assert_abs_diff_eq!(out.value, 3.0, epsilon = 1e-6);
    assert_eigenpair(&a, out.value, &out.vector, 1e-6);
}

#[test]
fn rayleigh_iteration_reaches_known_dominant_eigenvalue() {
    let a = diag_spectrum();
    let v0 = Vector::from_slice(&[0.3, 1.0, 0.1]);
    let out = rayleigh_iteration(&a, &v0, 2.6, 1e-9, 50).unwrap();
    assert!(out.converged);
    assert_abs_diff_eq!(out.value, 3.0, epsilon = 1e-6);
    assert_eigenpair(&a, out.value, &out.vector, 1e-6);
}

#[test]
fn rayleigh_iteration_on_dense_symmetric_matrix() {
    // Started near the top of the spectrum; assert the eigenpair
    // property rather than a hard-coded eigenvalue.
    let a = dense_symmetric();
    let v0 = Vector::from_slice(&[1.0, 1.0, 1.0]);
    let out = rayleigh_iteration(&a, &v0, 3.5, 1e-10, 100).unwrap();
    assert!(out.converged);
    assert_eigenpair(&a, out.value, &out.vector, 1e-6);
}

#[test]
fn inverse_iteration_finds_eigenvalue_nearest_shift() {
    let a = diag_spectrum();
    let v0 = Vector::from_slice(&[1.0, 0.7, 0.4]);

    let low = inverse_iteration(&a, &v0, 1.2, 1e-10, 300).unwrap();
    assert!(low.converged);
    assert_abs_diff_eq!(low.value, 1.0, epsilon = 1e-6);

    let mid = inverse_iteration(&a, &v0, 1.9, 1e-10, 300).unwrap();
    assert!(mid.converged);
    assert_abs_diff_eq!(mid.value, 2.0, epsilon = 1e-6);
}

#[test]
fn iteration_cap_is_reported_not_silent() {
    // Complex spectrum: the power iterate cycles forever.
    let a = Matrix::from_fn(2, 2, |i, j| [[0.0, -1.0], [1.0, 0.0]][i][j]);
    let v0 = Vector::from_slice(&[1.0, 0.25]);
    let out = power_iteration(&a, &v0, 1e-12, 40).unwrap();
    assert!(!out.converged);
    assert_eq!(out.iterations, 40);
}
