//! # dense-la: dense numerical linear algebra
//!
//! Owning [`Vector`]/[`Matrix`] containers plus the factorization,
//! solver, and eigen-iteration routines built on them:
//!
//! - LU with partial pivoting, Householder QR (with implicit reflector
//!   application), modified Gram-Schmidt QR, Cholesky
//! - triangular substitution, system solves via each factorization
//!   (fresh or precomputed), least squares
//! - power, shifted inverse, and Rayleigh-quotient eigen-iterations
//!   with structured convergence reporting
//!
//! Everything is sequential, f64-first (generic over [`Scalar`]), and
//! deep-copy owned; no sparse formats, no blocked kernels.

pub mod diagnostic;
pub mod eigen;
pub mod error;
pub mod factor;
pub mod matrix;
pub mod norms;
pub mod scalar;
pub mod solve;
pub mod vector;

pub use diagnostic::Diagnostic;
pub use eigen::{inverse_iteration, power_iteration, rayleigh_iteration, EigenResult};
pub use error::LinAlgError;
pub use factor::cholesky::cholesky;
pub use factor::gram_schmidt::gram_schmidt_qr;
pub use factor::householder::{
    explicit_q, hessenberg, householder_qr, implicit_qtb, implicit_qx, QrFactors,
};
pub use factor::lu::{explicit_p, implicit_pb, lu_factor, lu_factor_with_tol, LuFactors};
pub use factor::DEFAULT_PIVOT_TOL;
pub use matrix::Matrix;
pub use norms::{angle, inner, norm_1, norm_2, norm_frobenius, norm_inf, pnorm};
pub use scalar::Scalar;
pub use solve::{
    backsub, cholesky_solve, lu_solve, lu_solve_prefactored, qr_least_squares, qr_solve,
    qr_solve_prefactored,
};
pub use vector::Vector;
