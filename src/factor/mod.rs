//! Matrix factorizations

pub mod cholesky;
pub mod gram_schmidt;
pub mod householder;
pub mod lu;

/// Magnitude below which a pivot, diagonal entry, or reflector norm is
/// treated as singular by the default entry points. The `*_with_tol`
/// variants accept a caller-supplied tolerance instead.
pub const DEFAULT_PIVOT_TOL: f64 = 1e-12;
