//! Error taxonomy for the factorization and solver routines

/// Fatal error conditions raised by the containers and routines.
///
/// The non-fatal shape-mismatch condition is not represented here: additive
/// operations on mismatched shapes log a warning and return a truncated
/// result instead of failing (see `Vector`/`Matrix` `Add`/`Sub`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinAlgError {
    /// Incompatible dimensions for a multiplicative operation, dot
    /// product, or row/column replacement.
    #[error("dimension mismatch: {0}")]
    Dimension(String),

    /// A pivot or triangular diagonal entry fell below the singularity
    /// tolerance.
    #[error("singular matrix: {0}")]
    Singular(String),

    /// A factorization step could not proceed (degenerate Householder
    /// reflector, vanishing Gram-Schmidt column).
    #[error("factorization failed: {0}")]
    Factorization(String),

    /// Cholesky encountered a non-positive diagonal pivot.
    #[error("matrix is not positive definite: {0}")]
    NotPositiveDefinite(String),

    /// Least-squares system with fewer equations than unknowns.
    #[error("rank-deficient system: {0}")]
    RankDeficient(String),
}

impl LinAlgError {
    /// Short stable code, suitable for the diagnostic table lookup.
    pub fn code(&self) -> &'static str {
        match self {
            LinAlgError::Dimension(_) => "DIMENSION",
            LinAlgError::Singular(_) => "SINGULAR",
            LinAlgError::Factorization(_) => "QRFACT",
            LinAlgError::NotPositiveDefinite(_) => "NOTPOSDEF",
            LinAlgError::RankDeficient(_) => "QRSQRS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(LinAlgError::Dimension("3 vs 4".into()).code(), "DIMENSION");
        assert_eq!(LinAlgError::RankDeficient("m < n".into()).code(), "QRSQRS");
    }

    #[test]
    fn display_carries_message() {
        let e = LinAlgError::Singular("pivot 0 below tolerance".into());
        assert_eq!(e.to_string(), "singular matrix: pivot 0 below tolerance");
    }
}
