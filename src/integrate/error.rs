//! Error types for quadrature operations.

use std::fmt;

/// Result type for quadrature operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during numerical integration.
///
/// These cover unusable inputs only. Failure to reach the requested accuracy
/// within the subdivision limit is not an error: it is reported through
/// [`QuadResult::converged`](crate::integrate::QuadResult) so the best-effort
/// value survives.
#[derive(Debug, Clone)]
pub enum IntegrateError {
    /// Invalid interval provided (bounds must satisfy a < b).
    InvalidInterval { a: f64, b: f64, context: String },

    /// An integration bound is NaN or infinite.
    NonFiniteBound { a: f64, b: f64, context: String },

    /// Invalid quadrature order (must be at least 1).
    InvalidOrder { n: usize, context: String },
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must satisfy a < b",
                    a, b, context
                )
            }
            Self::NonFiniteBound { a, b, context } => {
                write!(f, "Non-finite bound in {}: [{}, {}]", context, a, b)
            }
            Self::InvalidOrder { n, context } => {
                write!(f, "Invalid quadrature order {} in {}: need n >= 1", n, context)
            }
        }
    }
}

impl std::error::Error for IntegrateError {}
