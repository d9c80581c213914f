//! Error types for root finding.

use std::fmt;

/// Result type for root finding operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur during root finding.
///
/// Only unusable brackets are errors. Hitting the iteration cap is reported
/// through [`RootResult::converged`](crate::optimize::RootResult) so the best
/// bracket midpoint survives.
#[derive(Debug, Clone)]
pub enum OptimizeError {
    /// Invalid interval provided (bounds must satisfy a < b).
    InvalidInterval { a: f64, b: f64, context: String },

    /// Function has the same sign at both bracket endpoints.
    SameSignBracket { fa: f64, fb: f64, context: String },
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must satisfy a < b",
                    a, b, context
                )
            }
            Self::SameSignBracket { fa, fb, context } => {
                write!(
                    f,
                    "Function has same sign at bracket endpoints in {}: f(a)={}, f(b)={}",
                    context, fa, fb
                )
            }
        }
    }
}

impl std::error::Error for OptimizeError {}
