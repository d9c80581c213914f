//! Error types for distribution evaluation.

use std::fmt;

/// Result type for distribution operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur while evaluating a stable density.
///
/// `InvalidParameter` is fatal: the density is not computed. The other
/// variants only ever appear as *warnings* attached to a best-effort value
/// (see [`PdfValue`](crate::stats::PdfValue)).
#[derive(Debug, Clone)]
pub enum StatsError {
    /// Invalid parameter value for the distribution.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Iterative method did not converge within its cap.
    ConvergenceError { iterations: usize, context: String },

    /// Numerical computation was degraded; the message lists what failed.
    NumericalError { message: String },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::ConvergenceError {
                iterations,
                context,
            } => {
                write!(f, "{}: did not converge within {} iterations", context, iterations)
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
        }
    }
}

impl std::error::Error for StatsError {}
