//! Scalar root finding.
//!
//! The density generators need one service from this module: locating the
//! peak of a unimodal integrand by bisecting a bracketing interval. The
//! method requires an interval [a, b] with f(a)·f(b) <= 0.

pub mod error;
mod root_finding;

pub use error::{OptimizeError, OptimizeResult};
pub use root_finding::bisect;

/// Options for scalar root finding.
#[derive(Debug, Clone)]
pub struct ScalarOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Absolute tolerance for convergence (width of interval)
    pub tol: f64,
    /// Relative tolerance for convergence (width of interval)
    pub rtol: f64,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-12,
            rtol: 1e-12,
        }
    }
}

/// Result from a root finding method.
#[derive(Debug, Clone)]
pub struct RootResult {
    /// The root found (bracket midpoint if not converged)
    pub root: f64,
    /// Function value at root
    pub function_value: f64,
    /// Number of iterations used
    pub iterations: usize,
    /// Final bracket width
    pub bracket_width: f64,
    /// Whether the bracket shrank below tolerance within the iteration cap
    pub converged: bool,
}
