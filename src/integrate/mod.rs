//! Numerical quadrature.
//!
//! This module provides the integration services consumed by the density
//! generators:
//!
//! - [`quad`] - Adaptive Gauss-Kronrod quadrature with error estimation
//! - [`GaussLegendre`] - Fixed-order Gauss-Legendre rule for finite intervals
//! - [`GaussLaguerre`] - Fixed-order Gauss-Laguerre rule for `[0, ∞)`
//! - [`Integrator`] - Capability trait so callers can swap the adaptive rule
//!   for a fixed one
//!
//! Accuracy failures are non-fatal by design: an integration that exhausts
//! its subdivision limit still yields its best value, flagged through
//! [`QuadResult::converged`]. Errors are reserved for unusable inputs.

mod adaptive;
pub mod error;
mod gauss;

pub use adaptive::{quad, GaussKronrod};
pub use error::{IntegrateError, IntegrateResult};
pub use gauss::{GaussLaguerre, GaussLegendre};

/// Options for adaptive quadrature.
#[derive(Debug, Clone)]
pub struct QuadOptions {
    /// Absolute tolerance on the total error estimate
    pub eps_abs: f64,
    /// Relative tolerance on the total error estimate
    pub eps_rel: f64,
    /// Maximum number of interval subdivisions
    pub limit: usize,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            eps_abs: 1e-10,
            eps_rel: 0.0,
            limit: 50,
        }
    }
}

/// Result from a quadrature method.
#[derive(Debug, Clone)]
pub struct QuadResult {
    /// The computed integral
    pub value: f64,
    /// Estimated absolute error (NaN when the rule provides no estimate)
    pub error_estimate: f64,
    /// Number of interval subdivisions performed
    pub subdivisions: usize,
    /// Whether the requested tolerance was met
    pub converged: bool,
}

/// Capability trait for integration over a finite interval.
///
/// Implemented by the adaptive [`GaussKronrod`] engine (the default) and by
/// fixed-order [`GaussLegendre`] rules, so consumers such as the Zolatarev
/// density generator can be configured with either.
pub trait Integrator: Send + Sync {
    /// Integrate `f` over `[a, b]` toward the tolerances in `options`.
    ///
    /// # Errors
    /// Only for unusable inputs (invalid or non-finite interval). Tolerance
    /// failures are reported via [`QuadResult::converged`].
    fn integrate(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        options: &QuadOptions,
    ) -> IntegrateResult<QuadResult>;
}
