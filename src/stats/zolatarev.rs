//! Zolatarev representation of the stable density.
//!
//! The scaled density is written as an integral over a bounded angular
//! domain whose integrand has a single interior peak. The peak is located by
//! bisection, the integral is split there, and each unimodal half is handed
//! to an adaptive quadrature - generic adaptive rules converge far faster on
//! unimodal pieces than on one interval straddling a sharp peak.
//!
//! Four regimes apply, selected with closeness tolerances since a floating
//! point α or β rarely lands exactly on a special value:
//!
//! - α ≈ 2: Gaussian closed form (β has no effect)
//! - α ≈ 1, β ≈ 0: Cauchy closed form
//! - α ≈ 1, β ≠ 0: integral over θ ∈ [-π/2, π/2]; the least accurate regime,
//!   good to roughly a percent in total mass
//! - α ≠ 1: integral over θ ∈ [-ε, π/2] for x > ζ; closed form in a narrow
//!   band around x = ζ; reflection to (-x, α, -β) for x < ζ

use std::f64::consts::PI;

use super::error::StatsError;
use super::pdf::{PdfValue, ScaledPdf};
use crate::integrate::{GaussKronrod, Integrator, QuadOptions};
use crate::optimize::{bisect, ScalarOptions};
use crate::special::gamma;

/// Stable density generator using the Zolatarev representation.
///
/// The most robust of the three representations: valid across the whole
/// parameter space, at the cost of one bisection and two adaptive
/// integrations per evaluation. Configuration is immutable after
/// construction; instances are safe to share across threads.
pub struct ZolatarevPdf {
    /// Integration target accuracy
    eps_quad: f64,
    /// Accuracy for locating the integrand peak
    eps_bisect: f64,
    /// Tolerance for α to be close to a special value (1 or 2)
    alpha_tol: f64,
    /// Tolerance for β to be close to 0
    beta_tol: f64,
    /// Relative tolerance for x to be close to ζ
    zeta_tol: f64,
    /// Quadrature subdivision limit
    limit_quad: usize,
    /// Bisection iteration limit
    limit_bisect: usize,
    integrator: Box<dyn Integrator>,
}

impl ZolatarevPdf {
    /// Create a generator with the default adaptive Gauss-Kronrod integrator.
    ///
    /// Default parameters:
    /// - `eps_quad` = 1e-12 (integration target accuracy)
    /// - `eps_bisect` = 1e-10 (accuracy for locating the integrand peak)
    /// - `alpha_tol` = `beta_tol` = 1e-6 (closeness to special values)
    /// - `zeta_tol` = 1e-6 (relative closeness of x to ζ)
    /// - `limit_quad` = 100 (subdivision limit)
    /// - `limit_bisect` = 50 (bisection iteration limit)
    pub fn new() -> Self {
        Self::with_integrator(
            Box::new(GaussKronrod::new()),
            1e-12,
            1e-10,
            1e-6,
            1e-6,
            1e-6,
            100,
            50,
        )
    }

    /// Create a generator with a supplied integrator and explicit tolerances.
    ///
    /// # Arguments
    /// * `integrator` - Quadrature engine for the two peak-split halves
    /// * `eps_quad` - Integration target accuracy
    /// * `eps_bisect` - Accuracy for locating the integrand peak
    /// * `alpha_tol` - Tolerance for α to be close to 1 or 2
    /// * `beta_tol` - Tolerance for β to be close to 0
    /// * `zeta_tol` - Relative tolerance for x to be close to ζ
    /// * `limit_quad` - Quadrature subdivision limit
    /// * `limit_bisect` - Bisection iteration limit
    pub fn with_integrator(
        integrator: Box<dyn Integrator>,
        eps_quad: f64,
        eps_bisect: f64,
        alpha_tol: f64,
        beta_tol: f64,
        zeta_tol: f64,
        limit_quad: usize,
        limit_bisect: usize,
    ) -> Self {
        Self {
            eps_quad,
            eps_bisect,
            alpha_tol,
            beta_tol,
            zeta_tol,
            limit_quad,
            limit_bisect,
            integrator,
        }
    }

    /// Locate the integrand peak, split there, integrate both halves.
    ///
    /// `peak_fn` is zero where the integrand peaks; `integrand` is the
    /// function to integrate over [a, b]. Every sub-failure (bisection not
    /// converged, either quadrature half degraded) is folded into one
    /// composite warning; the summed value is always returned.
    fn integrate_peak_split<F, G>(
        &self,
        peak_fn: F,
        integrand: G,
        a: f64,
        b: f64,
    ) -> (f64, Option<StatsError>)
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        let mut warning = None;

        let bisect_options = ScalarOptions {
            max_iter: self.limit_bisect,
            tol: self.eps_bisect,
            rtol: 0.0,
        };
        let peak = match bisect(&peak_fn, a, b, &bisect_options) {
            Ok(result) => {
                if !result.converged {
                    warning = push_warning(
                        warning,
                        StatsError::ConvergenceError {
                            iterations: self.limit_bisect,
                            context: "peak location (bisection)".to_string(),
                        },
                    );
                }
                result.root
            }
            Err(e) => {
                // Degenerate bracket: fall back to the midpoint so the split
                // still happens, and report what went wrong.
                warning = push_warning(
                    warning,
                    StatsError::NumericalError {
                        message: format!("peak location failed: {}", e),
                    },
                );
                0.5 * (a + b)
            }
        };

        let quad_options = QuadOptions {
            eps_abs: self.eps_quad,
            eps_rel: 0.0,
            limit: self.limit_quad,
        };

        let mut total = 0.0;
        for (lo, hi, side) in [(a, peak, "below peak"), (peak, b, "above peak")] {
            match self.integrator.integrate(&integrand, lo, hi, &quad_options) {
                Ok(result) => {
                    total += result.value;
                    if !result.converged {
                        warning = push_warning(
                            warning,
                            StatsError::ConvergenceError {
                                iterations: self.limit_quad,
                                context: format!("quadrature {}", side),
                            },
                        );
                    }
                }
                Err(e) => {
                    warning = push_warning(
                        warning,
                        StatsError::NumericalError {
                            message: format!("quadrature {} failed: {}", side, e),
                        },
                    );
                }
            }
        }

        (total, warning)
    }
}

impl Default for ZolatarevPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaledPdf for ZolatarevPdf {
    fn scaled_pdf(&self, x: f64, alpha: f64, beta: f64) -> PdfValue {
        if close_to(alpha, 2.0, self.alpha_tol) {
            // Gaussian case of the normalised stable distribution; β has no
            // effect here
            return PdfValue::exact((-0.25 * x * x).exp() / (4.0 * PI).sqrt());
        }

        if close_to(alpha, 1.0, self.alpha_tol) {
            if close_to(beta, 0.0, self.beta_tol) {
                // Cauchy distribution
                return PdfValue::exact(1.0 / ((1.0 + x * x) * PI));
            }

            let gamma_scale = (-0.5 * PI * x / beta).exp();
            let a = -0.5 * PI;
            let b = 0.5 * PI;

            let (raw, warning) = self.integrate_peak_split(
                |theta| component_eq1(theta, beta) * gamma_scale - 1.0,
                |theta| integrand_eq1(theta, beta, gamma_scale),
                a,
                b,
            );
            return finish(raw, 0.5 * gamma_scale / beta.abs(), warning);
        }

        let zeta = -beta * (0.5 * PI * alpha).tan();

        // Within float noise of ζ the factor γ = (x-ζ)^(α/(α-1)) degenerates
        // and the quadrature cannot resolve the boundary layer it creates;
        // the closed form at ζ is accurate across the whole band.
        if (x - zeta).abs() <= self.zeta_tol * (1.0 + zeta.abs()) {
            let eps = (-zeta).atan() / alpha;
            let value = gamma(1.0 + 1.0 / alpha) * eps.cos()
                / (PI * (1.0 + zeta * zeta).powf(0.5 / alpha));
            return PdfValue::exact(value);
        }

        if x < zeta {
            // Reflection identity: f(x; α, β) = f(-x; α, -β). Single-level
            // recursion: the reflected point satisfies -x > -ζ, which is the
            // reflected parameters' own ζ, so the recursive call takes the
            // direct branch above.
            return self.scaled_pdf(-x, alpha, -beta);
        }

        let eps = (-zeta).atan() / alpha;
        let gamma_scale = (x - zeta).powf(alpha / (alpha - 1.0));
        let a = -eps;
        let b = 0.5 * PI;

        let (raw, warning) = self.integrate_peak_split(
            |theta| component_neq1(theta, alpha, eps) * gamma_scale - 1.0,
            |theta| integrand_neq1(theta, alpha, eps, gamma_scale),
            a,
            b,
        );
        let scale = alpha * (x - zeta).powf(1.0 / (alpha - 1.0)) / (PI * (alpha - 1.0).abs());
        finish(raw, scale, warning)
    }
}

/// Apply the outer scale factor, guarding the degenerate case: when γ leaves
/// the f64 range every integrand sample is suppressed to zero while the scale
/// factor overflows, and the raw product would be 0·∞ = NaN.
fn finish(raw: f64, scale: f64, warning: Option<StatsError>) -> PdfValue {
    let value = raw * scale;
    if value.is_finite() {
        return PdfValue { value, warning };
    }
    PdfValue {
        value: 0.0,
        warning: push_warning(
            warning,
            StatsError::NumericalError {
                message: "scale factor out of f64 range".to_string(),
            },
        ),
    }
}

/// Kernel of the α ≠ 1 integrand; its product with the scale factor γ has a
/// single peak in (-ε, π/2).
fn component_neq1(theta: f64, alpha: f64, eps: f64) -> f64 {
    ((alpha * eps).cos()).powf(1.0 / (alpha - 1.0))
        * (theta.cos() / (alpha * (theta + eps)).sin()).powf(alpha / (alpha - 1.0))
        * (alpha * eps + (alpha - 1.0) * theta).cos()
        / theta.cos()
}

/// Integrand c·exp(-c·γ) for the α ≠ 1 branch, evaluated in the log domain
/// so a large kernel value cannot overflow before the exponential
/// suppression is applied.
fn integrand_neq1(theta: f64, alpha: f64, eps: f64, gamma_scale: f64) -> f64 {
    let val = component_neq1(theta, alpha, eps);

    // A non-finite or non-positive kernel sample means the exponential
    // suppression wins in the limit: the integrand vanishes there.
    if gamma_scale.is_nan() || !val.is_finite() || val <= 0.0 {
        return 0.0;
    }
    (val.ln() - val * gamma_scale).exp()
}

/// Kernel of the α ≈ 1, β ≠ 0 integrand.
fn component_eq1(theta: f64, beta: f64) -> f64 {
    (1.0 + 2.0 * beta * theta / PI)
        * ((0.5 * PI / beta + theta) * theta.tan()).exp()
        / theta.cos()
}

/// Integrand c·exp(-c·γ) for the α ≈ 1 branch, log domain.
fn integrand_eq1(theta: f64, beta: f64, gamma_scale: f64) -> f64 {
    let val = component_eq1(theta, beta);

    if gamma_scale.is_nan() || !val.is_finite() || val <= 0.0 {
        return 0.0;
    }
    (val.ln() - val * gamma_scale).exp()
}

fn close_to(val1: f64, val2: f64, tol: f64) -> bool {
    (val1 - val2).abs() < tol.abs()
}

fn push_warning(current: Option<StatsError>, new: StatsError) -> Option<StatsError> {
    match current {
        None => Some(new),
        Some(prev) => Some(StatsError::NumericalError {
            message: format!("{}; {}", prev, new),
        }),
    }
}
