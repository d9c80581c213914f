//! The density-evaluation contract and its dispatcher.
//!
//! Each representation (Zolatarev, Bergstrom, Belov) implements [`ScaledPdf`]:
//! the density of the *scaled* stable distribution (μ = 0, σ = 1) at a point.
//! The [`pdf`] dispatcher validates parameters once, maps the query point
//! into scaled coordinates, delegates, and rescales the result by the
//! Jacobian of the affine transform.

use super::error::{StatsError, StatsResult};

/// A density value together with an optional non-fatal diagnostic.
///
/// When quadrature, bisection or series summation hits an iteration cap, the
/// best partial value is still returned here; `warning` describes what did
/// not converge so the caller can judge whether the accuracy is acceptable.
#[derive(Debug, Clone)]
pub struct PdfValue {
    /// The density estimate
    pub value: f64,
    /// Convergence diagnostics from the generator, if any
    pub warning: Option<StatsError>,
}

impl PdfValue {
    pub(crate) fn exact(value: f64) -> Self {
        Self {
            value,
            warning: None,
        }
    }
}

/// Capability trait: density of the scaled stable distribution.
///
/// Implementors receive parameters that have already passed range
/// validation; they own their numerical method and tolerances, hold no
/// per-call mutable state, and are safe to share across threads.
pub trait ScaledPdf: Send + Sync {
    /// Density of the stable distribution with μ = 0, σ = 1 at `x`.
    fn scaled_pdf(&self, x: f64, alpha: f64, beta: f64) -> PdfValue;
}

/// Density of the general Levy-stable distribution.
///
/// # Arguments
/// * `generator` - The representation used to evaluate the scaled density
/// * `x` - Evaluation point
/// * `alpha` - Stability index, must lie in (0, 2]
/// * `beta` - Skewness, must lie in [-1, 1]
/// * `mu` - Location
/// * `sigma` - Scale, must be positive
///
/// # Errors
/// * `InvalidParameter` if `alpha`, `beta` or `sigma` is out of range
///   (checked before any numeric work; NaN fails the checks)
///
/// Convergence problems inside the generator are *not* errors: they surface
/// as [`PdfValue::warning`] next to the best-effort value.
pub fn pdf<P>(
    generator: &P,
    x: f64,
    alpha: f64,
    beta: f64,
    mu: f64,
    sigma: f64,
) -> StatsResult<PdfValue>
where
    P: ScaledPdf + ?Sized,
{
    if !(alpha > 0.0 && alpha <= 2.0) {
        return Err(StatsError::InvalidParameter {
            name: "alpha".to_string(),
            value: alpha,
            reason: "stability index must lie in (0, 2]".to_string(),
        });
    }
    if !(-1.0..=1.0).contains(&beta) {
        return Err(StatsError::InvalidParameter {
            name: "beta".to_string(),
            value: beta,
            reason: "skewness must lie in [-1, 1]".to_string(),
        });
    }
    if !(sigma > 0.0) {
        return Err(StatsError::InvalidParameter {
            name: "sigma".to_string(),
            value: sigma,
            reason: "scale must be positive".to_string(),
        });
    }

    let z = (x - mu) / sigma;
    let mut result = generator.scaled_pdf(z, alpha, beta);
    result.value /= sigma;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ZolatarevPdf;

    #[test]
    fn test_pdf_rejects_alpha_out_of_range() {
        let gen = ZolatarevPdf::new();
        assert!(pdf(&gen, 0.0, 2.5, 0.0, 0.0, 1.0).is_err());
        assert!(pdf(&gen, 0.0, 0.0, 0.0, 0.0, 1.0).is_err());
        assert!(pdf(&gen, 0.0, -1.0, 0.0, 0.0, 1.0).is_err());
        assert!(pdf(&gen, 0.0, f64::NAN, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_pdf_rejects_beta_out_of_range() {
        let gen = ZolatarevPdf::new();
        assert!(pdf(&gen, 0.0, 1.0, 1.5, 0.0, 1.0).is_err());
        assert!(pdf(&gen, 0.0, 1.0, -1.5, 0.0, 1.0).is_err());
        assert!(pdf(&gen, 0.0, 1.0, f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_pdf_rejects_nonpositive_sigma() {
        let gen = ZolatarevPdf::new();
        assert!(pdf(&gen, 0.0, 1.5, 0.0, 0.0, 0.0).is_err());
        assert!(pdf(&gen, 0.0, 1.5, 0.0, 0.0, -2.0).is_err());
    }

    #[test]
    fn test_pdf_boundary_parameters_accepted() {
        let gen = ZolatarevPdf::new();
        assert!(pdf(&gen, 0.0, 2.0, 0.0, 0.0, 1.0).is_ok());
        assert!(pdf(&gen, 0.5, 1.5, 1.0, 0.0, 1.0).is_ok());
        assert!(pdf(&gen, 0.5, 1.5, -1.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_pdf_affine_rescaling() {
        let gen = ZolatarevPdf::new();
        let mu = 2.0;
        let sigma = 3.0;
        let x = 4.5;

        let shifted = pdf(&gen, x, 1.5, 0.25, mu, sigma).unwrap();
        let scaled = gen.scaled_pdf((x - mu) / sigma, 1.5, 0.25);
        assert!((shifted.value - scaled.value / sigma).abs() < 1e-15);
    }
}
