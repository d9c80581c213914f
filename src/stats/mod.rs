//! Levy-stable distribution: density evaluation and sampling.
//!
//! Stable distributions form a four-parameter family (stability α ∈ (0, 2],
//! skewness β ∈ [-1, 1], location μ, scale σ) with no closed-form density
//! except at special points (α = 2 Gaussian; α = 1, β = 0 Cauchy).
//! Everywhere else the density is an oscillatory or sharply peaked integral,
//! and this module provides three interchangeable evaluation strategies
//! behind one contract:
//!
//! - [`ZolatarevPdf`] - peak-split adaptive integration; robust across the
//!   whole parameter space
//! - [`BergstromPdf`] - asymptotic tail series; cheapest, valid for large x
//! - [`BelovPdf`] - two-piece fixed-rule integration; fast, degrades for
//!   small α
//!
//! The [`pdf`] dispatcher validates parameters, rescales by (μ, σ) and
//! delegates to whichever generator the caller picked. Sampling
//! ([`sample`] and friends) uses the Chambers-Mallows-Stuck transform and
//! needs no density at all.
//!
//! Density calculation follows the direct-integration approach described in
//! Borak, Härdle, Weron (2005), "Stable distributions", SFB 649 discussion
//! paper 2005-008.

mod belov;
mod bergstrom;
mod error;
mod pdf;
mod sample;
mod zolatarev;

pub use belov::BelovPdf;
pub use bergstrom::BergstromPdf;
pub use error::{StatsError, StatsResult};
pub use pdf::{pdf, PdfValue, ScaledPdf};
pub use sample::{sample, sample_cauchy, sample_gauss, sample_levy};
pub use zolatarev::ZolatarevPdf;
