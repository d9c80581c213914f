//! Levy-stable distributions for Rust: density evaluation and sampling.
//!
//! Stable laws generalize the Gaussian to heavy tails and skew while keeping
//! closure under addition; outside a handful of special cases their density
//! has no closed form, so this crate provides numerical representations of
//! it together with an exact sampler.
//!
//! # Modules
//!
//! - [`stats`] - the user-facing API: density generators
//!   ([`stats::ZolatarevPdf`], [`stats::BergstromPdf`], [`stats::BelovPdf`]),
//!   the validating [`stats::pdf`] dispatcher, and Chambers-Mallows-Stuck
//!   sampling ([`stats::sample`])
//! - [`integrate`] - fixed Gauss-Legendre / Gauss-Laguerre rules and
//!   globally adaptive Gauss-Kronrod quadrature
//! - [`optimize`] - bracketing scalar root finding (bisection)
//! - [`special`] - log-gamma and gamma
//!
//! # Example
//!
//! ```
//! use levy_stable::stats::{pdf, ZolatarevPdf};
//!
//! let generator = ZolatarevPdf::new();
//! // Standard Cauchy density at the origin: 1/π
//! let result = pdf(&generator, 0.0, 1.0, 0.0, 0.0, 1.0).unwrap();
//! assert!((result.value - std::f64::consts::FRAC_1_PI).abs() < 1e-12);
//! ```

pub mod integrate;
pub mod optimize;
pub mod special;
pub mod stats;
