//! Scalar special functions.
//!
//! Only the pieces the density representations need: the log-gamma function
//! (Lanczos approximation) and the gamma function derived from it. The
//! Bergstrom series works with `ln_gamma` differences directly so that
//! Γ(nα+1)/Γ(n+1) never overflows for large n.

use std::f64::consts::PI;

/// Natural log of the absolute value of the gamma function, ln |Γ(x)|.
///
/// Lanczos approximation with g = 7 and 9 coefficients, using the reflection
/// formula for x < 0.5 (where Γ alternates sign; see [`gamma`] for the signed
/// value). Relative error is below 2e-10 for x > 0.
pub fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        // Reflection: |Γ(x)| = π / (|sin(πx)| Γ(1-x))
        return (PI / (PI * x).sin().abs()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t = x + G + 0.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Gamma function Γ(x), signed over the whole real line.
pub fn gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Γ(x) = π / (sin(πx) Γ(1-x)) carries the sign of sin(πx)
        PI / ((PI * x).sin() * gamma(1.0 - x))
    } else {
        ln_gamma(x).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_integers() {
        // Γ(n) = (n-1)!
        assert!((gamma(1.0) - 1.0).abs() < 1e-10);
        assert!((gamma(5.0) - 24.0).abs() < 1e-8);
        assert!((gamma(10.0) - 362880.0).abs() < 1e-3);
    }

    #[test]
    fn test_gamma_half() {
        // Γ(1/2) = √π
        assert!((gamma(0.5) - PI.sqrt()).abs() < 1e-10);
        // Γ(3/2) = √π / 2
        assert!((gamma(1.5) - 0.5 * PI.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_ln_gamma_large() {
        // ln Γ(100) = ln 99!
        let expected: f64 = (2..100).map(|k| (k as f64).ln()).sum();
        assert!((ln_gamma(100.0) - expected).abs() < 1e-8);
    }

    #[test]
    fn test_reflection_negative_argument() {
        // Γ(-0.5) = -2√π; Γ(-1.5) = 4√π/3 (sign alternates between poles)
        assert!((gamma(-0.5) + 2.0 * PI.sqrt()).abs() < 1e-8);
        assert!((gamma(-1.5) - 4.0 * PI.sqrt() / 3.0).abs() < 1e-8);
    }

    #[test]
    fn test_ln_gamma_negative_is_log_abs() {
        // ln |Γ(-0.5)| = ln(2√π)
        assert!((ln_gamma(-0.5) - (2.0 * PI.sqrt()).ln()).abs() < 1e-9);
    }
}
