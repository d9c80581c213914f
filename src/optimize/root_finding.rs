//! Root finding for scalar functions.

use super::error::{OptimizeError, OptimizeResult};
use super::{RootResult, ScalarOptions};

/// Bisection method for root finding.
///
/// # Arguments
/// * `f` - Function to find root of
/// * `a` - Left bracket endpoint
/// * `b` - Right bracket endpoint
/// * `options` - Tolerances and iteration cap
///
/// # Returns
/// Root of `f` in interval [a, b]. If the iteration cap is reached before
/// the bracket shrinks below tolerance, the current midpoint is returned
/// with `converged == false`.
///
/// # Errors
/// * `InvalidInterval` if a >= b
/// * `SameSignBracket` if f(a) and f(b) have the same (finite, nonzero) sign
///
/// # Note
/// Bisection is slow (linear convergence) but very robust, and tolerates
/// infinite function values at the bracket endpoints.
pub fn bisect<F>(f: F, a: f64, b: f64, options: &ScalarOptions) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(OptimizeError::InvalidInterval {
            a,
            b,
            context: "bisect".to_string(),
        });
    }

    let fa = f(a);
    let fb = f(b);

    if (fa > 0.0 && fb > 0.0) || (fa < 0.0 && fb < 0.0) {
        return Err(OptimizeError::SameSignBracket {
            fa,
            fb,
            context: "bisect".to_string(),
        });
    }

    let mut left = a;
    let mut right = b;
    let mut f_left = fa;

    for iter in 0..options.max_iter {
        let mid = 0.5 * (left + right);
        let f_mid = f(mid);

        let width = right - left;
        if width.abs() < options.tol || width.abs() / mid.abs().max(1.0) < options.rtol {
            return Ok(RootResult {
                root: mid,
                function_value: f_mid,
                iterations: iter + 1,
                bracket_width: width,
                converged: true,
            });
        }

        if (f_mid > 0.0 && f_left > 0.0) || (f_mid < 0.0 && f_left < 0.0) {
            left = mid;
            f_left = f_mid;
        } else {
            right = mid;
        }
    }

    let mid = 0.5 * (left + right);
    Ok(RootResult {
        root: mid,
        function_value: f(mid),
        iterations: options.max_iter,
        bracket_width: right - left,
        converged: false,
    })
}
