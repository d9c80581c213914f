//! Fixed-order Gaussian quadrature rules.
//!
//! Nodes and weights are found by Newton iteration on the corresponding
//! orthogonal polynomial. This is a one-time scalar computation done at rule
//! construction; the rules themselves are immutable and cheap to apply.

use super::error::{IntegrateError, IntegrateResult};
use super::{Integrator, QuadOptions, QuadResult};

/// Fixed-order Gauss-Legendre quadrature rule.
///
/// Integrates over a finite interval `[a, b]` with `n` nodes; exact for
/// polynomials up to degree `2n - 1`. There is no error estimate: the rule
/// applies a single pass at its fixed order.
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    /// Nodes on the reference interval [-1, 1]
    nodes: Vec<f64>,
    /// Weights on the reference interval
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Create an `n`-point Gauss-Legendre rule.
    ///
    /// # Errors
    /// * `InvalidOrder` if n is 0
    pub fn new(n: usize) -> IntegrateResult<Self> {
        if n == 0 {
            return Err(IntegrateError::InvalidOrder {
                n,
                context: "GaussLegendre::new".to_string(),
            });
        }

        let (nodes, weights) = gauss_legendre_nodes_weights(n);
        Ok(Self { nodes, weights })
    }

    /// Number of nodes in the rule.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Integrate `f` over `[a, b]` in a single fixed-order pass.
    pub fn integrate_fixed<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let half_width = 0.5 * (b - a);
        let center = 0.5 * (a + b);

        let mut sum = 0.0;
        for (&x, &w) in self.nodes.iter().zip(self.weights.iter()) {
            sum += w * f(center + half_width * x);
        }
        sum * half_width
    }
}

impl Integrator for GaussLegendre {
    /// Single-pass integration; the subdivision limit and tolerances in
    /// `options` are ignored and no error estimate is produced.
    fn integrate(
        &self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
        options: &QuadOptions,
    ) -> IntegrateResult<QuadResult> {
        let _ = options;
        if !a.is_finite() || !b.is_finite() {
            return Err(IntegrateError::NonFiniteBound {
                a,
                b,
                context: "GaussLegendre::integrate".to_string(),
            });
        }
        if a >= b {
            return Err(IntegrateError::InvalidInterval {
                a,
                b,
                context: "GaussLegendre::integrate".to_string(),
            });
        }

        Ok(QuadResult {
            value: self.integrate_fixed(f, a, b),
            error_estimate: f64::NAN,
            subdivisions: 0,
            converged: true,
        })
    }
}

/// Fixed-order Gauss-Laguerre quadrature rule for `∫₀^∞ f(t) dt`.
///
/// The stored weights are premultiplied by `exp(node)`, so the rule applies
/// to plain integrands rather than to `f(t)·exp(-t)` factorizations. Suited
/// to integrands with an exponentially decaying tail.
#[derive(Debug, Clone)]
pub struct GaussLaguerre {
    nodes: Vec<f64>,
    /// Weights premultiplied by exp(node)
    total_weights: Vec<f64>,
}

impl GaussLaguerre {
    /// Create an `n`-point Gauss-Laguerre rule.
    ///
    /// # Errors
    /// * `InvalidOrder` if n is 0
    pub fn new(n: usize) -> IntegrateResult<Self> {
        if n == 0 {
            return Err(IntegrateError::InvalidOrder {
                n,
                context: "GaussLaguerre::new".to_string(),
            });
        }

        let (nodes, total_weights) = gauss_laguerre_nodes_weights(n);
        Ok(Self {
            nodes,
            total_weights,
        })
    }

    /// Number of nodes in the rule.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Integrate `f` over `[0, ∞)`.
    ///
    /// Shift the integrand to move the lower bound: `∫ₐ^∞ f(t) dt` is
    /// `self.integrate(|t| f(t + a))`.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mut sum = 0.0;
        for (&x, &w) in self.nodes.iter().zip(self.total_weights.iter()) {
            sum += w * f(x);
        }
        sum
    }
}

/// Compute Gauss-Legendre nodes and weights on [-1, 1].
///
/// Newton iteration on the Legendre polynomial, starting from the Chebyshev
/// approximation to each root. Roots come in symmetric pairs, so only half
/// are computed.
fn gauss_legendre_nodes_weights(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];

    let m = n.div_ceil(2);

    for i in 0..m {
        let mut z = ((i as f64 + 0.75) / (n as f64 + 0.5) * std::f64::consts::PI).cos();

        loop {
            let (p, dp) = legendre_p_and_dp(n, z);
            let z_new = z - p / dp;

            if (z_new - z).abs() < 1e-15 {
                z = z_new;
                break;
            }
            z = z_new;
        }

        let (_, dp) = legendre_p_and_dp(n, z);
        let w = 2.0 / ((1.0 - z * z) * dp * dp);

        nodes[i] = -z;
        nodes[n - 1 - i] = z;
        weights[i] = w;
        weights[n - 1 - i] = w;
    }

    (nodes, weights)
}

/// Evaluate Legendre polynomial P_n(x) and its derivative.
fn legendre_p_and_dp(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    if n == 1 {
        return (x, 1.0);
    }

    let mut p_prev = 1.0;
    let mut p_curr = x;

    for k in 2..=n {
        let p_next = ((2 * k - 1) as f64 * x * p_curr - (k - 1) as f64 * p_prev) / k as f64;
        p_prev = p_curr;
        p_curr = p_next;
    }

    // P'_n(x) = n * (x * P_n - P_{n-1}) / (x^2 - 1)
    let dp = n as f64 * (x * p_curr - p_prev) / (x * x - 1.0);

    (p_curr, dp)
}

/// Compute Gauss-Laguerre nodes and exp-premultiplied weights.
///
/// Newton iteration on the Laguerre polynomial L_n; initial guesses follow
/// the standard root-spacing estimates.
fn gauss_laguerre_nodes_weights(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0; n];
    let mut total_weights = vec![0.0; n];
    let nf = n as f64;

    let mut z = 0.0;
    for i in 0..n {
        if i == 0 {
            z = 3.0 / (1.0 + 2.4 * nf);
        } else if i == 1 {
            z += 15.0 / (1.0 + 2.5 * nf);
        } else {
            let ai = (i - 1) as f64;
            z += ((1.0 + 2.55 * ai) / (1.9 * ai)) * (z - nodes[i - 2]);
        }

        let mut pp = 0.0;
        let mut p2 = 0.0;
        for _ in 0..100 {
            let (p1, p1_prev) = laguerre_l_pair(n, z);
            p2 = p1_prev;
            // L'_n(z) = n * (L_n(z) - L_{n-1}(z)) / z
            pp = nf * (p1 - p2) / z;

            let z_new = z - p1 / pp;
            let converged = (z_new - z).abs() < 1e-14 * z.abs().max(1.0);
            z = z_new;
            if converged {
                break;
            }
        }

        nodes[i] = z;
        // Standard weight -1/(pp * n * L_{n-1}), premultiplied by exp(z)
        total_weights[i] = -z.exp() / (pp * nf * p2);
    }

    (nodes, total_weights)
}

/// Evaluate (L_n(z), L_{n-1}(z)) via the three-term recurrence.
fn laguerre_l_pair(n: usize, z: f64) -> (f64, f64) {
    let mut p1 = 1.0;
    let mut p2 = 0.0;
    for j in 1..=n {
        let p3 = p2;
        p2 = p1;
        p1 = (((2 * j - 1) as f64 - z) * p2 - (j - 1) as f64 * p3) / j as f64;
    }
    (p1, p2)
}
