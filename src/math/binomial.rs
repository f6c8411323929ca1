//! Exact binomial probabilities

use crate::math::combinatorics::log_choose;
use crate::math::probability::{ForwardSum, clamp_probability};

/// Log of the point probability P(X = k) for X ~ Binomial(n, p)
///
/// The degenerate probabilities are handled before any logarithm is taken,
/// so `p = 0` and `p = 1` give exact certainty (0) or impossibility (`-∞`)
/// rather than NaN.
pub fn log_pmf(n: usize, k: usize, p: f64) -> f64 {
    if p <= 0.0 {
        return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
    }
    if p >= 1.0 {
        return if k == n { 0.0 } else { f64::NEG_INFINITY };
    }
    if k > n {
        return f64::NEG_INFINITY;
    }

    let successes = k as f64;
    let failures = (n - k) as f64;
    log_choose(n, k) + successes * p.ln() + failures * (-p).ln_1p()
}

/// Upper tail P(X > k) for X ~ Binomial(n, p)
///
/// Starts from `P(X = 0) = exp(n · ln(1 - p))` and walks forward with
/// `P(X = i) = P(X = i - 1) · (n - i + 1) / i · p / (1 - p)` up to `i = k`,
/// then returns the clamped complement of that cumulative mass. Each step
/// only applies a ratio of adjacent terms, which is what keeps the
/// computation stable for very large n combined with extreme p.
pub fn binomial_tail(n: usize, p: f64, k: usize) -> f64 {
    if p <= 0.0 || k >= n {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    lower_cumulative(n, p, k).complement()
}

/// Lower cumulative P(X ≤ k) for X ~ Binomial(n, p)
pub fn binomial_cdf(n: usize, p: f64, k: usize) -> f64 {
    if k >= n || p <= 0.0 {
        return 1.0;
    }
    if p >= 1.0 {
        return 0.0;
    }
    clamp_probability(lower_cumulative(n, p, k).total())
}

fn lower_cumulative(n: usize, p: f64, k: usize) -> ForwardSum {
    let odds = p / (1.0 - p);
    let mut sum = ForwardSum::from_log_first_term(n as f64 * (-p).ln_1p());

    for i in 1..=k {
        let ratio = (n - i + 1) as f64 / i as f64 * odds;
        if !sum.advance(ratio) {
            tracing::debug!(n, p, k, step = i, "binomial recurrence stopped on non-finite term");
            break;
        }
    }
    sum
}
