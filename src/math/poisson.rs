//! Poisson approximation to the binomial

use crate::math::probability::ForwardSum;

/// Approximate P(X > k) for X ~ Binomial(n, p) with Poisson(λ = n·p)
///
/// Accumulates `P(X = 0) = e^{-λ}`, `P(X = i) = P(X = i - 1) · λ / i` up to
/// `i = k` and returns the clamped complement. Whether Poisson is advisable
/// for the given λ is left to the caller.
pub fn poisson_tail(n: usize, p: f64, k: usize) -> f64 {
    let lambda = n as f64 * p;
    if lambda <= 0.0 {
        return 0.0;
    }

    let mut sum = ForwardSum::from_log_first_term(-lambda);
    for i in 1..=k {
        if !sum.advance(lambda / i as f64) {
            tracing::debug!(lambda, k, step = i, "poisson recurrence stopped on non-finite term");
            break;
        }
    }
    sum.complement()
}

/// Poisson(λ) point probabilities for `x = 0..count`
///
/// Generated by the same forward recurrence, no factorials involved.
pub fn poisson_pmf(lambda: f64, count: usize) -> Vec<f64> {
    let mut masses = Vec::with_capacity(count);
    if count == 0 {
        return masses;
    }
    if lambda <= 0.0 {
        masses.push(1.0);
        masses.resize(count, 0.0);
        return masses;
    }

    let mut sum = ForwardSum::from_log_first_term(-lambda);
    masses.push(sum.term());
    let mut exhausted = false;
    for x in 1..count {
        exhausted = exhausted || !sum.advance(lambda / x as f64);
        masses.push(if exhausted { 0.0 } else { sum.term() });
    }
    masses
}
