//! Probability mass arrays for charting collaborators

use crate::analysis::parameters::Parameters;
use crate::io::configuration::{DEFAULT_MAX_BARS, TAIL_CONTEXT_BARS};
use crate::math::binomial::log_pmf;
use crate::math::probability::clamp_probability;

/// One bar of the binomial mass function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassPoint {
    /// Number of successes
    pub x: usize,
    /// P(X = x)
    pub probability: f64,
}

impl MassPoint {
    /// Whether this bar belongs to the tail P(X > k)
    pub const fn in_tail(&self, k: usize) -> bool {
        self.x > k
    }
}

/// Largest x included for the given parameters and bar cap
///
/// The range ends `TAIL_CONTEXT_BARS` past the threshold, at n, or at the
/// cap, whichever comes first.
pub fn last_bar(n: usize, k: usize, max_bars: usize) -> usize {
    n.min(k.saturating_add(TAIL_CONTEXT_BARS)).min(max_bars)
}

/// Binomial mass for `x = 0..=min(n, k + 20, max_bars)`
///
/// Display only: truncation here never influences the tail calculators.
/// With `p = 1` the whole mass sits at `x = n`, which is absent when the
/// range stops short of n.
pub fn distribution_mass(n: usize, p: f64, k: usize, max_bars: usize) -> Vec<MassPoint> {
    let last = last_bar(n, k, max_bars);

    (0..=last)
        .map(|x| {
            let probability = if p <= 0.0 {
                if x == 0 { 1.0 } else { 0.0 }
            } else if p >= 1.0 {
                if x == n { 1.0 } else { 0.0 }
            } else {
                let log_probability = log_pmf(n, x, p);
                if log_probability == f64::NEG_INFINITY {
                    0.0
                } else {
                    log_probability.exp()
                }
            };
            MassPoint { x, probability }
        })
        .collect()
}

/// Mass array for validated parameters with the default bar cap
pub fn mass_for(params: &Parameters) -> Vec<MassPoint> {
    distribution_mass(params.n(), params.p(), params.k(), DEFAULT_MAX_BARS)
}

/// Running sums P(X ≤ x) over a mass array
pub fn cumulative_mass(points: &[MassPoint]) -> Vec<f64> {
    points
        .iter()
        .scan(0.0, |running, point| {
            *running += point.probability;
            Some(clamp_probability(*running))
        })
        .collect()
}
