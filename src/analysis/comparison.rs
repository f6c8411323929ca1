//! Side-by-side point probabilities of the binomial and its approximations

use crate::analysis::parameters::Parameters;
use crate::math::binomial::log_pmf;
use crate::math::normal::normal_density;
use crate::math::poisson::poisson_pmf;

/// Binomial, Poisson and Normal values at one count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonPoint {
    /// Number of successes
    pub x: usize,
    /// Exact binomial P(X = x)
    pub binomial: f64,
    /// Poisson(λ = n·p) P(X = x)
    pub poisson: f64,
    /// Normal density at x with the binomial mean and standard deviation
    pub normal: f64,
}

/// Comparison series for `x = 0..min(n + 1, max_points)`
pub fn comparison_series(params: &Parameters, max_points: usize) -> Vec<ComparisonPoint> {
    let count = (params.n() + 1).min(max_points);
    let mean = params.mean();
    let std_dev = params.std_dev();
    let poisson = poisson_pmf(mean, count);

    poisson
        .into_iter()
        .enumerate()
        .map(|(x, poisson_mass)| {
            let log_binomial = log_pmf(params.n(), x, params.p());
            ComparisonPoint {
                x,
                binomial: if log_binomial == f64::NEG_INFINITY {
                    0.0
                } else {
                    log_binomial.exp()
                },
                poisson: poisson_mass,
                normal: normal_density(x as f64, mean, std_dev),
            }
        })
        .collect()
}
