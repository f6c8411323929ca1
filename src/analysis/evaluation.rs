//! Aggregated tail probabilities with approximation quality

use crate::analysis::parameters::Parameters;
use crate::io::configuration::POISSON_RECOMMENDED_LAMBDA;
use crate::math::binomial::binomial_tail;
use crate::math::normal::{NormalTail, normal_tail};
use crate::math::poisson::poisson_tail;
use crate::math::probability::relative_error_percent;
use std::fmt;

/// Quality band of the Normal approximation for a parameter triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalQuality {
    /// n·p ≥ 10 and n·(1-p) ≥ 10
    Recommended,
    /// n·p ≥ 5 and n·(1-p) ≥ 5
    Acceptable,
    /// Computable, but the expected counts are small
    Poor,
    /// Degenerate distribution, no value produced
    Unavailable,
}

impl NormalQuality {
    /// Classify a Normal approximation result
    pub const fn of(normal: &NormalTail) -> Self {
        if normal.valid {
            Self::Recommended
        } else if normal.acceptable {
            Self::Acceptable
        } else if normal.calculable {
            Self::Poor
        } else {
            Self::Unavailable
        }
    }
}

impl fmt::Display for NormalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Recommended => "recommended",
            Self::Acceptable => "acceptable",
            Self::Poor => "poor",
            Self::Unavailable => "unavailable",
        };
        f.write_str(label)
    }
}

/// Result record for one (n, p, k) triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// Exact binomial P(X > k)
    pub exact: f64,
    /// Poisson approximation of P(X > k)
    pub poisson: f64,
    /// Continuity-corrected Normal approximation of P(X > k)
    pub normal: f64,
    /// Deviation of the Poisson value from the exact one, in percent
    pub poisson_error: f64,
    /// Deviation of the Normal value from the exact one, in percent
    pub normal_error: f64,
    /// Normal approximation recommended (both expected counts ≥ 10)
    pub normal_valid: bool,
    /// Normal approximation usable (both expected counts ≥ 5, positive variance)
    pub normal_calculable: bool,
    /// Quality band of the Normal approximation
    pub normal_quality: NormalQuality,
    /// Poisson approximation advised (λ < 10)
    pub poisson_recommended: bool,
    /// Mean n·p
    pub mean: f64,
    /// Standard deviation √(n·p·(1-p))
    pub std_dev: f64,
}

/// Compute the exact tail and both approximations for validated parameters
pub fn evaluate(params: &Parameters) -> CalculationResult {
    let (n, p, k) = (params.n(), params.p(), params.k());

    let exact = binomial_tail(n, p, k);
    let poisson = poisson_tail(n, p, k);
    let normal = normal_tail(n, p, k);

    let poisson_error = relative_error_percent(poisson, exact);
    let normal_error = if normal.value > 0.0 {
        relative_error_percent(normal.value, exact)
    } else {
        0.0
    };

    let mean = params.mean();
    let result = CalculationResult {
        exact,
        poisson,
        normal: normal.value,
        poisson_error,
        normal_error,
        normal_valid: normal.valid,
        normal_calculable: normal.acceptable && params.variance() > 0.0,
        normal_quality: NormalQuality::of(&normal),
        poisson_recommended: mean > 0.0 && mean < POISSON_RECOMMENDED_LAMBDA,
        mean,
        std_dev: params.std_dev(),
    };

    tracing::debug!(
        n,
        p,
        k,
        exact = result.exact,
        poisson = result.poisson,
        normal = result.normal,
        quality = %result.normal_quality,
        "evaluated tail probabilities"
    );

    result
}
