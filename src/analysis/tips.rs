//! Interpretation hints derived from the parameters and the exact result

use crate::analysis::parameters::Parameters;
use crate::io::configuration::{NORMAL_RECOMMENDED_MIN_COUNT, POISSON_RECOMMENDED_LAMBDA};
use std::fmt;

/// A single hint about the shape of the problem or how to read the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tip {
    /// Fewer than 10 trials
    FewTrials,
    /// More than 1000 trials
    ManyTrials,
    /// p below 0.01
    VeryLowProbability,
    /// p above 0.99
    VeryHighProbability,
    /// p equal to one half
    SymmetricDistribution,
    /// k below half the mean
    ThresholdFarBelowMean,
    /// k above one and a half times the mean
    ThresholdFarAboveMean,
    /// 0 < λ < 10
    PoissonRecommended,
    /// n·p ≥ 10 and n·(1-p) ≥ 10
    NormalConditionsMet,
    /// n·p < 10
    NormalTooFewSuccesses,
    /// n·(1-p) < 10
    NormalTooFewFailures,
    /// Exact tail above one half
    LikelyEvent,
    /// Exact tail below 1%
    RareEvent,
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::FewTrials => {
                "With few trials (n < 10) the binomial shape can be quite irregular; larger n approximates better."
            }
            Self::ManyTrials => {
                "With many trials (n > 1000) consider the Normal approximation if its conditions hold."
            }
            Self::VeryLowProbability => {
                "Very low success probability (p < 0.01): the Poisson distribution can be an excellent approximation."
            }
            Self::VeryHighProbability => {
                "Very high success probability (p > 0.99): this is like looking for failures in a very reliable system."
            }
            Self::SymmetricDistribution => {
                "A 50% success probability gives a symmetric distribution; mean and median coincide."
            }
            Self::ThresholdFarBelowMean => {
                "k is well below the mean, so exceeding it is close to certain."
            }
            Self::ThresholdFarAboveMean => {
                "k is well above the mean, so exceeding it is unlikely."
            }
            Self::PoissonRecommended => {
                "λ = n·p < 10: the Poisson approximation is recommended for this scenario."
            }
            Self::NormalConditionsMet => {
                "The Normal approximation conditions hold (np ≥ 10 and n(1-p) ≥ 10)."
            }
            Self::NormalTooFewSuccesses => "np < 10: the Normal approximation may be unreliable.",
            Self::NormalTooFewFailures => "n(1-p) < 10: the Normal approximation may be unreliable.",
            Self::LikelyEvent => "High probability (> 50%): this event is more likely to happen than not.",
            Self::RareEvent => "Very low probability (< 1%): this is a rare event.",
        };
        f.write_str(message)
    }
}

/// Ordered hints for a parameter triple and its exact tail probability
pub fn smart_tips(params: &Parameters, exact: f64) -> Vec<Tip> {
    let mut tips = Vec::new();
    let n = params.n();
    let p = params.p();
    let k = params.k() as f64;
    let mean = params.mean();

    if n < 10 {
        tips.push(Tip::FewTrials);
    } else if n > 1000 {
        tips.push(Tip::ManyTrials);
    }

    if p < 0.01 {
        tips.push(Tip::VeryLowProbability);
    } else if p > 0.99 {
        tips.push(Tip::VeryHighProbability);
    } else if (p - 0.5).abs() < f64::EPSILON {
        tips.push(Tip::SymmetricDistribution);
    }

    if k < mean * 0.5 {
        tips.push(Tip::ThresholdFarBelowMean);
    } else if k > mean * 1.5 {
        tips.push(Tip::ThresholdFarAboveMean);
    }

    if mean > 0.0 && mean < POISSON_RECOMMENDED_LAMBDA {
        tips.push(Tip::PoissonRecommended);
    }

    let enough_successes = mean >= NORMAL_RECOMMENDED_MIN_COUNT;
    let enough_failures = params.expected_failures() >= NORMAL_RECOMMENDED_MIN_COUNT;
    match (enough_successes, enough_failures) {
        (true, true) => tips.push(Tip::NormalConditionsMet),
        (false, _) => tips.push(Tip::NormalTooFewSuccesses),
        (true, false) => tips.push(Tip::NormalTooFewFailures),
    }

    if exact > 0.5 {
        tips.push(Tip::LikelyEvent);
    } else if exact < 0.01 {
        tips.push(Tip::RareEvent);
    }

    tips
}
