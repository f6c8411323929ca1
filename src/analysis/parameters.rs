//! Validated (n, p, k) triples

use crate::io::configuration::{MAX_TRIALS_N, MIN_TRIALS_N};
use crate::io::error::{Result, TailError, invalid_parameter};
use std::fmt;

/// Parameters of a binomial tail query P(X > k) for X ~ Binomial(n, p)
///
/// Construction validates the whole domain, so every value of this type
/// satisfies `1 ≤ n ≤ 100 000`, `0 ≤ p ≤ 1` and `0 ≤ k ≤ n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    n: usize,
    p: f64,
    k: usize,
}

impl Parameters {
    /// Validate and build a parameter triple
    ///
    /// # Errors
    ///
    /// Returns [`TailError::InvalidParameters`] listing every violated
    /// constraint when any of the three values is out of range
    pub fn new(n: usize, p: f64, k: usize) -> Result<Self> {
        let errors = validation_errors(n, p, k);
        if errors.is_empty() {
            Ok(Self { n, p, k })
        } else {
            tracing::warn!(n, p, k, violations = errors.len(), "rejected parameters");
            Err(TailError::InvalidParameters(errors))
        }
    }

    /// Number of trials
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Success probability of each trial
    pub const fn p(&self) -> f64 {
        self.p
    }

    /// Threshold the count must exceed
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Expected count n·p
    pub const fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    /// Expected number of failures n·(1-p)
    pub const fn expected_failures(&self) -> f64 {
        self.n as f64 * (1.0 - self.p)
    }

    /// Variance n·p·(1-p)
    pub const fn variance(&self) -> f64 {
        self.mean() * (1.0 - self.p)
    }

    /// Standard deviation √(n·p·(1-p))
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Same trials and probability with a different threshold
    ///
    /// # Errors
    ///
    /// Returns an error if `k` exceeds the number of trials
    pub fn with_k(&self, k: usize) -> Result<Self> {
        Self::new(self.n, self.p, k)
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n = {}, p = {}, k = {}", self.n, self.p, self.k)
    }
}

/// Every constraint the triple violates, in parameter order
///
/// An empty list means the triple is valid.
pub fn validation_errors(n: usize, p: f64, k: usize) -> Vec<TailError> {
    let mut errors = Vec::new();

    if n < MIN_TRIALS_N {
        errors.push(invalid_parameter(
            "n",
            &n,
            &"the number of trials must be at least 1",
        ));
    } else if n > MAX_TRIALS_N {
        errors.push(invalid_parameter(
            "n",
            &n,
            &format!("the number of trials must not exceed {MAX_TRIALS_N}"),
        ));
    }

    if !(0.0..=1.0).contains(&p) {
        errors.push(invalid_parameter(
            "p",
            &p,
            &"the success probability must lie between 0 and 1",
        ));
    }

    if k > n {
        errors.push(invalid_parameter(
            "k",
            &k,
            &format!("the threshold cannot exceed the number of trials (n = {n})"),
        ));
    }

    errors
}
