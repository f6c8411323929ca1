//! Shared helpers for probability arithmetic
//!
//! Both the binomial and Poisson tails are accumulated with a forward
//! recurrence where each term is derived from its predecessor by a ratio.
//! [`ForwardSum`] carries that recurrence and keeps it meaningful when the
//! first term is too small to represent as a double.

use crate::io::configuration::{LOG_UNDERFLOW_GUARD, RESCALE_CEILING};

/// Force a computed probability into `[0, 1]`
///
/// Floating-point drift can push sums slightly below 0 or above 1, and a
/// non-finite value carries no information, so NaN maps to 0.
pub fn clamp_probability(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    num_traits::clamp(value, 0.0, 1.0)
}

/// Deviation of `approximation` from `reference` in percent
///
/// Relative to the reference when it is positive; when the reference is
/// exactly zero the absolute deviation is reported instead.
pub const fn relative_error_percent(approximation: f64, reference: f64) -> f64 {
    let deviation = (approximation - reference).abs();
    if reference > 0.0 {
        deviation / reference * 100.0
    } else {
        deviation * 100.0
    }
}

/// Running sum of a sequence of positive terms generated by successive ratios
///
/// The running value is stored as `value · exp(log_scale)`. When the first
/// term is representable, `log_scale` stays 0 and the arithmetic is exactly
/// the plain recurrence.
#[derive(Debug, Clone, Copy)]
pub struct ForwardSum {
    term: f64,
    total: f64,
    log_scale: f64,
    scaled: bool,
}

impl ForwardSum {
    /// Start from a first term given by its natural logarithm
    pub fn from_log_first_term(log_first: f64) -> Self {
        if log_first >= LOG_UNDERFLOW_GUARD || log_first == f64::NEG_INFINITY {
            let term = log_first.exp();
            Self {
                term,
                total: term,
                log_scale: 0.0,
                scaled: false,
            }
        } else {
            Self {
                term: 1.0,
                total: 1.0,
                log_scale: log_first,
                scaled: true,
            }
        }
    }

    /// Multiply the current term by `ratio` and add the result to the sum
    ///
    /// Returns `false` without touching the sum when the new term is not
    /// finite; the caller should stop the recurrence there.
    pub fn advance(&mut self, ratio: f64) -> bool {
        let next = self.term * ratio;
        if !next.is_finite() {
            return false;
        }
        self.term = next;
        self.total += next;

        if self.scaled && self.total > RESCALE_CEILING {
            self.term /= RESCALE_CEILING;
            self.total /= RESCALE_CEILING;
            self.log_scale += RESCALE_CEILING.ln();
        }
        true
    }

    /// Current term in natural units
    pub fn term(&self) -> f64 {
        self.unscale(self.term)
    }

    /// Accumulated sum in natural units
    pub fn total(&self) -> f64 {
        self.unscale(self.total)
    }

    /// Complement `1 - total`, clamped to a probability
    pub fn complement(&self) -> f64 {
        clamp_probability(1.0 - self.total())
    }

    fn unscale(&self, value: f64) -> f64 {
        if self.scaled {
            if value <= 0.0 {
                return 0.0;
            }
            (value.ln() + self.log_scale).exp()
        } else {
            value
        }
    }
}
