//! Binomial coefficients in log space

/// Natural logarithm of the binomial coefficient C(n, k)
///
/// Sums `ln(n - i + 1) - ln(i)` over the shorter side `min(k, n - k)`, so
/// no intermediate value grows beyond the magnitude of the result. Direct
/// factorials leave the double range near n = 170; this stays accurate for
/// n in the hundreds of thousands.
///
/// Returns `f64::NEG_INFINITY` when `k > n`, the log of an impossible count.
pub fn log_choose(n: usize, k: usize) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }

    let m = k.min(n - k);
    let mut result = 0.0;
    for i in 1..=m {
        result += ((n - i + 1) as f64).ln() - (i as f64).ln();
    }
    result
}
