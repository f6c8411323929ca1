//! Tests for exact binomial point probabilities and tails

#[cfg(test)]
mod tests {
    use binotail::math::binomial::{binomial_cdf, binomial_tail, log_pmf};
    use proptest::prelude::*;

    // Tests degenerate probabilities give certainty or impossibility instead of NaN
    // Verified by removing the p = 0 and p = 1 branches
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_log_pmf_degenerate_probabilities() {
        assert_eq!(log_pmf(10, 0, 0.0), 0.0);
        assert_eq!(log_pmf(10, 1, 0.0), f64::NEG_INFINITY);
        assert_eq!(log_pmf(10, 10, 1.0), 0.0);
        assert_eq!(log_pmf(10, 9, 1.0), f64::NEG_INFINITY);
    }

    // Tests a hand-computed point probability
    // Verified by dropping the failure exponent
    #[test]
    fn test_log_pmf_worked_example() {
        let p3 = log_pmf(5, 3, 0.3).exp();
        let p4 = log_pmf(5, 4, 0.3).exp();
        let p5 = log_pmf(5, 5, 0.3).exp();
        assert!((p3 - 0.1323).abs() < 1e-12, "got {p3}");
        assert!((p4 - 0.028_35).abs() < 1e-12, "got {p4}");
        assert!((p5 - 0.002_43).abs() < 1e-12, "got {p5}");
    }

    // Tests the mass function sums to one for small and moderate n
    // Verified by using log(p) for the failure term
    #[test]
    fn test_log_pmf_normalization() {
        for (n, p, tolerance) in [(10, 0.5, 1e-12), (50, 0.3, 1e-12), (1000, 0.37, 1e-6)] {
            let total: f64 = (0..=n).map(|x| log_pmf(n, x, p).exp()).sum();
            assert!(
                (total - 1.0).abs() < tolerance,
                "mass for n={n}, p={p} sums to {total}"
            );
        }
    }

    // Tests P(X > 2) for the worked example n = 5, p = 0.3
    // Verified by summing up to k - 1
    #[test]
    fn test_binomial_tail_worked_example() {
        let tail = binomial_tail(5, 0.3, 2);
        assert!((tail - 0.163_08).abs() < 1e-12, "got {tail}");
    }

    // Tests the algebraic boundary cases
    // Verified by inverting the p = 1 branch
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_binomial_tail_boundaries() {
        assert_eq!(binomial_tail(20, 0.0, 5), 0.0);
        assert_eq!(binomial_tail(20, 1.0, 5), 1.0);
        assert_eq!(binomial_tail(20, 1.0, 20), 0.0);
        for p in [0.01, 0.5, 0.99] {
            assert_eq!(binomial_tail(20, p, 20), 0.0);
        }
    }

    // Tests the first tail equals one minus the probability of no successes
    // Verified by starting the cumulative sum at zero
    #[test]
    fn test_binomial_tail_at_zero() {
        for (n, p) in [(30, 0.1), (1, 0.4), (500, 0.002)] {
            let expected = 1.0 - (1.0f64 - p).powi(n as i32);
            let tail = binomial_tail(n, p, 0);
            assert!((tail - expected).abs() < 1e-12, "n={n}, p={p}: {tail} vs {expected}");
        }
    }

    // Tests the lower cumulative and the tail partition the mass
    // Verified by returning the tail from the cdf
    #[test]
    fn test_binomial_cdf_complements_tail() {
        for (n, p, k) in [(20, 0.3, 8), (100, 0.02, 5), (50, 0.85, 40)] {
            let sum = binomial_cdf(n, p, k) + binomial_tail(n, p, k);
            assert!((sum - 1.0).abs() < 1e-12, "n={n}, p={p}, k={k}: {sum}");
        }
        assert!((binomial_cdf(10, 0.5, 10) - 1.0).abs() < f64::EPSILON);
        assert!(binomial_cdf(10, 1.0, 9).abs() < f64::EPSILON);
    }

    // Tests large n with moderate p, where P(X = 0) underflows to zero
    // Verified by starting the recurrence from exp(n ln(1 - p)) unscaled
    #[test]
    fn test_binomial_tail_large_n_underflowing_start() {
        let half = binomial_tail(100_000, 0.5, 50_000);
        assert!((half - 0.498_738_436_960_15).abs() < 1e-6, "got {half}");

        let third = binomial_tail(100_000, 0.3, 30_000);
        assert!((third - 0.498_439_994_151_70).abs() < 1e-6, "got {third}");
    }

    // Tests p extremely close to one
    // Verified by computing the odds as p / p
    #[test]
    fn test_binomial_tail_probability_near_one() {
        let tail = binomial_tail(1000, 0.999, 990);
        assert!((tail - 0.999_999_892_571_437_7).abs() < 1e-9, "got {tail}");
    }

    // Tests tiny p with the maximum n stays finite and correct
    // Verified by computing ln(1 - p) without ln_1p
    #[test]
    fn test_binomial_tail_rare_event_stress() {
        let tail = binomial_tail(100_000, 0.000_01, 0);
        assert!(tail.is_finite());
        assert!((tail - 0.632_122_398_233_427_8).abs() < 1e-9, "got {tail}");
    }

    // Tests the tail never increases with k
    // Verified by reversing the loop order
    #[test]
    fn test_binomial_tail_monotone_in_k() {
        let n = 200;
        let p = 0.05;
        let mut previous = 1.0;
        for k in 0..=n {
            let tail = binomial_tail(n, p, k);
            assert!(tail <= previous + 1e-15, "tail increased at k={k}");
            previous = tail;
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn tail_is_finite_probability(
            (n, p, k) in (1usize..2000, 0.0f64..=1.0)
                .prop_flat_map(|(n, p)| (Just(n), Just(p), 0..=n))
        ) {
            let tail = binomial_tail(n, p, k);
            prop_assert!(tail.is_finite());
            prop_assert!((0.0..=1.0).contains(&tail), "tail({n}, {p}, {k}) = {tail}");
        }

        #[test]
        fn tail_is_deterministic(n in 1usize..5000, p in 0.0f64..=1.0, k_fraction in 0.0f64..=1.0) {
            let k = (n as f64 * k_fraction) as usize;
            prop_assert_eq!(binomial_tail(n, p, k).to_bits(), binomial_tail(n, p, k).to_bits());
        }
    }
}
