//! Tests for parameter validation and derived moments

#[cfg(test)]
mod tests {
    use binotail::TailError;
    use binotail::analysis::parameters::{Parameters, validation_errors};

    // Tests a valid triple is accepted and exposed unchanged
    // Verified by swapping the n and k accessors
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parameters_accept_valid_triple() {
        let params = Parameters::new(100, 0.02, 5).expect("valid parameters");
        assert_eq!(params.n(), 100);
        assert_eq!(params.p(), 0.02);
        assert_eq!(params.k(), 5);
    }

    // Tests the extremes of the accepted domain
    // Verified by making the upper bound on n exclusive
    #[test]
    fn test_parameters_accept_domain_edges() {
        assert!(Parameters::new(1, 0.0, 0).is_ok());
        assert!(Parameters::new(1, 1.0, 1).is_ok());
        assert!(Parameters::new(100_000, 0.5, 100_000).is_ok());
    }

    // Tests each out-of-range value is reported against its own parameter
    // Verified by removing the n > 100 000 check
    #[test]
    fn test_validation_errors_single_violation() {
        let cases: [(usize, f64, usize, &str); 6] = [
            (0, 0.5, 0, "n"),
            (100_001, 0.5, 5, "n"),
            (10, -0.1, 5, "p"),
            (10, 1.5, 5, "p"),
            (10, f64::NAN, 5, "p"),
            (10, 0.5, 11, "k"),
        ];
        for (n, p, k, expected) in cases {
            let errors = validation_errors(n, p, k);
            assert_eq!(errors.len(), 1, "({n}, {p}, {k}) -> {errors:?}");
            match errors.first() {
                Some(TailError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(*parameter, expected);
                }
                other => unreachable!("Expected InvalidParameter, got {other:?}"),
            }
        }
    }

    // Tests all violations are collected rather than only the first
    // Verified by returning early after the first error
    #[test]
    fn test_parameters_report_every_violation() {
        let error = Parameters::new(0, 2.0, 5).expect_err("three violations");
        let violations = error.violations();
        assert_eq!(violations.len(), 3);

        let message = error.to_string();
        assert!(message.contains("'n'"));
        assert!(message.contains("'p'"));
        assert!(message.contains("'k'"));
    }

    // Tests mean, variance and standard deviation
    // Verified by using p instead of 1 - p in the variance
    #[test]
    fn test_parameters_moments() {
        let params = Parameters::new(100, 0.2, 10).expect("valid parameters");
        assert!((params.mean() - 20.0).abs() < 1e-12);
        assert!((params.expected_failures() - 80.0).abs() < 1e-12);
        assert!((params.variance() - 16.0).abs() < 1e-12);
        assert!((params.std_dev() - 4.0).abs() < 1e-12);
    }

    // Tests changing the threshold revalidates it
    // Verified by skipping validation in with_k
    #[test]
    fn test_parameters_with_k() {
        let params = Parameters::new(10, 0.5, 2).expect("valid parameters");
        assert_eq!(params.with_k(7).expect("k within n").k(), 7);
        assert!(params.with_k(11).is_err());
    }

    // Tests the display form lists all three values
    // Verified by omitting k from the format string
    #[test]
    fn test_parameters_display() {
        let params = Parameters::new(20, 0.3, 8).expect("valid parameters");
        assert_eq!(params.to_string(), "n = 20, p = 0.3, k = 8");
    }
}
