//! Tests for numeric limits and runtime defaults

#[cfg(test)]
mod tests {
    use binotail::io::configuration::{
        DEFAULT_K, DEFAULT_MAX_BARS, DEFAULT_N, DEFAULT_P, DEFAULT_SIMULATION_TRIALS,
        LOG_UNDERFLOW_GUARD, MAX_TRIALS_N, MIN_TRIALS_N, NORMAL_ACCEPTABLE_MIN_COUNT,
        NORMAL_CALCULABLE_MIN_COUNT, NORMAL_RECOMMENDED_MIN_COUNT, POISSON_RECOMMENDED_LAMBDA,
        RESCALE_CEILING, SIMULATION_BATCH_SIZE, TAIL_CONTEXT_BARS,
    };

    // Tests the accepted range of trials
    // Verified by changing the upper limit
    #[test]
    fn test_trial_limits() {
        assert_eq!(MIN_TRIALS_N, 1);
        assert_eq!(MAX_TRIALS_N, 100_000);
    }

    // Tests the Normal quality bands are strictly ordered
    // Verified by swapping the acceptable and recommended thresholds
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_normal_bands_ordered() {
        assert_eq!(NORMAL_RECOMMENDED_MIN_COUNT, 10.0);
        assert_eq!(NORMAL_ACCEPTABLE_MIN_COUNT, 5.0);
        assert_eq!(NORMAL_CALCULABLE_MIN_COUNT, 1.0);
        assert!(NORMAL_CALCULABLE_MIN_COUNT < NORMAL_ACCEPTABLE_MIN_COUNT);
        assert!(NORMAL_ACCEPTABLE_MIN_COUNT < NORMAL_RECOMMENDED_MIN_COUNT);
        assert_eq!(POISSON_RECOMMENDED_LAMBDA, 10.0);
    }

    // Tests the defaults form the quality control scenario
    // Verified by changing the default probability
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_defaults_form_valid_triple() {
        assert_eq!((DEFAULT_N, DEFAULT_P, DEFAULT_K), (100, 0.02, 5));
        assert!(DEFAULT_K <= DEFAULT_N);
    }

    // Tests chart and simulation sizes are usable
    // Verified by setting the batch size to zero
    #[test]
    fn test_display_and_batch_sizes() {
        assert_eq!(TAIL_CONTEXT_BARS, 20);
        assert!(DEFAULT_MAX_BARS > TAIL_CONTEXT_BARS);
        assert!(SIMULATION_BATCH_SIZE > 0);
        assert!(DEFAULT_SIMULATION_TRIALS >= SIMULATION_BATCH_SIZE);
    }

    // Tests the recurrence guards stay inside the double range
    // Verified by moving the underflow guard below the subnormal range
    #[test]
    fn test_recurrence_guards_representable() {
        assert!(LOG_UNDERFLOW_GUARD.exp() > 0.0);
        assert!(RESCALE_CEILING.is_finite());
        assert!((RESCALE_CEILING * RESCALE_CEILING).is_infinite());
    }
}
