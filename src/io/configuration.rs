//! Numeric limits, approximation thresholds and runtime defaults

// Parameter domain accepted by validation
/// Largest number of trials accepted for a computation
pub const MAX_TRIALS_N: usize = 100_000;
/// Smallest number of trials accepted for a computation
pub const MIN_TRIALS_N: usize = 1;

// Distribution sampling for charts
/// Maximum number of mass points produced for display
pub const DEFAULT_MAX_BARS: usize = 300;
/// Number of points shown beyond the threshold k
pub const TAIL_CONTEXT_BARS: usize = 20;
/// Number of points in the approximation comparison series
pub const DEFAULT_COMPARISON_POINTS: usize = 50;

// Normal approximation quality bands, applied to both n·p and n·(1-p)
/// Both expected counts at least this large: Normal approximation recommended
pub const NORMAL_RECOMMENDED_MIN_COUNT: f64 = 10.0;
/// Both expected counts at least this large: usable but not ideal
pub const NORMAL_ACCEPTABLE_MIN_COUNT: f64 = 5.0;
/// Floor below which the Normal approximation is not computed at all
pub const NORMAL_CALCULABLE_MIN_COUNT: f64 = 1.0;

/// Poisson approximation is advised while λ = n·p stays below this
pub const POISSON_RECOMMENDED_LAMBDA: f64 = 10.0;

// Numerical guards for the forward recurrences
/// Log-magnitude below which a starting term is carried in scaled form
pub const LOG_UNDERFLOW_GUARD: f64 = -700.0;
/// Scaled running values are renormalised once they exceed this
pub const RESCALE_CEILING: f64 = 1e250;

// Default values for configurable parameters
/// Default number of trials (quality control scenario)
pub const DEFAULT_N: usize = 100;
/// Default success probability
pub const DEFAULT_P: f64 = 0.02;
/// Default threshold
pub const DEFAULT_K: usize = 5;

/// Fixed seed for reproducible simulations
pub const DEFAULT_SEED: u64 = 42;
/// Default number of simulated experiments
pub const DEFAULT_SIMULATION_TRIALS: usize = 10_000;
/// Experiments simulated between progress updates
pub const SIMULATION_BATCH_SIZE: usize = 250;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
