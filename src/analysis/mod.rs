//! Result assembly on top of the numerical core

/// Per-x comparison of the binomial against its approximations
pub mod comparison;
/// Probability mass arrays for charting
pub mod distribution;
/// Aggregated result record with approximation quality
pub mod evaluation;
/// Validated distribution parameters
pub mod parameters;
/// Monte Carlo estimation of the tail probability
pub mod simulation;
/// Interpretation hints derived from the parameters
pub mod tips;
