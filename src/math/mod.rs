//! Numerical core: log-space combinatorics and tail probabilities

/// Exact binomial point and tail probabilities
pub mod binomial;
/// Binomial coefficients in log space
pub mod combinatorics;
/// Normal approximation and the complementary error function
pub mod normal;
/// Poisson approximation via forward recurrence
pub mod poisson;
/// Probability clamping, error percentages and the scaled recurrence accumulator
pub mod probability;
