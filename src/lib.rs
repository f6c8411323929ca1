//! Numerically stable binomial tail probabilities P(X > k) with Poisson and
//! Normal approximations
//!
//! The numerical core works in log space and with ratio recurrences so that
//! n up to 100 000 and p arbitrarily close to 0 or 1 never overflow or
//! collapse. Result assembly, presets and a small command-line front end sit
//! on top of it.

#![forbid(unsafe_code)]

/// Validated parameters, result assembly, charting data and simulation
pub mod analysis;
/// Command line, presets, reports and error handling
pub mod io;
/// Log-space combinatorics and the tail probability calculators
pub mod math;

pub use analysis::evaluation::{CalculationResult, evaluate};
pub use analysis::parameters::Parameters;
pub use io::error::{Result, TailError};
