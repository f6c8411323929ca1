//! Input/output: command line, presets, reports and error handling

/// Command-line interface and command dispatch
pub mod cli;
/// Numeric limits, thresholds and defaults
pub mod configuration;
/// Error types for validation and output
pub mod error;
/// Preset parameter scenarios
pub mod presets;
/// Progress display for long simulations
pub mod progress;
/// Plain-text and CSV rendering of results
pub mod report;
