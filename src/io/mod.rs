//! Input/output: command line, configuration, errors, progress and reports

/// Command-line parsing and run orchestration
pub mod cli;
/// Simulation constants and defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Terminal progress display
pub mod progress;
/// Text report rendering and output
pub mod report;
