/// Command-line parsing and puzzle dispatch
pub mod cli;
/// Puzzle constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Puzzle input loading
pub mod input;
/// Diagnostic tracing setup
pub mod logging;
