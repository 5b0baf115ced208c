//! Advent of Code 2023 solvers built around an engine schematic grid scanner
//!
//! The schematic scanner treats puzzle input as an immutable character grid,
//! recovers multi-digit numbers from any one of their cells and collects the
//! distinct numbers adjacent to a symbol. The remaining days are line-oriented
//! parsers that share the crate's input handling and error type.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Per-day puzzle solvers
pub mod puzzles;
/// Character grid classification and the engine schematic
pub mod spatial;

pub use io::error::{PuzzleError, Result};
pub use spatial::schematic::EngineSchematic;
