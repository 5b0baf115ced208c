//! Puzzle solvers, one module per day
//!
//! This module contains:
//! - Calibration value recovery (day 1)
//! - Cube game bookkeeping (day 2)
//! - Engine schematic reductions (day 3)
//! - Scratchcard scoring and copy propagation (day 4)

/// Calibration values from the first and last digit of each line
pub mod calibration;
/// Cube game maxima, possibility checks and powers
pub mod cubes;
/// Part number and gear ratio sums over an engine schematic
pub mod engine;
/// Scratchcard points and copy-count propagation
pub mod scratchcards;

use clap::ValueEnum;

/// Which half of a day's puzzle to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    /// The first puzzle of the day
    #[value(name = "1")]
    One,
    /// The second puzzle, unlocked by the first
    #[value(name = "2")]
    Two,
}
