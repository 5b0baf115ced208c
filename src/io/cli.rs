//! Command-line interface for solving a puzzle from an input file

use crate::io::configuration::GEAR_SYMBOL;
use crate::io::error::Result;
use crate::io::input::read_lines;
use crate::puzzles::{Part, calibration, cubes, engine, scratchcards};
use crate::spatial::schematic::EngineSchematic;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "aoc2023")]
#[command(
    author,
    version,
    about = "Solve Advent of Code 2023 puzzles from a puzzle input file"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Puzzle to solve
    #[command(subcommand)]
    pub puzzle: Puzzle,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments shared by every puzzle
#[derive(Args, Debug, Clone)]
pub struct PuzzleArgs {
    /// Puzzle input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Which part of the day to answer
    #[arg(short, long, value_enum, default_value_t = Part::One)]
    pub part: Part,
}

/// Available puzzles
#[derive(Subcommand, Debug, Clone)]
pub enum Puzzle {
    /// Day 1: sum calibration values built from first and last digits
    Calibration(PuzzleArgs),

    /// Day 2: sum possible game ids or minimum cube set powers
    Cubes(PuzzleArgs),

    /// Day 3: sum part numbers or gear ratios in an engine schematic
    Schematic {
        /// Input file and part
        #[command(flatten)]
        args: PuzzleArgs,

        /// Symbol marking a potential gear
        #[arg(short, long, default_value_t = GEAR_SYMBOL)]
        gear: char,
    },

    /// Day 4: sum scratchcard points or count won copies
    Scratchcards(PuzzleArgs),
}

impl Puzzle {
    /// Input file and part for this puzzle
    pub const fn args(&self) -> &PuzzleArgs {
        match self {
            Self::Calibration(args)
            | Self::Cubes(args)
            | Self::Schematic { args, .. }
            | Self::Scratchcards(args) => args,
        }
    }

    /// Short name used in diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Calibration(_) => "calibration",
            Self::Cubes(_) => "cubes",
            Self::Schematic { .. } => "schematic",
            Self::Scratchcards(_) => "scratchcards",
        }
    }
}

impl Cli {
    /// Input file named on the command line
    pub fn input(&self) -> &Path {
        &self.puzzle.args().input
    }
}

/// Runs the selected puzzle against its input file
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a new runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the input and compute the answer
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, or the
    /// puzzle's arithmetic overflows
    pub fn run(&self) -> Result<u64> {
        let start_time = Instant::now();
        let puzzle = &self.cli.puzzle;
        let input = self.cli.input();
        let part = puzzle.args().part;

        let answer = match puzzle {
            Puzzle::Calibration(_) => calibration::solve(&read_lines(input)?, part),
            Puzzle::Cubes(_) => cubes::solve(&read_lines(input)?, part),
            Puzzle::Schematic { gear, .. } => {
                engine::solve(&EngineSchematic::from_path(input)?, part, *gear)
            }
            Puzzle::Scratchcards(_) => scratchcards::solve(&read_lines(input)?, part),
        }?;

        tracing::info!(
            puzzle = puzzle.name(),
            part = ?part,
            answer,
            elapsed = ?start_time.elapsed(),
            "solved"
        );
        Ok(answer)
    }
}
