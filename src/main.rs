//! CLI entry point for the Advent of Code 2023 puzzle solvers

use aoc2023::io::cli::{Cli, PuzzleRunner};
use aoc2023::io::logging;
use clap::Parser;
use std::process::ExitCode;

// The answer goes to stdout and failures to stderr; nowhere else prints
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match PuzzleRunner::new(cli).run() {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
