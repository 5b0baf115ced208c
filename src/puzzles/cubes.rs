//! Cube game maxima, possibility checks and powers
//!
//! A game is a series of rounds drawn from a bag of red, green and blue
//! cubes. Only the largest count seen for each colour matters.

use crate::io::configuration::{BAG_BLUE, BAG_GREEN, BAG_RED};
use crate::io::error::{PuzzleError, Result, WithContext, overflow, parse_error};
use crate::io::input::numbered_records;
use crate::puzzles::Part;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Cube colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Colour {
    /// Red cubes
    Red,
    /// Green cubes
    Green,
    /// Blue cubes
    Blue,
}

impl Colour {
    /// Number of cubes of this colour loaded in the bag
    pub const fn bag_limit(self) -> u64 {
        match self {
            Self::Red => BAG_RED,
            Self::Green => BAG_GREEN,
            Self::Blue => BAG_BLUE,
        }
    }
}

impl FromStr for Colour {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            other => Err(parse_error(&format!("unknown cube colour '{other}'"))),
        }
    }
}

/// Cubes revealed in one handful
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    /// Count revealed per colour
    pub cubes: BTreeMap<Colour, u64>,
}

impl FromStr for Round {
    type Err = PuzzleError;

    /// Parse `3 blue, 4 red`
    fn from_str(s: &str) -> Result<Self> {
        let mut cubes: BTreeMap<Colour, u64> = BTreeMap::new();

        for reveal in s.split(',') {
            let (count, colour) = reveal
                .trim()
                .split_once(' ')
                .ok_or_else(|| {
                    parse_error(&format!("expected '<count> <colour>', got '{reveal}'"))
                })?;
            cubes.insert(colour.trim().parse()?, count.parse()?);
        }

        Ok(Self { cubes })
    }
}

/// A game with the largest count seen per colour across its rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Game number
    pub id: u64,
    /// Largest count revealed per colour
    pub cubes: BTreeMap<Colour, u64>,
}

impl Game {
    /// Fold rounds into per-colour maxima
    pub fn new(id: u64, rounds: &[Round]) -> Self {
        let mut cubes = BTreeMap::new();
        for round in rounds {
            for (&colour, &count) in &round.cubes {
                let max = cubes.entry(colour).or_insert(0);
                *max = count.max(*max);
            }
        }
        Self { id, cubes }
    }

    /// Whether every colour stays within the bag's contents
    pub fn is_possible(&self) -> bool {
        self.cubes
            .iter()
            .all(|(colour, &count)| count <= colour.bag_limit())
    }

    /// Product of the per-colour maxima
    ///
    /// Colours never revealed are left out of the product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product overflows
    pub fn power(&self) -> Result<u64> {
        self.cubes
            .values()
            .try_fold(1_u64, |acc, &count| acc.checked_mul(count))
            .ok_or_else(|| overflow("cube power"))
    }
}

impl FromStr for Game {
    type Err = PuzzleError;

    /// Parse `Game 1: 3 blue, 4 red; 1 red, 2 green`
    fn from_str(s: &str) -> Result<Self> {
        let (label, rounds) = s
            .split_once(':')
            .ok_or_else(|| parse_error(&"expected 'Game <id>: <rounds>'"))?;

        let id: u64 = label
            .split_whitespace()
            .next_back()
            .ok_or_else(|| parse_error(&"missing game id"))?
            .parse()?;

        let rounds = rounds
            .split(';')
            .map(str::parse)
            .collect::<Result<Vec<Round>>>()?;

        Ok(Self::new(id, &rounds))
    }
}

/// Answer one part of the cube game
///
/// # Errors
///
/// Returns an error if a line is malformed or a sum overflows
pub fn solve(lines: &[String], part: Part) -> Result<u64> {
    let mut total = 0_u64;

    for (line_number, line) in numbered_records(lines) {
        let game = line.parse::<Game>().with_line(line_number)?;
        let contribution = match part {
            Part::One => {
                if game.is_possible() {
                    game.id
                } else {
                    0
                }
            }
            Part::Two => game.power()?,
        };
        total = total
            .checked_add(contribution)
            .ok_or_else(|| overflow("cube game sum"))?;
    }

    Ok(total)
}
