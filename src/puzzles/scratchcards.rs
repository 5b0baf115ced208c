//! Scratchcard points and copy-count propagation

use crate::io::error::{PuzzleError, Result, WithContext, overflow, parse_error};
use crate::io::input::numbered_records;
use crate::puzzles::Part;
use std::collections::BTreeSet;
use std::str::FromStr;

/// One scratchcard with its winning numbers and the numbers scratched off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card number
    pub id: u64,
    /// Numbers that win
    pub winning: BTreeSet<u64>,
    /// Numbers on the card, in printed order
    pub numbers: Vec<u64>,
}

impl Card {
    /// How many of the card's numbers are winning numbers
    pub fn matches(&self) -> usize {
        self.numbers
            .iter()
            .filter(|&number| self.winning.contains(number))
            .count()
    }

    /// Points: one for the first match, doubled for each further match
    ///
    /// # Errors
    ///
    /// Returns an error if the points do not fit in a `u64`
    pub fn points(&self) -> Result<u64> {
        match self.matches() {
            0 => Ok(0),
            matches => u32::try_from(matches - 1)
                .ok()
                .and_then(|shift| 1_u64.checked_shl(shift))
                .ok_or_else(|| overflow("card points")),
        }
    }
}

fn parse_numbers(field: &str) -> Result<Vec<u64>> {
    field
        .split_whitespace()
        .map(|number| number.parse().map_err(PuzzleError::from))
        .collect()
}

impl FromStr for Card {
    type Err = PuzzleError;

    /// Parse `Card 1: 41 48 83 | 83 86  6`
    fn from_str(s: &str) -> Result<Self> {
        let (label, numbers) = s
            .split_once(':')
            .ok_or_else(|| parse_error(&"expected 'Card <id>: <winning> | <numbers>'"))?;
        let (winning, numbers) = numbers
            .split_once('|')
            .ok_or_else(|| parse_error(&"missing '|' between number lists"))?;

        let id: u64 = label
            .split_whitespace()
            .next_back()
            .ok_or_else(|| parse_error(&"missing card id"))?
            .parse()?;

        Ok(Self {
            id,
            winning: parse_numbers(winning)?.into_iter().collect(),
            numbers: parse_numbers(numbers)?,
        })
    }
}

/// Total cards held once every won copy has been scored
///
/// Card `i` with `n` matches adds its copy count to each of the next `n`
/// cards. Copies never extend past the end of the table.
///
/// # Errors
///
/// Returns an error if a copy count overflows
pub fn total_cards(cards: &[Card]) -> Result<u64> {
    let mut copies = vec![1_u64; cards.len()];

    for (index, card) in cards.iter().enumerate() {
        let held = copies.get(index).copied().unwrap_or(0);
        for target in copies.iter_mut().skip(index + 1).take(card.matches()) {
            *target = target
                .checked_add(held)
                .ok_or_else(|| overflow("card copies"))?;
        }
    }

    copies
        .iter()
        .try_fold(0_u64, |acc, &count| acc.checked_add(count))
        .ok_or_else(|| overflow("card total"))
}

/// Answer one part of the scratchcard puzzle
///
/// # Errors
///
/// Returns an error if a line is malformed or a count overflows
pub fn solve(lines: &[String], part: Part) -> Result<u64> {
    let cards = numbered_records(lines)
        .map(|(line_number, line)| line.parse::<Card>().with_line(line_number))
        .collect::<Result<Vec<Card>>>()?;
    tracing::debug!(cards = cards.len(), "parsed scratchcards");

    match part {
        Part::One => cards.iter().try_fold(0_u64, |acc, card| {
            acc.checked_add(card.points()?)
                .ok_or_else(|| overflow("points total"))
        }),
        Part::Two => total_cards(&cards),
    }
}
