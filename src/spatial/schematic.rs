//! Engine schematic grid with on-demand numeric token extraction
//!
//! The schematic is an immutable character grid. Numbers are not stored;
//! a number is recovered from any one of its digits by scanning left and
//! right along the row until a non-digit or the grid edge is reached.
//! Rows may differ in length: cells past the end of a short row read as
//! absent, exactly like cells outside the grid.

use crate::io::configuration::NEIGHBOURHOOD_RADIUS;
use crate::io::error::Result;
use crate::io::input::read_lines;
use crate::spatial::cell::Cell;
use ndarray::Array2;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Grid coordinates as `[row, col]`
pub type Position = [usize; 2];

/// A maximal horizontal run of digits within one row
///
/// Ordering is by row, then start column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// Row containing the run
    pub row: usize,
    /// First column of the run (inclusive)
    pub start: usize,
    /// Last column of the run (inclusive)
    pub end: usize,
    /// Numeric value of the run
    pub value: u64,
}

/// Read-only character grid answering point and neighbourhood queries
#[derive(Debug, Clone)]
pub struct EngineSchematic {
    /// `None` marks cells beyond the end of a shorter row
    cells: Array2<Option<char>>,
}

impl EngineSchematic {
    /// Build a schematic from lines of text
    ///
    /// Trailing whitespace is stripped from each line. The grid is as wide
    /// as the widest line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end().chars().collect())
            .collect();

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = Array2::from_elem((height, width), None);
        for (row, chars) in rows.iter().enumerate() {
            for (col, &ch) in chars.iter().enumerate() {
                if let Some(cell) = cells.get_mut((row, col)) {
                    *cell = Some(ch);
                }
            }
        }

        Self { cells }
    }

    /// Load a schematic from a puzzle input file
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let schematic = Self::from_lines(read_lines(path)?);
        tracing::debug!(
            rows = schematic.rows(),
            cols = schematic.cols(),
            "loaded schematic"
        );
        Ok(schematic)
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Width of the widest row
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Character at a position, `None` outside the grid or past a row's end
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get((row, col)).copied().flatten()
    }

    fn digit_at(&self, row: usize, col: usize) -> Option<u8> {
        self.cell(row, col).map(Cell::classify).and_then(Cell::digit)
    }

    /// The digit run containing a position, with its span
    ///
    /// Returns `None` when the position is not a digit, lies outside the
    /// grid, or the run's value does not fit in a `u64`.
    pub fn token_at(&self, row: usize, col: usize) -> Option<Token> {
        self.digit_at(row, col)?;

        let mut start = col;
        while let Some(previous) = start.checked_sub(1) {
            if self.digit_at(row, previous).is_none() {
                break;
            }
            start = previous;
        }

        let mut end = col;
        while self.digit_at(row, end + 1).is_some() {
            end += 1;
        }

        // Leading zeros fold away numerically
        let value = (start..=end).try_fold(0_u64, |acc, column| {
            let digit = self.digit_at(row, column)?;
            acc.checked_mul(10)?.checked_add(u64::from(digit))
        })?;

        Some(Token {
            row,
            start,
            end,
            value,
        })
    }

    /// Value of the digit run containing a position
    ///
    /// Any cell of a run yields the same value.
    pub fn extract_number_at(&self, row: usize, col: usize) -> Option<u64> {
        self.token_at(row, col).map(|token| token.value)
    }

    /// Positions of every symbol cell in row-major order
    pub fn symbol_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_some_and(|ch| Cell::classify(ch).is_symbol()))
            .map(|(index, _)| Position::from(index))
    }

    /// Positions of every cell holding exactly `ch`, in row-major order
    pub fn positions_of(&self, ch: char) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(move |(_, cell)| **cell == Some(ch))
            .map(|(index, _)| Position::from(index))
    }

    /// Distinct values of the digit runs touching the 3x3 block around a position
    ///
    /// The centre cell is included. Deduplication is by value: two separate
    /// runs with the same value count once. Use [`Self::adjacent_tokens`]
    /// to keep them apart.
    pub fn tokens_around(&self, row: usize, col: usize) -> BTreeSet<u64> {
        neighbourhood(row, col)
            .filter_map(|[r, c]| self.extract_number_at(r, c))
            .collect()
    }

    /// Distinct digit runs touching the 3x3 block around a position
    ///
    /// Runs are deduplicated by span and ordered by row, then start column.
    pub fn adjacent_tokens(&self, row: usize, col: usize) -> Vec<Token> {
        let tokens: BTreeSet<Token> = neighbourhood(row, col)
            .filter_map(|[r, c]| self.token_at(r, c))
            .collect();
        tokens.into_iter().collect()
    }
}

/// Positions in the block around a cell, clipped at the zero edges
///
/// Far edges are left to the grid lookup, which reads them as absent.
fn neighbourhood(row: usize, col: usize) -> impl Iterator<Item = Position> {
    let rows = row.saturating_sub(NEIGHBOURHOOD_RADIUS)..=row.saturating_add(NEIGHBOURHOOD_RADIUS);
    rows.flat_map(move |r| {
        (col.saturating_sub(NEIGHBOURHOOD_RADIUS)..=col.saturating_add(NEIGHBOURHOOD_RADIUS))
            .map(move |c| [r, c])
    })
}

impl fmt::Display for EngineSchematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for ch in row.iter().flatten() {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
