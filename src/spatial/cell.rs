//! Classification of schematic characters

use crate::io::configuration::EMPTY_CELL;

/// Role a single schematic character plays in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Decimal digit with its numeric value
    Digit(u8),
    /// Separator that belongs to nothing
    Empty,
    /// Any other character, including whitespace and punctuation
    Symbol(char),
}

impl Cell {
    /// Classify a character
    ///
    /// Only ASCII `0`..`9` count as digits.
    pub const fn classify(ch: char) -> Self {
        match ch {
            '0'..='9' => Self::Digit(ch as u8 - b'0'),
            EMPTY_CELL => Self::Empty,
            other => Self::Symbol(other),
        }
    }

    /// Digit value if this cell is a digit
    pub const fn digit(self) -> Option<u8> {
        match self {
            Self::Digit(value) => Some(value),
            Self::Empty | Self::Symbol(_) => None,
        }
    }

    /// Whether this cell is a symbol
    pub const fn is_symbol(self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}
