//! Puzzle constants and runtime configuration defaults

// Schematic grid layout
/// Separator character that is neither a digit nor a symbol
pub const EMPTY_CELL: char = '.';
/// Symbol marking a potential gear in the schematic
pub const GEAR_SYMBOL: char = '*';
/// Number of adjacent part numbers that turns a gear symbol into a gear
pub const GEAR_PART_COUNT: usize = 2;

// Adjacency is 8-connected, so one cell in every direction
/// Distance scanned around a cell when collecting adjacent tokens
pub const NEIGHBOURHOOD_RADIUS: usize = 1;

// Bag contents the cube game is checked against
/// Red cubes loaded in the bag
pub const BAG_RED: u64 = 12;
/// Green cubes loaded in the bag
pub const BAG_GREEN: u64 = 13;
/// Blue cubes loaded in the bag
pub const BAG_BLUE: u64 = 14;

/// Spelled-out digits, indexed by value minus one
pub const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

// Logging
/// Filter used when neither `RUST_LOG` nor `-v` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
