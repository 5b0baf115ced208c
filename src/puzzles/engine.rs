//! Part number and gear ratio sums over an engine schematic

use crate::io::configuration::{EMPTY_CELL, GEAR_PART_COUNT};
use crate::io::error::{Result, invalid_parameter, overflow};
use crate::puzzles::Part;
use crate::spatial::schematic::EngineSchematic;

/// Answer one part of the schematic puzzle
///
/// # Errors
///
/// Returns an error if `gear` is not a symbol character or a sum overflows
pub fn solve(schematic: &EngineSchematic, part: Part, gear: char) -> Result<u64> {
    match part {
        Part::One => part_number_sum(schematic),
        Part::Two => gear_ratio_sum(schematic, gear),
    }
}

/// Sum the numbers around every symbol
///
/// Each symbol contributes the sum of its distinct adjacent values, so a
/// number touching two symbols is counted twice.
///
/// # Errors
///
/// Returns an error if the sum overflows
pub fn part_number_sum(schematic: &EngineSchematic) -> Result<u64> {
    let mut total = 0_u64;

    for [row, col] in schematic.symbol_positions() {
        for value in schematic.tokens_around(row, col) {
            total = total
                .checked_add(value)
                .ok_or_else(|| overflow("part number sum"))?;
        }
    }

    Ok(total)
}

/// Sum the gear ratios of every gear symbol with exactly two adjacent numbers
///
/// # Errors
///
/// Returns an error if:
/// - `gear` is a digit or the empty cell marker
/// - A ratio or the running sum overflows
pub fn gear_ratio_sum(schematic: &EngineSchematic, gear: char) -> Result<u64> {
    if gear.is_ascii_digit() || gear == EMPTY_CELL {
        return Err(invalid_parameter(
            "gear",
            &gear,
            &"gear marker must be a symbol character",
        ));
    }

    let mut total = 0_u64;
    let mut gears = 0_usize;

    for [row, col] in schematic.positions_of(gear) {
        let parts = schematic.tokens_around(row, col);
        if parts.len() != GEAR_PART_COUNT {
            continue;
        }

        let ratio = parts
            .iter()
            .try_fold(1_u64, |acc, &value| acc.checked_mul(value))
            .ok_or_else(|| overflow("gear ratio"))?;
        total = total
            .checked_add(ratio)
            .ok_or_else(|| overflow("gear ratio sum"))?;
        gears += 1;
    }

    tracing::debug!(gears, "summed gear ratios");
    Ok(total)
}
