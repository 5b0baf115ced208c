//! Calibration values from the first and last digit of each line
//!
//! Part one reads ASCII digits only. Part two also accepts the spelled
//! words `one` through `nine`, which may overlap (`eightwo` holds both an
//! eight and a two).

use crate::io::configuration::DIGIT_WORDS;
use crate::io::error::{Result, WithContext, overflow, parse_error};
use crate::io::input::numbered_records;
use crate::puzzles::Part;

/// Sum the calibration values of every non-blank line
///
/// # Errors
///
/// Returns an error if a line holds no digit or the sum overflows
pub fn solve(lines: &[String], part: Part) -> Result<u64> {
    let spelled = part == Part::Two;
    let mut total = 0_u64;

    for (line_number, line) in numbered_records(lines) {
        let value = calibration_value(line, spelled).with_line(line_number)?;
        tracing::trace!(line_number, value, "calibration value");
        total = total
            .checked_add(value)
            .ok_or_else(|| overflow("calibration sum"))?;
    }

    Ok(total)
}

/// Combine the first and last digit of a line into a two-digit number
///
/// # Errors
///
/// Returns an error if the line holds no digit
pub fn calibration_value(line: &str, spelled: bool) -> Result<u64> {
    let first = (0..line.len()).find_map(|start| digit_starting_at(line, start, spelled));
    let last = (1..=line.len())
        .rev()
        .find_map(|end| digit_ending_at(line, end, spelled));

    match (first, last) {
        (Some(first), Some(last)) => Ok(u64::from(first) * 10 + u64::from(last)),
        _ => Err(parse_error(&format!("no digit found in '{line}'"))),
    }
}

/// Digit whose text begins at byte offset `start`
fn digit_starting_at(line: &str, start: usize, spelled: bool) -> Option<u32> {
    let rest = line.get(start..)?;
    if let Some(digit) = rest.chars().next().and_then(|ch| ch.to_digit(10)) {
        return Some(digit);
    }
    if !spelled {
        return None;
    }
    (1..)
        .zip(DIGIT_WORDS)
        .find_map(|(value, word)| rest.starts_with(word).then_some(value))
}

/// Digit whose text finishes just before byte offset `end`
fn digit_ending_at(line: &str, end: usize, spelled: bool) -> Option<u32> {
    let head = line.get(..end)?;
    if let Some(digit) = head.chars().next_back().and_then(|ch| ch.to_digit(10)) {
        return Some(digit);
    }
    if !spelled {
        return None;
    }
    (1..)
        .zip(DIGIT_WORDS)
        .find_map(|(value, word)| head.ends_with(word).then_some(value))
}
