//! Puzzle input loading

use crate::io::error::{PuzzleError, Result};
use std::path::Path;

/// Read a puzzle input file as lines with trailing whitespace stripped
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist
/// - The file cannot be read as UTF-8 text
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PuzzleError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|source| PuzzleError::FileSystem {
            path: path.to_path_buf(),
            operation: "read",
            source,
        })?;

    let lines: Vec<String> = split_lines(&contents);
    tracing::debug!(path = %path.display(), lines = lines.len(), "read puzzle input");
    Ok(lines)
}

/// Split text into lines, stripping the trailing newline and whitespace of each
pub fn split_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Iterate the non-blank lines of a puzzle input with one-based line numbers
pub fn numbered_records(lines: &[String]) -> impl Iterator<Item = (usize, &str)> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.as_str()))
        .filter(|(_, line)| !line.trim().is_empty())
}
