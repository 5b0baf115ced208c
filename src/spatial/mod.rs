//! Spatial data structures for the engine schematic
//!
//! This module contains:
//! - Character classification into digits, separators and symbols
//! - The schematic grid with token extraction and neighbourhood queries

/// Digit, empty and symbol classification
pub mod cell;
/// Engine schematic grid and token queries
pub mod schematic;

pub use schematic::{EngineSchematic, Position, Token};
