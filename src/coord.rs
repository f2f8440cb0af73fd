//! Coordinate labels for external input sources.
//!
//! Voice and CLI collaborators hand coordinates over as labels like "B7":
//! a column letter A–J and a 1-based row number. Parsing is strict; fuzzy
//! transcript cleanup belongs to the collaborator, not the core.

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use alloc::string::String;
use core::fmt::Write;

/// Parses a label like `"b3"` or `"J10"` into `(row, col)`.
pub fn parse_coord(label: &str) -> Result<(usize, usize), GameError> {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();
    let letter = chars.next().ok_or(GameError::BadLabel)?;
    let col = match letter.to_ascii_uppercase() {
        c @ 'A'..='Z' => (c as usize) - ('A' as usize),
        _ => return Err(GameError::BadLabel),
    };
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::BadLabel);
    }
    let number: usize = digits.parse().map_err(|_| GameError::BadLabel)?;
    if number == 0 {
        return Err(GameError::BadLabel);
    }
    let row = number - 1;
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(GameError::OutOfBounds { row, col });
    }
    Ok((row, col))
}

/// Formats `(row, col)` back into a label like `"B7"`.
pub fn format_coord(row: usize, col: usize) -> Result<String, GameError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(GameError::OutOfBounds { row, col });
    }
    let mut label = String::new();
    let letter = (b'A' + col as u8) as char;
    // both writes are infallible on String
    let _ = write!(label, "{}{}", letter, row + 1);
    Ok(label)
}
