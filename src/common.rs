//! Common types: error taxonomy, attack outcomes, cell status.

use crate::board::ShipId;
use core::fmt;

/// Result of resolving an attack against a board.
///
/// [`crate::Board::resolve`] only ever reports `Hit` or `Miss`; `Sunk` is
/// produced by [`crate::GameEngine`], which has the ledger needed to tell
/// a plain hit from a finishing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Attack landed on an occupied cell.
    Hit,
    /// Attack landed on open water.
    Miss,
    /// Attack completed a ship; carries the ship's id.
    Sunk(ShipId),
}

impl Outcome {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, Outcome::Miss)
    }
}

/// Per-cell classification for external status consumers (e.g. a hardware
/// display). Derived entirely from an attack ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    Unattacked,
    Miss,
    Hit,
}

/// Errors surfaced by the core.
///
/// Exhausting the hunt search is not an error: it is reported as a normal
/// "no move available" (`None`) result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Coordinate already present in the attack ledger.
    RepeatedAttack { row: usize, col: usize },
    /// A ship could not be placed within the bounded attempt budget.
    PlacementExhausted { ship: ShipId },
    /// Attack issued for the side whose turn it is not.
    OutOfTurn,
    /// Attack issued after the match reached a terminal state.
    MatchOver,
    /// A coordinate label (e.g. "B7") could not be parsed.
    BadLabel,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::RepeatedAttack { row, col } => {
                write!(f, "coordinate ({}, {}) was already attacked", row, col)
            }
            GameError::PlacementExhausted { ship } => {
                write!(f, "could not place {} within the attempt budget", ship)
            }
            GameError::OutOfTurn => write!(f, "attack issued out of turn"),
            GameError::MatchOver => write!(f, "the match is already over"),
            GameError::BadLabel => write!(f, "unparsable coordinate label"),
        }
    }
}
