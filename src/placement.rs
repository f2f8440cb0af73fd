//! Ship placements and their validity rules.

use crate::board::{Board, Cell};
use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A candidate ship position: origin cell, length, orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
}

impl Placement {
    /// Builds a placement, rejecting any that does not fit on the board.
    pub fn new(
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        if length == 0 || row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        match orientation {
            Orientation::Horizontal if col + length > BOARD_SIZE => {
                return Err(GameError::OutOfBounds {
                    row,
                    col: col + length - 1,
                });
            }
            Orientation::Vertical if row + length > BOARD_SIZE => {
                return Err(GameError::OutOfBounds {
                    row: row + length - 1,
                    col,
                });
            }
            _ => {}
        }
        Ok(Placement {
            row,
            col,
            length,
            orientation,
        })
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The cells the ship would occupy, origin first.
    pub fn footprint(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Inclusive bounding box of the footprint plus a one-cell halo,
    /// clipped to the board.
    fn clearance_box(&self) -> ((usize, usize), (usize, usize)) {
        let row_min = self.row.saturating_sub(1);
        let col_min = self.col.saturating_sub(1);
        let (row_max, col_max) = match self.orientation {
            Orientation::Horizontal => (
                (self.row + 1).min(BOARD_SIZE - 1),
                (self.col + self.length).min(BOARD_SIZE - 1),
            ),
            Orientation::Vertical => (
                (self.row + self.length).min(BOARD_SIZE - 1),
                (self.col + 1).min(BOARD_SIZE - 1),
            ),
        };
        ((row_min, col_min), (row_max, col_max))
    }

    /// Strict rule: the footprint and its full halo (diagonals included)
    /// must be water, so no two ships ever touch.
    pub fn fits_strict(&self, board: &Board) -> bool {
        let ((r0, c0), (r1, c1)) = self.clearance_box();
        for row in r0..=r1 {
            for col in c0..=c1 {
                if board.cell_unchecked(row, col) != Cell::Empty {
                    return false;
                }
            }
        }
        true
    }

    /// Relaxed rule: only the footprint itself must be water.
    pub fn fits_relaxed(&self, board: &Board) -> bool {
        self.footprint()
            .all(|(row, col)| board.cell_unchecked(row, col) == Cell::Empty)
    }
}
