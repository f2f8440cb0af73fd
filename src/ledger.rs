//! The attack ledger: which coordinates were attacked, and how they fell.
//!
//! Hits and misses are kept as two disjoint masks; the attacked set is
//! their union. A coordinate is never in both, and every attacked
//! coordinate is in exactly one; the ledger is the single source of
//! truth the strategies derive their views from.

use crate::cellset::Cells;
use crate::common::{CellStatus, GameError, Outcome};
use crate::config::BOARD_SIZE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackLedger {
    hits: Cells,
    misses: Cells,
}

impl AttackLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Has this coordinate been attacked?
    pub fn contains(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.hits.contains(row, col)? || self.misses.contains(row, col)?)
    }

    /// Records an attack outcome. `Sunk` counts as a hit.
    pub fn record(&mut self, row: usize, col: usize, outcome: Outcome) -> Result<(), GameError> {
        if self.contains(row, col)? {
            return Err(GameError::RepeatedAttack { row, col });
        }
        if outcome.is_hit() {
            self.hits.insert(row, col)
        } else {
            self.misses.insert(row, col)
        }
    }

    /// Mask of attacked coordinates that were hits.
    pub fn hits(&self) -> &Cells {
        &self.hits
    }

    /// Mask of attacked coordinates that were misses.
    pub fn misses(&self) -> &Cells {
        &self.misses
    }

    /// Union of hits and misses.
    pub fn attacked(&self) -> Cells {
        self.hits | self.misses
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn attack_count(&self) -> usize {
        self.hits.len() + self.misses.len()
    }

    /// Classification of a single cell for status consumers.
    pub fn status(&self, row: usize, col: usize) -> Result<CellStatus, GameError> {
        if self.hits.contains(row, col)? {
            Ok(CellStatus::Hit)
        } else if self.misses.contains(row, col)? {
            Ok(CellStatus::Miss)
        } else {
            Ok(CellStatus::Unattacked)
        }
    }

    /// Full-board status view, row-major. Flattening the two sides into a
    /// hardware frame is the caller's concern.
    pub fn statuses(&self) -> [[CellStatus; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|row| {
            core::array::from_fn(|col| {
                // indices in range by construction
                self.status(row, col).unwrap_or(CellStatus::Unattacked)
            })
        })
    }
}
