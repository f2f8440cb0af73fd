//! Per-side game engine: own board plus both attack ledgers.

use crate::board::{Board, Cell, ShipId};
use crate::common::{CellStatus, GameError, Outcome};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
use crate::generator::generate_complete;
use crate::ledger::AttackLedger;
use crate::reveal::reveal_ship;
use alloc::vec::Vec;
use rand::Rng;

/// Game status from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One player's complete game state: their fleet, the shots received on
/// it (`incoming`), and the shots they fired at the opponent
/// (`outgoing`). The engine owns all mutation; the strategy functions it
/// feeds are pure.
pub struct GameEngine {
    board: Board,
    incoming: AttackLedger,
    outgoing: AttackLedger,
    known_sunk: [bool; NUM_SHIPS],
}

impl GameEngine {
    /// Engine over an existing board (e.g. one captured externally).
    pub fn new(board: Board) -> Self {
        Self {
            board,
            incoming: AttackLedger::new(),
            outgoing: AttackLedger::new(),
            known_sunk: [false; NUM_SHIPS],
        }
    }

    /// Engine over a freshly generated full-fleet board.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(generate_complete(rng))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ledger of shots the opponent fired at this board.
    pub fn incoming(&self) -> &AttackLedger {
        &self.incoming
    }

    /// Ledger of shots this side fired at the opponent.
    pub fn outgoing(&self) -> &AttackLedger {
        &self.outgoing
    }

    /// Resolves and records an opponent shot against this board.
    ///
    /// Rejects out-of-bounds coordinates before touching the ledger and
    /// repeated coordinates without mutating anything. A hit that
    /// completes a ship is reported as `Sunk`.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        match self.board.cell(row, col)? {
            Cell::Occupied(id) => {
                self.incoming.record(row, col, Outcome::Hit)?;
                let sunk = self
                    .board
                    .ship_cells(id)
                    .iter()
                    .all(|&(r, c)| self.incoming.hits().contains(r, c).unwrap_or(false));
                if sunk {
                    Ok(Outcome::Sunk(id))
                } else {
                    Ok(Outcome::Hit)
                }
            }
            Cell::Empty => {
                self.incoming.record(row, col, Outcome::Miss)?;
                Ok(Outcome::Miss)
            }
        }
    }

    /// Hard-tier reveal against this board: uncovers the whole ship at
    /// the coordinate, records every cell as hit, clears the cells.
    /// Returns the ship and its newly attacked cells, or `None` on water
    /// (the caller then falls back to a plain attack).
    pub fn receive_reveal(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Option<(ShipId, Vec<(usize, usize)>)>, GameError> {
        let Cell::Occupied(id) = self.board.cell(row, col)? else {
            return Ok(None);
        };
        let revealed = reveal_ship(&mut self.board, row, col, &mut self.incoming)?;
        Ok(Some((id, revealed)))
    }

    /// Records the outcome of a shot this side fired.
    pub fn record_shot(&mut self, row: usize, col: usize, outcome: Outcome) -> Result<(), GameError> {
        self.outgoing.record(row, col, outcome)?;
        if let Outcome::Sunk(id) = outcome {
            if id.index() < NUM_SHIPS {
                self.known_sunk[id.index()] = true;
            }
        }
        Ok(())
    }

    /// Records a whole revealed enemy ship as hits and remembers it sunk.
    pub fn record_reveal(
        &mut self,
        id: ShipId,
        cells: &[(usize, usize)],
    ) -> Result<(), GameError> {
        for &(row, col) in cells {
            if !self.outgoing.contains(row, col)? {
                self.outgoing.record(row, col, Outcome::Hit)?;
            }
        }
        if id.index() < NUM_SHIPS {
            self.known_sunk[id.index()] = true;
        }
        Ok(())
    }

    /// Lost when the fixed fleet total has been hit on this board, won
    /// when this side has hit that many enemy cells.
    pub fn status(&self) -> GameStatus {
        if self.incoming.hit_count() >= TOTAL_SHIP_CELLS {
            GameStatus::Lost
        } else if self.outgoing.hit_count() >= TOTAL_SHIP_CELLS {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Enemy ship lengths still in play, index-aligned with the fleet;
    /// entries are zero for ships this side knows are gone. Fixed size
    /// for `no_std` callers; the probability engine skips zeros.
    pub fn remaining_lengths(&self) -> [usize; NUM_SHIPS] {
        core::array::from_fn(|i| {
            if self.known_sunk[i] {
                0
            } else {
                FLEET[i].length()
            }
        })
    }

    /// Status view of this side's own waters.
    pub fn own_statuses(&self) -> [[CellStatus; BOARD_SIZE]; BOARD_SIZE] {
        self.incoming.statuses()
    }

    /// Status view of the enemy waters as known to this side.
    pub fn target_statuses(&self) -> [[CellStatus; BOARD_SIZE]; BOARD_SIZE] {
        self.outgoing.statuses()
    }
}
