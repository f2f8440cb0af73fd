//! Hard-tier ship reveal: one hit uncovers the whole ship.

use crate::board::{Board, Cell};
use crate::common::{GameError, Outcome};
use crate::config::BOARD_SIZE;
use crate::ledger::AttackLedger;
use alloc::vec::Vec;
use log::debug;

/// Uncovers the full ship occupying `(row, col)`.
///
/// Every cell sharing the hit cell's ship id is recorded in `ledger` as a
/// hit and cleared from the board; cells that were already attacked are
/// not double-counted. Returns the newly attacked coordinates, so the
/// caller can credit `length − already-attacked` points in one turn.
///
/// A water coordinate reveals nothing and returns an empty list; the
/// caller normally resolves the attack first and only reveals on a hit.
pub fn reveal_ship(
    board: &mut Board,
    row: usize,
    col: usize,
    ledger: &mut AttackLedger,
) -> Result<Vec<(usize, usize)>, GameError> {
    let Cell::Occupied(id) = board.cell(row, col)? else {
        return Ok(Vec::new());
    };

    let mut revealed = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if board.cell_unchecked(r, c) != Cell::Occupied(id) {
                continue;
            }
            board.clear_cell(r, c)?;
            if !ledger.contains(r, c)? {
                ledger.record(r, c, Outcome::Hit)?;
                revealed.push((r, c));
            }
        }
    }
    debug!(
        "revealed {} at ({}, {}): {} new cell(s)",
        id,
        row,
        col,
        revealed.len()
    );
    Ok(revealed)
}
