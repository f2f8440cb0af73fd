//! Constrained random board generation.
//!
//! Each ship gets a bounded number of random placement attempts under the
//! strict no-touch rule, then a bounded relaxed pass that only forbids
//! overlap. A ship that survives both passes unplaced is left off the
//! board and reported; the generator itself never fails outward.

use crate::board::{Board, ShipId};
use crate::common::GameError;
use crate::config::{
    ShipSpec, BOARD_SIZE, FLEET, RELAXED_PLACEMENT_ATTEMPTS, STRICT_PLACEMENT_ATTEMPTS,
};
use crate::placement::{Orientation, Placement};
use alloc::vec::Vec;
use log::warn;
use rand::Rng;

/// Whole-board retry cap for [`generate_complete`].
const COMPLETE_BOARD_ATTEMPTS: usize = 32;

/// What happened while generating a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    /// Ships that only fit once the halo rule was dropped.
    pub relaxed: Vec<ShipId>,
    /// Ships omitted entirely; the board is under-filled.
    pub unplaced: Vec<ShipId>,
}

impl PlacementReport {
    /// True when every ship of the set was placed.
    pub fn complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Generates a board for `fleet`, ship ids taken from table order.
///
/// With `strict` set, each ship first gets [`STRICT_PLACEMENT_ATTEMPTS`]
/// tries under the halo rule before the relaxed fallback; without it only
/// the relaxed pass runs. Deterministic for a given `rng` sequence.
pub fn generate<R: Rng>(rng: &mut R, fleet: &[ShipSpec], strict: bool) -> (Board, PlacementReport) {
    let mut board = Board::empty();
    let mut report = PlacementReport::default();

    for (index, spec) in fleet.iter().enumerate() {
        let id = ShipId::new(index as u8);
        let mut placement = None;

        if strict {
            placement = try_place(rng, &board, spec.length(), STRICT_PLACEMENT_ATTEMPTS, true);
        }
        if placement.is_none() {
            if strict {
                warn!(
                    "{}: strict placement exhausted after {} attempts, dropping halo rule",
                    id, STRICT_PLACEMENT_ATTEMPTS
                );
            }
            placement = try_place(rng, &board, spec.length(), RELAXED_PLACEMENT_ATTEMPTS, false);
            if placement.is_some() && strict {
                report.relaxed.push(id);
            }
        }

        match placement {
            Some(p) => {
                // footprint was validated against the current board
                if board.place(&p, id).is_err() {
                    report.unplaced.push(id);
                }
            }
            None => {
                let err = GameError::PlacementExhausted { ship: id };
                warn!("{}; board will be under-filled", err);
                report.unplaced.push(id);
            }
        }
    }

    (board, report)
}

/// Generates a fully populated standard-fleet board, retrying whole-board
/// generation on the (rare) under-filled outcome. Cheap enough to serve as
/// a fallback when an externally captured board is unavailable.
pub fn generate_complete<R: Rng>(rng: &mut R) -> Board {
    let mut last = None;
    for _ in 0..COMPLETE_BOARD_ATTEMPTS {
        let (board, report) = generate(rng, &FLEET, true);
        if report.complete() {
            return board;
        }
        warn!("regenerating board: {} ship(s) unplaced", report.unplaced.len());
        last = Some(board);
    }
    // Unreachable in practice for the standard fleet; surface the best
    // attempt rather than failing.
    last.unwrap_or_else(Board::empty)
}

fn try_place<R: Rng>(
    rng: &mut R,
    board: &Board,
    length: usize,
    attempts: usize,
    strict: bool,
) -> Option<Placement> {
    for _ in 0..attempts {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        // an origin too close to the edge simply costs an attempt
        let Ok(placement) = Placement::new(row, col, length, orientation) else {
            continue;
        };
        let fits = if strict {
            placement.fits_strict(board)
        } else {
            placement.fits_relaxed(board)
        };
        if fits {
            return Some(placement);
        }
    }
    None
}
