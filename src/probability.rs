//! Probability-density targeting engine (medium and hard tiers).
//!
//! For every remaining ship length, a window of that length slides along
//! each row and each column. A window blocked by a recorded miss is no
//! placement at all; a window overlapping recorded hits is a placement
//! worth chasing, so its unhit cells are weighted up. Contributions are
//! summed over all windows and lengths into one aggregate grid.
//!
//! The hit multiplier is asymmetric: `4 × hits-in-window` along rows but a
//! flat `4` along columns, so the engine presses harder along a row once a
//! hit is found there. Do not unify the two; move selection depends on it.

use crate::cellset::Cells;
use crate::config::BOARD_SIZE;
use crate::grid::Grid;
use crate::placement::Orientation;
use log::trace;

/// Aggregate score per cell; higher means more likely to hold an unhit
/// ship segment.
pub type ScoreGrid = Grid<u32, BOARD_SIZE>;

/// Scores every cell given the hit/miss masks and the ship lengths still
/// in play. Zero-length entries (already-sunk ships) are skipped. Cells
/// recorded as hits score zero everywhere; attacked cells are *not*
/// otherwise excluded; pick moves with [`next_move_masked`] or filter
/// before calling [`next_move`].
pub fn score_grid(hits: &Cells, misses: &Cells, lengths: &[usize]) -> ScoreGrid {
    let mut total = ScoreGrid::new();

    for &len in lengths {
        if len == 0 || len > BOARD_SIZE {
            continue;
        }
        let mut per_length = ScoreGrid::new();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            score_windows(&mut per_length, hits, misses, len, orientation);
        }
        total += per_length;
    }

    total
}

fn score_windows(
    acc: &mut ScoreGrid,
    hits: &Cells,
    misses: &Cells,
    len: usize,
    orientation: Orientation,
) {
    for lane in 0..BOARD_SIZE {
        for start in 0..=BOARD_SIZE - len {
            let mut hit_cells = 0usize;
            let mut blocked = false;
            for k in 0..len {
                let (row, col) = window_cell(lane, start + k, orientation);
                if misses.contains(row, col).unwrap_or(false) {
                    blocked = true;
                    break;
                }
                if hits.contains(row, col).unwrap_or(false) {
                    hit_cells += 1;
                }
            }
            if blocked {
                continue;
            }

            // Row windows scale with the number of hits they cover;
            // column windows get the flat bonus.
            let multiplier = match orientation {
                Orientation::Horizontal if hit_cells > 0 => 4 * hit_cells,
                Orientation::Vertical if hit_cells > 0 => 4,
                _ => 1,
            };
            for k in 0..len {
                let (row, col) = window_cell(lane, start + k, orientation);
                if !hits.contains(row, col).unwrap_or(false) {
                    acc[(row, col)] += (len * multiplier) as u32;
                }
            }
        }
    }
}

#[inline]
fn window_cell(lane: usize, offset: usize, orientation: Orientation) -> (usize, usize) {
    match orientation {
        Orientation::Horizontal => (lane, offset),
        Orientation::Vertical => (offset, lane),
    }
}

/// The cell of strictly maximum score, ties broken by first occurrence in
/// row-major order. Does not know about attacked cells; on an all-zero
/// grid this is `(0, 0)`.
pub fn next_move(grid: &ScoreGrid) -> (usize, usize) {
    let mut best = (0, 0);
    let mut best_score = None;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let score = grid[(row, col)];
            if best_score.map_or(true, |b| score > b) {
                best = (row, col);
                best_score = Some(score);
            }
        }
    }
    trace!("next move {:?} scores {}", best, best_score.unwrap_or(0));
    best
}

/// Like [`next_move`] but skips attacked cells during the scan, so the
/// returned cell is always fresh. `None` when every cell is attacked.
pub fn next_move_masked(grid: &ScoreGrid, attacked: &Cells) -> Option<(usize, usize)> {
    let mut best = None;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if attacked.contains(row, col).unwrap_or(true) {
                continue;
            }
            let score = grid[(row, col)];
            if best.map_or(true, |(_, b)| score > b) {
                best = Some(((row, col), score));
            }
        }
    }
    best.map(|(coord, _)| coord)
}
