//! Easy-tier hunt/target strategy.
//!
//! Random shots until something is hit, then the four axis-neighbors of
//! each hit are queued and probed first. The queue is strictly FIFO and
//! may hold duplicates or since-attacked cells; those are skipped on pop,
//! not treated as errors.

use crate::cellset::Cells;
use crate::config::{BOARD_SIZE, HUNT_SEARCH_ATTEMPTS};
use alloc::collections::VecDeque;
use log::{debug, trace};
use rand::Rng;

/// Pending candidate coordinates, consumed head-first.
#[derive(Debug, Clone, Default)]
pub struct HuntQueue {
    pending: VecDeque<(usize, usize)>,
}

impl HuntQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn pop(&mut self) -> Option<(usize, usize)> {
        self.pending.pop_front()
    }

    /// Queues the in-bounds axis-neighbors of a fresh hit that are not
    /// already attacked, in fixed north, south, west, east order.
    pub fn enqueue_neighbors(&mut self, row: usize, col: usize, attacked: &Cells) {
        let neighbors = [
            (row.checked_sub(1), Some(col)),
            (row.checked_add(1), Some(col)),
            (Some(row), col.checked_sub(1)),
            (Some(row), col.checked_add(1)),
        ];
        for (r, c) in neighbors {
            let (Some(r), Some(c)) = (r, c) else { continue };
            if r >= BOARD_SIZE || c >= BOARD_SIZE {
                continue;
            }
            if attacked.contains(r, c).unwrap_or(true) {
                continue;
            }
            trace!("queueing neighbor ({}, {})", r, c);
            self.pending.push_back((r, c));
        }
    }
}

/// Picks the next coordinate to attack.
///
/// Queue entries are tried first, skipping any that were attacked since
/// being queued. With the queue drained, random coordinates are drawn for
/// up to [`HUNT_SEARCH_ATTEMPTS`] tries; after that a single row-major
/// sweep finds a fresh cell if one exists at all. `None` therefore means
/// the board is fully attacked, the normal end-of-game result, not an
/// error.
pub fn next_target<R: Rng>(
    rng: &mut R,
    attacked: &Cells,
    queue: &mut HuntQueue,
) -> Option<(usize, usize)> {
    let mut attempts = 0;
    while attempts < HUNT_SEARCH_ATTEMPTS {
        attempts += 1;
        if let Some((row, col)) = queue.pop() {
            if attacked.contains(row, col).unwrap_or(true) {
                trace!("queued ({}, {}) already attacked, skipping", row, col);
                continue;
            }
            debug!("targeting ({}, {}) from queue", row, col);
            return Some((row, col));
        }
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if !attacked.contains(row, col).unwrap_or(true) {
            debug!("targeting random ({}, {})", row, col);
            return Some((row, col));
        }
    }

    // Random search exhausted its budget; sweep once so the last fresh
    // cells are still found deterministically.
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !attacked.contains(row, col).unwrap_or(true) {
                debug!("targeting ({}, {}) by sweep", row, col);
                return Some((row, col));
            }
        }
    }
    debug!("no fresh target remains");
    None
}
