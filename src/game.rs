//! Match controller: the turn state machine over two engines.
//!
//! Attacks apply strictly in the order issued; the hunt queue and score
//! grid are path-dependent, so the controller is the sole owner of both
//! engines and serializes every shot through itself.

use crate::board::Board;
use crate::common::{CellStatus, GameError, Outcome};
use crate::config::{fleet_lengths, BOARD_SIZE};
use crate::engine::{GameEngine, GameStatus};
use crate::hunt::{self, HuntQueue};
use crate::probability;
use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

/// Bot difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Hunt/target: random shots, then neighbor probing after a hit.
    Easy,
    /// Probability-density targeting.
    Medium,
    /// Probability-density targeting; every hit reveals the whole ship.
    Hard,
}

/// A side of the match; doubles as the winner id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    InProgress,
    Over(Side),
}

/// One completed bot move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMove {
    pub coord: (usize, usize),
    pub outcome: Outcome,
    /// Cells newly uncovered by a hard-tier reveal (empty otherwise).
    pub revealed: Vec<(usize, usize)>,
}

/// Two engines plus the turn state machine: the attacker keeps the turn
/// as long as it hits, and the match latches terminally once either
/// fleet total is reached.
pub struct Match {
    human: GameEngine,
    bot: GameEngine,
    difficulty: Difficulty,
    queue: HuntQueue,
    turn: Side,
}

impl Match {
    /// Fresh match with both boards randomly generated.
    pub fn new<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Self {
        Self::with_boards(
            difficulty,
            crate::generator::generate_complete(rng),
            crate::generator::generate_complete(rng),
        )
    }

    /// Match over externally supplied boards (captured or fixture). The
    /// human moves first.
    pub fn with_boards(difficulty: Difficulty, human_board: Board, bot_board: Board) -> Self {
        Self {
            human: GameEngine::new(human_board),
            bot: GameEngine::new(bot_board),
            difficulty,
            queue: HuntQueue::new(),
            turn: Side::Human,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn human(&self) -> &GameEngine {
        &self.human
    }

    pub fn bot(&self) -> &GameEngine {
        &self.bot
    }

    pub fn status(&self) -> MatchStatus {
        match self.human.status() {
            GameStatus::Won => MatchStatus::Over(Side::Human),
            GameStatus::Lost => MatchStatus::Over(Side::Bot),
            GameStatus::InProgress => MatchStatus::InProgress,
        }
    }

    /// Status view of one side's waters, for external display consumers.
    pub fn statuses(&self, side: Side) -> [[CellStatus; BOARD_SIZE]; BOARD_SIZE] {
        match side {
            Side::Human => self.human.own_statuses(),
            Side::Bot => self.bot.own_statuses(),
        }
    }

    fn ensure_live(&self) -> Result<(), GameError> {
        match self.status() {
            MatchStatus::Over(_) => Err(GameError::MatchOver),
            MatchStatus::InProgress => Ok(()),
        }
    }

    /// Applies a human shot at the bot's board. The human keeps the turn
    /// after a hit; a miss hands play to the bot.
    pub fn human_attack(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        self.ensure_live()?;
        if self.turn != Side::Human {
            return Err(GameError::OutOfTurn);
        }
        let outcome = self.bot.receive_attack(row, col)?;
        self.human.record_shot(row, col, outcome)?;
        debug!("human fires at ({}, {}): {:?}", row, col, outcome);
        self.after_move(Side::Human, outcome.is_hit());
        Ok(outcome)
    }

    /// Plays one bot shot according to the difficulty tier. `Ok(None)`
    /// means no fresh target remains (only possible on an exhausted
    /// board). The bot keeps the turn after a hit.
    pub fn bot_turn<R: Rng>(&mut self, rng: &mut R) -> Result<Option<BotMove>, GameError> {
        self.ensure_live()?;
        if self.turn != Side::Bot {
            return Err(GameError::OutOfTurn);
        }
        let mv = match self.difficulty {
            Difficulty::Easy => self.bot_turn_hunt(rng)?,
            Difficulty::Medium => self.bot_turn_probability(false)?,
            Difficulty::Hard => self.bot_turn_probability(true)?,
        };
        if let Some(mv) = &mv {
            debug!(
                "bot ({:?}) fires at {:?}: {:?}",
                self.difficulty, mv.coord, mv.outcome
            );
            self.after_move(Side::Bot, mv.outcome.is_hit());
        }
        Ok(mv)
    }

    fn after_move(&mut self, attacker: Side, was_hit: bool) {
        if let MatchStatus::Over(winner) = self.status() {
            info!("match over, {:?} wins", winner);
            return;
        }
        if !was_hit {
            self.turn = match attacker {
                Side::Human => Side::Bot,
                Side::Bot => Side::Human,
            };
        }
    }

    fn bot_turn_hunt<R: Rng>(&mut self, rng: &mut R) -> Result<Option<BotMove>, GameError> {
        let attacked = self.human.incoming().attacked();
        let Some((row, col)) = hunt::next_target(rng, &attacked, &mut self.queue) else {
            return Ok(None);
        };
        let outcome = self.human.receive_attack(row, col)?;
        self.bot.record_shot(row, col, outcome)?;
        if outcome.is_hit() {
            let attacked = self.human.incoming().attacked();
            self.queue.enqueue_neighbors(row, col, &attacked);
        }
        Ok(Some(BotMove {
            coord: (row, col),
            outcome,
            revealed: Vec::new(),
        }))
    }

    fn bot_turn_probability(&mut self, reveal: bool) -> Result<Option<BotMove>, GameError> {
        // The medium tier gets no sink feedback and always weighs the
        // full fleet, as the hard tier learns lengths only via reveals.
        let lengths = if reveal {
            self.bot.remaining_lengths()
        } else {
            fleet_lengths()
        };
        let grid = probability::score_grid(
            self.bot.outgoing().hits(),
            self.bot.outgoing().misses(),
            &lengths,
        );
        let attacked = self.bot.outgoing().attacked();
        let Some((row, col)) = probability::next_move_masked(&grid, &attacked) else {
            return Ok(None);
        };

        if reveal {
            if let Some((id, revealed)) = self.human.receive_reveal(row, col)? {
                self.bot.record_reveal(id, &revealed)?;
                return Ok(Some(BotMove {
                    coord: (row, col),
                    outcome: Outcome::Sunk(id),
                    revealed,
                }));
            }
        }
        let outcome = self.human.receive_attack(row, col)?;
        self.bot.record_shot(row, col, outcome)?;
        Ok(Some(BotMove {
            coord: (row, col),
            outcome,
            revealed: Vec::new(),
        }))
    }
}
