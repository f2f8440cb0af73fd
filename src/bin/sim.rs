use anyhow::bail;
use battleship_ai::{
    fleet_lengths, init_logging, next_move_masked, next_target, score_grid, Difficulty, HuntQueue,
    Match, MatchStatus, Side,
};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Runaway guard; a 10×10 game ends well before this.
const MAX_MOVES: usize = 500;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BotTier {
    Easy,
    Medium,
    Hard,
}

impl From<BotTier> for Difficulty {
    fn from(tier: BotTier) -> Self {
        match tier {
            BotTier::Easy => Difficulty::Easy,
            BotTier::Medium => Difficulty::Medium,
            BotTier::Hard => Difficulty::Hard,
        }
    }
}

/// Strategy driving the stand-in human side (reveals are bot-only).
#[derive(ValueEnum, Clone, Copy, Debug)]
enum HumanTier {
    Easy,
    Medium,
}

#[derive(Parser)]
#[command(author, version, about = "AI-vs-AI battleship simulation", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = BotTier::Medium)]
    bot: BotTier,
    #[arg(long, value_enum, default_value_t = HumanTier::Medium)]
    human: HumanTier,
    #[arg(long, default_value_t = 1)]
    games: usize,
}

fn human_move<R: Rng>(
    rng: &mut R,
    game: &Match,
    tier: HumanTier,
    queue: &mut HuntQueue,
) -> Option<(usize, usize)> {
    let shots = game.human().outgoing();
    match tier {
        HumanTier::Easy => next_target(rng, &shots.attacked(), queue),
        HumanTier::Medium => {
            let grid = score_grid(shots.hits(), shots.misses(), &fleet_lengths());
            next_move_masked(&grid, &shots.attacked())
        }
    }
}

fn run_game(seed: u64, human: HumanTier, bot: BotTier) -> anyhow::Result<serde_json::Value> {
    let mut human_rng = SmallRng::seed_from_u64(seed);
    let mut bot_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let mut game = Match::new(&mut human_rng, bot.into());
    let mut human_queue = HuntQueue::new();
    let mut moves = 0usize;

    let winner = loop {
        if let MatchStatus::Over(winner) = game.status() {
            break winner;
        }
        if moves >= MAX_MOVES {
            bail!("game exceeded {} moves", MAX_MOVES);
        }
        moves += 1;
        match game.turn() {
            Side::Human => {
                let Some((row, col)) = human_move(&mut human_rng, &game, human, &mut human_queue)
                else {
                    bail!("human side found no fresh target before game end");
                };
                let outcome = game
                    .human_attack(row, col)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if matches!(human, HumanTier::Easy) && outcome.is_hit() {
                    human_queue.enqueue_neighbors(row, col, &game.human().outgoing().attacked());
                }
            }
            Side::Bot => {
                if game.bot_turn(&mut bot_rng).map_err(|e| anyhow::anyhow!(e))?.is_none() {
                    bail!("bot found no fresh target before game end");
                }
            }
        }
    };

    Ok(json!({
        "seed": seed,
        "winner": match winner { Side::Human => "human", Side::Bot => "bot" },
        "moves": moves,
        "human_shots": game.human().outgoing().attack_count(),
        "bot_shots": game.bot().outgoing().attack_count(),
    }))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let base_seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut games = Vec::with_capacity(cli.games);
    let mut human_wins = 0usize;
    let mut bot_wins = 0usize;

    for i in 0..cli.games {
        let result = run_game(base_seed.wrapping_add(2 * i as u64), cli.human, cli.bot)?;
        if result["winner"] == "human" {
            human_wins += 1;
        } else {
            bot_wins += 1;
        }
        games.push(result);
    }

    let summary = json!({
        "bot_difficulty": format!("{:?}", cli.bot),
        "human_strategy": format!("{:?}", cli.human),
        "human_wins": human_wins,
        "bot_wins": bot_wins,
        "games": games,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
