//! Batch self-play simulation.
//!
//! Plays full bot-vs-bot games with seeded random strategies, optionally
//! across a rayon thread pool, and aggregates outcomes. Each game gets
//! its own RNG stream derived from the batch seed plus the game id, so a
//! batch is reproducible regardless of thread count.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::board::{PlayerId, ALL_PLAYERS, PLAYER_COUNT};
use crate::error::EngineError;
use crate::player::{RandomStrategy, Seat};
use crate::session::GameSession;
use crate::sink::NullSink;

/// Configuration for a simulation batch.
#[derive(Clone)]
pub struct BatchConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            num_games: 10,
            threads: 1,
            seed: 0,
            quiet: false,
        }
    }
}

/// Result of one simulated game.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    /// Sequential game id within the batch.
    pub game_id: usize,
    /// Final scores, indexed by player.
    pub scores: [u32; PLAYER_COUNT],
    /// The sole top scorer, or `None` for a shared victory.
    pub winner: Option<PlayerId>,
}

/// Aggregate statistics over a completed batch.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub games: usize,
    /// Sole victories per player.
    pub wins: [usize; PLAYER_COUNT],
    /// Games with a shared top score.
    pub draws: usize,
    /// Mean final score per player.
    pub avg_scores: [f64; PLAYER_COUNT],
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[GameOutcome]) -> BatchSummary {
        let mut summary = BatchSummary {
            games: outcomes.len(),
            ..BatchSummary::default()
        };
        let mut totals = [0u64; PLAYER_COUNT];
        for outcome in outcomes {
            match outcome.winner {
                Some(winner) => summary.wins[winner.index()] += 1,
                None => summary.draws += 1,
            }
            for (total, &score) in totals.iter_mut().zip(&outcome.scores) {
                *total += u64::from(score);
            }
        }
        if !outcomes.is_empty() {
            for (avg, total) in summary.avg_scores.iter_mut().zip(totals) {
                *avg = total as f64 / outcomes.len() as f64;
            }
        }
        summary
    }
}

fn bot_seats(seed: u64) -> Vec<Seat> {
    ALL_PLAYERS
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let strategy = if seed != 0 {
                RandomStrategy::seeded(seed.wrapping_add(i as u64))
            } else {
                RandomStrategy::new()
            };
            Seat::new(id, format!("bot-{}", id), Box::new(strategy))
        })
        .collect()
}

/// Plays one full bot game and reports its outcome.
pub fn play_game(game_id: usize, seed: u64) -> Result<GameOutcome, EngineError> {
    let mut session = GameSession::new(bot_seats(seed))?;
    let standings = session.run_game(&mut NullSink)?;
    let winner = match standings.winners.as_slice() {
        [sole] => Some(*sole),
        _ => None,
    };
    Ok(GameOutcome {
        game_id,
        scores: standings.scores,
        winner,
    })
}

/// Plays a full batch. When `config.threads > 1`, games run concurrently
/// on a rayon thread pool.
pub fn run_batch(config: &BatchConfig) -> Result<Vec<GameOutcome>, EngineError> {
    if config.threads > 1 {
        run_batch_parallel(config)
    } else {
        run_batch_sequential(config)
    }
}

fn game_seed(config: &BatchConfig, game_id: usize) -> u64 {
    if config.seed != 0 {
        // Stride by player count so per-seat seeds never collide
        // across games.
        config
            .seed
            .wrapping_add(game_id as u64 * PLAYER_COUNT as u64)
    } else {
        0
    }
}

fn report_progress(config: &BatchConfig, done: usize, outcome: &GameOutcome, started: Instant) {
    if config.quiet {
        return;
    }
    let verdict = match outcome.winner {
        Some(winner) => format!("{} wins", winner),
        None => "shared victory".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} {:?} ({:.2}s)",
        done,
        config.num_games,
        verdict,
        outcome.scores,
        started.elapsed().as_secs_f64(),
    );
}

fn run_batch_sequential(config: &BatchConfig) -> Result<Vec<GameOutcome>, EngineError> {
    let mut outcomes = Vec::with_capacity(config.num_games);
    for game_id in 0..config.num_games {
        let started = Instant::now();
        let outcome = play_game(game_id, game_seed(config, game_id))?;
        report_progress(config, game_id + 1, &outcome, started);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn run_batch_parallel(config: &BatchConfig) -> Result<Vec<GameOutcome>, EngineError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let completed = AtomicUsize::new(0);
    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|game_id| {
                let started = Instant::now();
                let outcome = play_game(game_id, game_seed(config, game_id))?;
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                report_progress(config, done, &outcome, started);
                Ok(outcome)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_game_is_reproducible() {
        let a = play_game(0, 42).unwrap();
        let b = play_game(0, 42).unwrap();
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.winner, b.winner);
    }

    #[test]
    fn winner_holds_the_top_score() {
        for seed in 1..10 {
            let outcome = play_game(0, seed * 100).unwrap();
            let best = *outcome.scores.iter().max().unwrap();
            match outcome.winner {
                Some(winner) => {
                    assert_eq!(outcome.scores[winner.index()], best);
                    let at_best = outcome.scores.iter().filter(|&&s| s == best).count();
                    assert_eq!(at_best, 1);
                }
                None => {
                    let at_best = outcome.scores.iter().filter(|&&s| s == best).count();
                    assert!(at_best > 1);
                }
            }
        }
    }

    #[test]
    fn sequential_batch_plays_every_game() {
        let config = BatchConfig {
            num_games: 5,
            threads: 1,
            seed: 7,
            quiet: true,
        };
        let outcomes = run_batch(&config).unwrap();
        assert_eq!(outcomes.len(), 5);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.game_id, i);
        }
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let sequential = BatchConfig {
            num_games: 4,
            threads: 1,
            seed: 99,
            quiet: true,
        };
        let parallel = BatchConfig {
            threads: 2,
            ..sequential.clone()
        };
        let mut a = run_batch(&sequential).unwrap();
        let mut b = run_batch(&parallel).unwrap();
        a.sort_by_key(|o| o.game_id);
        b.sort_by_key(|o| o.game_id);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.scores, y.scores);
            assert_eq!(x.winner, y.winner);
        }
    }

    #[test]
    fn summary_aggregates_wins_and_averages() {
        let outcomes = vec![
            GameOutcome {
                game_id: 0,
                scores: [10, 4, 2],
                winner: Some(PlayerId::Red),
            },
            GameOutcome {
                game_id: 1,
                scores: [6, 6, 0],
                winner: None,
            },
        ];
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.games, 2);
        assert_eq!(summary.wins, [1, 0, 0]);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.avg_scores, [8.0, 5.0, 1.0]);
    }
}
