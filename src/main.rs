//! Batch simulation CLI.
//!
//! Plays bot-vs-bot games and prints aggregate standings.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --games N    Number of games to play (default: 10)
//!   --threads N  Number of parallel threads (default: 1)
//!   --seed N     Random seed, 0 for entropy (default: 0)
//!   --quiet      Suppress per-game progress output

use std::env;
use std::process;
use std::time::Instant;

use triprime::board::ALL_PLAYERS;
use triprime::sim::{run_batch, BatchConfig, BatchSummary};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = BatchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !config.quiet {
        eprintln!(
            "Simulation: {} games, {} threads, seed {}",
            config.num_games, config.threads, config.seed
        );
    }

    let start = Instant::now();
    let outcomes = match run_batch(&config) {
        Ok(outcomes) => outcomes,
        Err(err) => {
            eprintln!("simulation failed: {}", err);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    let summary = BatchSummary::from_outcomes(&outcomes);
    println!(
        "Completed {} games in {:.1}s",
        summary.games,
        elapsed.as_secs_f64()
    );
    for &player in &ALL_PLAYERS {
        println!(
            "  {:<7} {} wins, {:.1} avg score",
            player,
            summary.wins[player.index()],
            summary.avg_scores[player.index()]
        );
    }
    println!("  shared victories: {}", summary.draws);
}

fn print_usage() {
    eprintln!("Usage: triprime [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N    Number of games to play (default: 10)");
    eprintln!("  --threads N  Number of parallel threads (default: 1)");
    eprintln!("  --seed N     Random seed, 0 for entropy (default: 0)");
    eprintln!("  --quiet      Suppress per-game progress output");
    eprintln!("  --help       Show this help");
}
