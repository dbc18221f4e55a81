//! Integration tests for the triprime engine.
//!
//! Covers full seeded bot games with invariant sweeps, snapshot
//! checkpoint/resume across sessions, interactive input teardown, and the
//! simulation binary's command line surface.

use std::process::Command;

use triprime::board::{ALL_PLAYERS, FINAL_ROUND, PLAYER_COUNT};
use triprime::error::EngineError;
use triprime::player::{input_channel, RandomStrategy, Seat};
use triprime::session::GameSession;
use triprime::sink::{NullSink, WriterSink};

fn bot_seats(seed: u64) -> Vec<Seat> {
    ALL_PLAYERS
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            Seat::new(
                id,
                format!("bot-{}", id),
                Box::new(RandomStrategy::seeded(seed + i as u64)),
            )
        })
        .collect()
}

#[test]
fn full_games_preserve_invariants_at_every_round() {
    for seed in [3, 71, 222, 9001] {
        let mut session = GameSession::new(bot_seats(seed)).unwrap();
        session.setup(&mut NullSink).unwrap();
        assert!(session.state().check_invariants().is_ok());

        let mut last_scores = [0u32; PLAYER_COUNT];
        while !session.state().is_over() {
            let scores = session.run_round(&mut NullSink).unwrap();
            assert!(session.state().check_invariants().is_ok());
            // Scores never decrease.
            for (now, before) in scores.iter().zip(&last_scores) {
                assert!(now >= before);
            }
            last_scores = scores;
        }
        assert_eq!(session.state().round(), FINAL_ROUND + 1);
    }
}

#[test]
fn sink_observes_every_round() {
    let mut session = GameSession::new(bot_seats(55)).unwrap();
    let mut sink = WriterSink::new(Vec::new());
    session.run_game(&mut sink).unwrap();

    assert!(sink.updates() > 0);
    let log = String::from_utf8(sink.into_inner()).unwrap();
    for round in 1..=FINAL_ROUND {
        assert!(
            log.contains(&format!("round {} begins", round)),
            "missing round {} in log",
            round
        );
    }
}

#[test]
fn checkpoint_resume_plays_to_completion() {
    let mut session = GameSession::new(bot_seats(77)).unwrap();
    session.setup(&mut NullSink).unwrap();
    for _ in 0..4 {
        session.run_round(&mut NullSink).unwrap();
    }
    let document = session.snapshot().unwrap();

    let mut resumed = GameSession::new(bot_seats(1234)).unwrap();
    resumed.restore(&document).unwrap();
    assert_eq!(resumed.state().round(), 5);
    assert_eq!(resumed.state().scores(), session.state().scores());

    let standings = resumed.run_game(&mut NullSink).unwrap();
    assert!(resumed.state().is_over());
    // Scores only grew from the checkpoint.
    for (final_score, at_checkpoint) in standings.scores.iter().zip(session.state().scores()) {
        assert!(*final_score >= at_checkpoint);
    }
}

#[test]
fn dropped_input_endpoint_aborts_the_game() {
    let (human, endpoint) = input_channel();
    let mut seats = bot_seats(5);
    seats[0] = Seat::new(ALL_PLAYERS[0], "human", Box::new(human));
    let mut session = GameSession::new(seats).unwrap();

    drop(endpoint);
    let err = session.run_game(&mut NullSink).unwrap_err();
    assert!(matches!(err, EngineError::InputAborted { .. }));
}

#[test]
fn simulation_binary_reports_standings() {
    let exe = env!("CARGO_BIN_EXE_triprime");
    let output = Command::new(exe)
        .args(["--games", "2", "--seed", "11", "--quiet"])
        .output()
        .expect("failed to run triprime");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Completed 2 games"));
    for &player in &ALL_PLAYERS {
        assert!(stdout.contains(&player.to_string()));
    }
}

#[test]
fn simulation_binary_rejects_unknown_flags() {
    let exe = env!("CARGO_BIN_EXE_triprime");
    let output = Command::new(exe)
        .arg("--bogus")
        .output()
        .expect("failed to run triprime");
    assert!(!output.status.success());
}
