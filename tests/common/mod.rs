//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use game_night_scoreboard::{Player, ScoreboardConfig};
use rand::rngs::StdRng;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n` players `p0..p{n-1}` with strictly descending points (p0 is the top seed).
pub fn seeded_roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::with_id(format!("p{i}"), format!("P{i}"), (100 - i) as u32))
        .collect()
}

/// `n` players `p0..p{n-1}` all on 0 points.
pub fn fresh_roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::with_id(format!("p{i}"), format!("P{i}"), 0))
        .collect()
}

pub fn ids(players: &[Player]) -> Vec<&str> {
    players.iter().map(|p| p.id.as_str()).collect()
}

/// Config with a fixed shuffle seed so pairings repeat run to run.
pub fn seeded_config() -> ScoreboardConfig {
    ScoreboardConfig {
        shuffle_seed: Some(7),
        ..ScoreboardConfig::default()
    }
}

pub fn rng() -> StdRng {
    seeded_config().rng()
}

pub fn game_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}
