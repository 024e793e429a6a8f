//! Room configuration: roster cap, default game name, and shuffle seeding.
//!
//! Defaults can be overridden from the environment:
//! `SCOREBOARD_MAX_PLAYERS`, `SCOREBOARD_DEFAULT_GAME_NAME`, `SCOREBOARD_SHUFFLE_SEED`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

fn default_max_players() -> usize {
    15
}

fn default_game_name() -> String {
    "Untitled Game".to_string()
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardConfig {
    #[serde(default = "default_max_players")]
    pub max_players: usize,
    #[serde(default = "default_game_name")]
    pub default_game_name: String,
    /// Fixed seed for Swiss re-pairing. None shuffles non-deterministically.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            max_players: default_max_players(),
            default_game_name: default_game_name(),
            shuffle_seed: None,
        }
    }
}

impl ScoreboardConfig {
    /// Defaults, overridden by any parseable environment variables.
    pub fn from_env() -> Self {
        let max_players = std::env::var("SCOREBOARD_MAX_PLAYERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_players);
        let default_game_name = std::env::var("SCOREBOARD_DEFAULT_GAME_NAME")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_game_name);
        let shuffle_seed = std::env::var("SCOREBOARD_SHUFFLE_SEED")
            .ok()
            .and_then(|v| v.parse().ok());
        log::debug!(
            "Scoreboard config: max_players={}, seeded={}",
            max_players,
            shuffle_seed.is_some()
        );
        Self {
            max_players,
            default_game_name,
            shuffle_seed,
        }
    }

    /// Randomness source for pairing. Seeded when `shuffle_seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
