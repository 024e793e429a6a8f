//! GameResult: the normalized outcome every format produces for the ledger.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a result was produced.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "1v1")]
    OneVsOne,
    #[serde(rename = "team")]
    Team,
    #[serde(rename = "ffa")]
    FreeForAll,
    #[serde(rename = "mariokart")]
    MarioKart,
    #[serde(rename = "justfu")]
    JustFu,
}

/// One player's line in a result. `points` is the delta applied to the running total.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub id: PlayerId,
    pub name: String,
    pub points: u32,
    pub rank: u32,
    /// Only 1v1 results carry a win/loss record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub losses: Option<u32>,
}

impl ResultEntry {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, points: u32, rank: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            rank,
            wins: None,
            losses: None,
        }
    }

    pub fn with_record(mut self, wins: u32, losses: u32) -> Self {
        self.wins = Some(wins);
        self.losses = Some(losses);
        self
    }
}

/// Outcome of one game, in ranking order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_name: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub results: Vec<ResultEntry>,
}

impl GameResult {
    pub fn new(game_name: impl Into<String>, game_type: GameType, results: Vec<ResultEntry>) -> Self {
        Self {
            game_name: game_name.into(),
            game_type,
            results,
        }
    }

    pub fn entry(&self, id: &str) -> Option<&ResultEntry> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Copy with the host's reviewed points. Order and ranks are kept; players missing
    /// from `overrides` get 0.
    pub fn with_points(&self, overrides: &BTreeMap<PlayerId, u32>) -> Self {
        let results = self
            .results
            .iter()
            .map(|r| ResultEntry {
                points: overrides.get(&r.id).copied().unwrap_or(0),
                ..r.clone()
            })
            .collect();
        Self {
            results,
            ..self.clone()
        }
    }

    /// Copy under a different name (blank names are ignored).
    pub fn renamed(&self, name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return self.clone();
        }
        Self {
            game_name: name.to_string(),
            ..self.clone()
        }
    }
}
