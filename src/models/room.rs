//! Room: roster, game history ledger, and the single in-progress tournament.

use crate::config::ScoreboardConfig;
use crate::logic::manual_result;
use crate::models::player::{Player, PlayerId};
use crate::models::result::GameResult;
use crate::models::tournament::{TournamentError, TournamentEvent, TournamentState, TournamentType};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A recorded game. `result.results` are the exact point deltas that were applied.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub result: GameResult,
}

/// A shared scoring session identified by a code.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Room {
    pub code: String,
    pub config: ScoreboardConfig,
    pub players: Vec<Player>,
    /// Oldest first.
    pub history: Vec<HistoryEntry>,
    /// At most one tournament in progress.
    pub active: Option<TournamentState>,
}

impl Room {
    /// Create an empty room. The code is trimmed and lowercased.
    pub fn new(code: &str, config: ScoreboardConfig) -> Self {
        Self {
            code: code.trim().to_lowercase(),
            config,
            players: Vec::new(),
            history: Vec::new(),
            active: None,
        }
    }

    /// Register a player with 0 points. Names are trimmed and must not be blank.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self.players.len() >= self.config.max_players {
            return Err(TournamentError::RosterFull {
                max: self.config.max_players,
            });
        }
        let player = Player::new(name);
        let id = player.id.clone();
        log::info!("Room {}: player {} registered", self.code, name);
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player permanently. An in-progress tournament keeps its own snapshot.
    pub fn remove_player(&mut self, id: &str) -> Result<Player, TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| TournamentError::PlayerNotFound(id.to_string()))?;
        let removed = self.players.remove(idx);
        log::info!("Room {}: player {} removed", self.code, removed.name);
        Ok(removed)
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Scoreboard order: points descending, ties in registration order.
    pub fn standings(&self) -> Vec<Player> {
        crate::logic::rank_by_points(&self.players)
    }

    /// Games newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev()
    }

    /// Start a tournament from the current scoreboard, replacing any one in progress.
    pub fn start_tournament(&mut self, kind: TournamentType) -> Result<&TournamentState, TournamentError> {
        let state = TournamentState::create(kind, &self.standings())?;
        if let Some(previous) = &self.active {
            log::warn!(
                "Room {}: discarding in-progress {} tournament",
                self.code,
                previous.kind().display_name()
            );
        }
        Ok(&*self.active.insert(state))
    }

    pub fn active_tournament(&self) -> Option<&TournamentState> {
        self.active.as_ref()
    }

    /// Apply an event to the in-progress tournament. On error the state is unchanged.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        event: &TournamentEvent,
        rng: &mut R,
    ) -> Result<&TournamentState, TournamentError> {
        let current = self.active.as_ref().ok_or(TournamentError::NoActiveTournament)?;
        let next = current.apply(event, rng)?;
        Ok(&*self.active.insert(next))
    }

    /// Drop the in-progress tournament. The roster is untouched.
    pub fn cancel_tournament(&mut self) -> Option<TournamentState> {
        let cancelled = self.active.take();
        if let Some(state) = &cancelled {
            log::info!("Room {}: {} cancelled", self.code, state.kind().display_name());
        }
        cancelled
    }

    /// Compute the in-progress tournament's result for review. Nothing is recorded yet.
    pub fn finish_tournament(&self, today: NaiveDate) -> Result<GameResult, TournamentError> {
        self.active
            .as_ref()
            .ok_or(TournamentError::NoActiveTournament)?
            .finish(today)
    }

    /// Manual "add points" result for the current roster.
    pub fn manual_result(&self, game_name: &str, entered: &BTreeMap<PlayerId, u32>) -> GameResult {
        manual_result(&self.players, entered, game_name, &self.config.default_game_name)
    }

    /// Append a result to history, add its deltas to the roster, and end the tournament.
    /// Players no longer in the room are skipped.
    pub fn record_result(&mut self, result: GameResult) -> Uuid {
        for entry in &result.results {
            match self.players.iter_mut().find(|p| p.id == entry.id) {
                Some(p) => p.add_points(entry.points),
                None => log::warn!("Room {}: {} is no longer registered, skipped", self.code, entry.name),
            }
        }
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            result,
        };
        let id = entry.id;
        log::info!(
            "Room {}: recorded \"{}\" ({} players)",
            self.code,
            entry.result.game_name,
            entry.result.results.len()
        );
        self.history.push(entry);
        self.active = None;
        id
    }

    /// Delete a game and subtract exactly the deltas it applied.
    pub fn delete_game(&mut self, id: Uuid) -> Result<HistoryEntry, TournamentError> {
        let idx = self
            .history
            .iter()
            .position(|g| g.id == id)
            .ok_or(TournamentError::GameNotFound(id))?;
        let entry = self.history.remove(idx);
        for r in &entry.result.results {
            if let Some(p) = self.players.iter_mut().find(|p| p.id == r.id) {
                p.remove_points(r.points);
            }
        }
        log::info!("Room {}: deleted \"{}\"", self.code, entry.result.game_name);
        Ok(entry)
    }

    /// Rename a recorded game. Blank names are ignored.
    pub fn rename_game(&mut self, id: Uuid, name: &str) -> Result<(), TournamentError> {
        let entry = self
            .history
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(TournamentError::GameNotFound(id))?;
        entry.result = entry.result.renamed(name);
        Ok(())
    }

    /// Delete every player, game, and the in-progress tournament.
    pub fn reset(&mut self) {
        log::warn!("Room {}: reset", self.code);
        self.players.clear();
        self.history.clear();
        self.active = None;
    }

    pub fn to_json(&self) -> Result<String, TournamentError> {
        serde_json::to_string(self).map_err(|e| TournamentError::Snapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, TournamentError> {
        serde_json::from_str(json).map_err(|e| TournamentError::Snapshot(e.to_string()))
    }
}
