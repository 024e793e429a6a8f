//! Free-for-all: one pool, one score per player, strict positional points.

use crate::logic::scoring::{positional_entries, rank_by_score};
use crate::models::{FreeForAllState, GameResult, GameType, Player, TournamentError};
use std::collections::BTreeMap;

pub fn create_free_for_all(roster: &[Player]) -> FreeForAllState {
    log::info!("Free-for-all created: {} players", roster.len());
    FreeForAllState {
        players: roster.to_vec(),
        scores: roster.iter().map(|p| (p.id.clone(), 0)).collect::<BTreeMap<_, _>>(),
    }
}

pub fn set_player_score(
    state: &FreeForAllState,
    player_id: &str,
    score: i64,
) -> Result<FreeForAllState, TournamentError> {
    if !state.players.iter().any(|p| p.id == player_id) {
        return Err(TournamentError::PlayerNotFound(player_id.to_string()));
    }
    let mut next = state.clone();
    next.scores.insert(player_id.to_string(), score);
    Ok(next)
}

/// Sort by score descending (ties keep roster order); `total - index` points, rank `index + 1`.
pub fn finish_free_for_all(state: &FreeForAllState) -> GameResult {
    let ranked = rank_by_score(&state.players, |p| state.score_of(&p.id));
    GameResult::new("Free For All", GameType::FreeForAll, positional_entries(&ranked))
}
