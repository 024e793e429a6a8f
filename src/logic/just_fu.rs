//! Just-Fu-style tournament: 3 score-ranked groups, then a championship of group winners
//! plus wild cards, and silver/bronze finals for the rest.

use crate::logic::scoring::{positional_entries, rank_by_score};
use crate::logic::seeding::{rank_by_points, require_player_count, seed_groups};
use crate::models::{
    find_final_mut, FinalBracket, FinalTier, GameResult, GameType, JustFuState, Player, Stage,
    TournamentError, BRACKET_PLAYER_COUNT,
};
use std::collections::{BTreeMap, HashSet};

const GROUP_COUNT: usize = 3;
const WILD_CARDS: usize = 3;
const LOWER_FINAL_SIZE: usize = 4;

/// Seed 3 serpentine groups. Fails with `InvalidPlayerCount` unless the roster has 14 players.
pub fn create_just_fu(roster: &[Player]) -> Result<JustFuState, TournamentError> {
    require_player_count(roster, BRACKET_PLAYER_COUNT)?;
    let groups = seed_groups(roster, GROUP_COUNT);
    log::info!("Just Fu tournament created: {} groups", groups.len());
    Ok(JustFuState {
        stage: Stage::Groups,
        players: rank_by_points(roster),
        groups,
        group_scores: roster.iter().map(|p| (p.id.clone(), 0)).collect(),
        finals: Vec::new(),
    })
}

pub fn set_group_score(
    state: &JustFuState,
    player_id: &str,
    score: i64,
) -> Result<JustFuState, TournamentError> {
    if state.stage != Stage::Groups {
        return Err(TournamentError::InvalidState);
    }
    if !state.groups.values().flatten().any(|p| p.id == player_id) {
        return Err(TournamentError::PlayerNotFound(player_id.to_string()));
    }
    let mut next = state.clone();
    next.group_scores.insert(player_id.to_string(), score);
    Ok(next)
}

/// Top score of each group plus the 3 best remaining scores make the championship;
/// the next 4 go to silver, the 4 after that to bronze. Ties keep seeding order.
pub fn confirm_groups(state: &JustFuState) -> Result<JustFuState, TournamentError> {
    if state.stage != Stage::Groups {
        return Err(TournamentError::InvalidState);
    }
    let score = |p: &Player| state.group_score_of(&p.id);

    let mut championship: Vec<Player> = Vec::new();
    // Serpentine seeding keeps each group in seed order, so ties fall to the better seed.
    for members in state.groups.values() {
        if let Some(winner) = rank_by_score(members, score).into_iter().next() {
            championship.push(winner);
        }
    }

    let winner_ids: HashSet<&str> = championship.iter().map(|p| p.id.as_str()).collect();
    let remaining: Vec<Player> = state
        .players
        .iter()
        .filter(|p| !winner_ids.contains(p.id.as_str()))
        .cloned()
        .collect();
    let mut rest = rank_by_score(&remaining, score).into_iter();

    championship.extend(rest.by_ref().take(WILD_CARDS));
    let silver: Vec<Player> = rest.by_ref().take(LOWER_FINAL_SIZE).collect();
    let bronze: Vec<Player> = rest.by_ref().take(LOWER_FINAL_SIZE).collect();
    let unplaced = rest.count();
    if unplaced > 0 {
        log::warn!("{} players did not reach any final", unplaced);
    }

    let champ_len = championship.len();
    let silver_end = champ_len + silver.len();
    let finals = vec![
        seeded_final(
            FinalTier::Championship,
            format!("Championship Final (1st-{}th)", champ_len),
            championship,
        ),
        seeded_final(
            FinalTier::Silver,
            format!("Silver Final ({}th-{}th)", champ_len + 1, silver_end),
            silver,
        ),
        seeded_final(
            FinalTier::Bronze,
            format!("Bronze Final ({}th-{}th)", silver_end + 1, BRACKET_PLAYER_COUNT),
            bronze,
        ),
    ];
    log::info!(
        "Just Fu groups confirmed: finals of {:?}",
        finals.iter().map(|f| f.players.len()).collect::<Vec<_>>()
    );

    Ok(JustFuState {
        stage: Stage::Finals,
        finals,
        ..state.clone()
    })
}

fn seeded_final(tier: FinalTier, name: String, players: Vec<Player>) -> FinalBracket {
    let mut bracket = FinalBracket::new(tier, name, players);
    bracket.scores = bracket
        .players
        .iter()
        .map(|p| (p.id.clone(), 0))
        .collect::<BTreeMap<_, _>>();
    bracket
}

pub fn set_final_score(
    state: &JustFuState,
    tier: FinalTier,
    player_id: &str,
    score: i64,
) -> Result<JustFuState, TournamentError> {
    if state.stage != Stage::Finals {
        return Err(TournamentError::InvalidState);
    }
    let mut next = state.clone();
    let bracket = find_final_mut(&mut next.finals, tier).ok_or(TournamentError::FinalNotFound(tier))?;
    if !bracket.contains(player_id) {
        return Err(TournamentError::PlayerNotFound(player_id.to_string()));
    }
    bracket.scores.insert(player_id.to_string(), score);
    Ok(next)
}

/// Each final sorted by score, concatenated championship → silver → bronze;
/// `total - index` points.
pub fn finish_just_fu(state: &JustFuState) -> Result<GameResult, TournamentError> {
    if state.stage != Stage::Finals {
        return Err(TournamentError::InvalidState);
    }
    let mut finals: Vec<&FinalBracket> = state.finals.iter().collect();
    finals.sort_by_key(|f| f.tier);
    let ranking: Vec<Player> = finals
        .into_iter()
        .flat_map(|f| rank_by_score(&f.players, |p| f.score_of(&p.id)))
        .collect();
    Ok(GameResult::new(
        "Just Fu Tournament",
        GameType::JustFu,
        positional_entries(&ranking),
    ))
}
