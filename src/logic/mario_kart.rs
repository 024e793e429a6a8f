//! Mario-Kart-style tournament: 4 groups ranked by manual ordering, then 4 finals by
//! within-group rank.

use crate::logic::scoring::positional_entries;
use crate::logic::seeding::{require_player_count, seed_groups};
use crate::models::{
    find_final_mut, FinalBracket, FinalTier, GameResult, GameType, MarioKartState, Player,
    Stage, TournamentError, BRACKET_PLAYER_COUNT,
};
use std::collections::BTreeMap;

const GROUP_COUNT: usize = 4;

/// Seed 4 serpentine groups. Fails with `InvalidPlayerCount` unless the roster has 14 players.
pub fn create_mario_kart(roster: &[Player]) -> Result<MarioKartState, TournamentError> {
    require_player_count(roster, BRACKET_PLAYER_COUNT)?;
    let groups = seed_groups(roster, GROUP_COUNT);
    log::info!("Mario Kart tournament created: {} groups", groups.len());
    Ok(MarioKartState {
        stage: Stage::Groups,
        groups,
        group_results: BTreeMap::new(),
        finals: Vec::new(),
    })
}

/// Drag a player within a group: remove at `from`, insert at `to`.
pub fn move_group_player(
    state: &MarioKartState,
    group: &str,
    from: usize,
    to: usize,
) -> Result<MarioKartState, TournamentError> {
    if state.stage != Stage::Groups {
        return Err(TournamentError::InvalidState);
    }
    let mut next = state.clone();
    let players = next
        .groups
        .get_mut(group)
        .ok_or_else(|| TournamentError::GroupNotFound(group.to_string()))?;
    move_item(players, from, to)?;
    Ok(next)
}

/// Lock group order and send each within-group rank to its final:
/// 1st → championship, 2nd → silver, 3rd → bronze, 4th → last place.
pub fn confirm_groups(state: &MarioKartState) -> Result<MarioKartState, TournamentError> {
    if state.stage != Stage::Groups {
        return Err(TournamentError::InvalidState);
    }
    let mut finals = vec![
        FinalBracket::new(FinalTier::Championship, "Championship Final (1st-4th)", Vec::new()),
        FinalBracket::new(FinalTier::Silver, "Silver Final (5th-8th)", Vec::new()),
        FinalBracket::new(FinalTier::Bronze, "Bronze Final (9th-12th)", Vec::new()),
        FinalBracket::new(FinalTier::Last, "Last Place Final (13th-14th)", Vec::new()),
    ];
    let mut group_results = BTreeMap::new();
    for players in state.groups.values() {
        for (index, player) in players.iter().enumerate() {
            group_results.insert(player.id.clone(), u32::try_from(index + 1).unwrap_or(u32::MAX));
            match finals.get_mut(index) {
                Some(bracket) => bracket.players.push(player.clone()),
                None => log::warn!("{} finished below 4th in a group, not placed", player.name),
            }
        }
    }
    log::info!(
        "Mario Kart groups confirmed: finals of {:?}",
        finals.iter().map(|f| f.players.len()).collect::<Vec<_>>()
    );
    Ok(MarioKartState {
        stage: Stage::Finals,
        groups: state.groups.clone(),
        group_results,
        finals,
    })
}

/// Drag a finalist within a final.
pub fn move_finalist(
    state: &MarioKartState,
    tier: FinalTier,
    from: usize,
    to: usize,
) -> Result<MarioKartState, TournamentError> {
    if state.stage != Stage::Finals {
        return Err(TournamentError::InvalidState);
    }
    let mut next = state.clone();
    let bracket = find_final_mut(&mut next.finals, tier).ok_or(TournamentError::FinalNotFound(tier))?;
    move_item(&mut bracket.players, from, to)?;
    Ok(next)
}

/// Global order is championship, silver, bronze, last, each in its final's order;
/// `total - index` points.
pub fn finish_mario_kart(state: &MarioKartState) -> Result<GameResult, TournamentError> {
    if state.stage != Stage::Finals {
        return Err(TournamentError::InvalidState);
    }
    let mut finals: Vec<&FinalBracket> = state.finals.iter().collect();
    finals.sort_by_key(|f| f.tier);
    let ranking: Vec<Player> = finals
        .into_iter()
        .flat_map(|f| f.players.iter().cloned())
        .collect();
    Ok(GameResult::new(
        "Mario Kart Tournament",
        GameType::MarioKart,
        positional_entries(&ranking),
    ))
}

/// Remove at `from` and reinsert at `to`.
pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), TournamentError> {
    let len = items.len();
    if from >= len {
        return Err(TournamentError::PositionOutOfRange { len, index: from });
    }
    if to >= len {
        return Err(TournamentError::PositionOutOfRange { len, index: to });
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}
