//! 1v1 Swiss bracket: result entry, round advance with re-pairing by wins, rewind, and
//! final standings.
//!
//! Every transition takes the current state by reference and returns a new one, so a
//! state freshly loaded from a snapshot behaves exactly like one held in memory.

use crate::logic::scoring::{competition_ranks, points_for_rank};
use crate::logic::seeding::{pair_adjacent, rank_by_points};
use crate::models::{
    GameResult, GameType, Match, Player, ResultEntry, Round, SwissPlayer, SwissState,
    TournamentError,
};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Seed round one from the roster (points descending, adjacent pairs, odd player gets a BYE).
pub fn create_swiss(roster: &[Player]) -> SwissState {
    let ranked = rank_by_points(roster);
    let matches = pair_adjacent(&ranked, 1);
    log::info!(
        "1v1 tournament created: {} players, {} matches in round 1",
        roster.len(),
        matches.len()
    );
    SwissState {
        players: roster.iter().cloned().map(SwissPlayer::from_player).collect(),
        rounds: vec![Round {
            round_number: 1,
            matches,
        }],
    }
}

/// Toggle the winner of a current-round match.
///
/// Selecting the recorded winner clears it; selecting the other player overwrites it.
pub fn select_winner(
    state: &SwissState,
    match_id: &str,
    player_id: &str,
) -> Result<SwissState, TournamentError> {
    let mut next = state.clone();
    let round = next.rounds.last_mut().ok_or(TournamentError::InvalidState)?;
    let m = round
        .matches
        .iter_mut()
        .find(|m| m.match_id == match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    if m.is_bye() {
        return Err(TournamentError::ByeNotEditable(m.match_id.clone()));
    }
    if !m.involves(player_id) {
        return Err(TournamentError::PlayerNotInMatch(player_id.to_string()));
    }
    if m.winner.as_deref() == Some(player_id) {
        m.winner = None;
    } else {
        m.winner = Some(player_id.to_string());
    }
    Ok(next)
}

/// Fold the completed current round into player records and pair the next round.
pub fn advance_round<R: Rng + ?Sized>(
    state: &SwissState,
    rng: &mut R,
) -> Result<SwissState, TournamentError> {
    let current = state.current_round().ok_or(TournamentError::InvalidState)?;
    if !current.is_complete() {
        return Err(TournamentError::IncompleteResults);
    }
    if current.round_number >= state.total_rounds() {
        return Err(TournamentError::InvalidState);
    }

    let mut players = state.players.clone();
    apply_round(&mut players, current);

    let round_number = current.round_number + 1;
    let matches = pair_by_record(&players, round_number, rng);
    log::info!(
        "1v1 round {} paired: {} matches ({} byes)",
        round_number,
        matches.len(),
        matches.iter().filter(|m| m.is_bye()).count()
    );

    let mut rounds = state.rounds.clone();
    rounds.push(Round {
        round_number,
        matches,
    });
    Ok(SwissState { players, rounds })
}

/// Discard the current round and reopen the previous one for editing.
///
/// Player records are rebuilt by replaying every round before the reopened one, which
/// makes this the exact inverse of [`advance_round`].
pub fn rewind_round(state: &SwissState) -> Result<SwissState, TournamentError> {
    if !state.can_rewind() {
        return Err(TournamentError::InvalidState);
    }
    let mut rounds = state.rounds.clone();
    let dropped = rounds.pop();
    let settled = &rounds[..rounds.len() - 1];
    let players = replay(&state.players, settled);
    log::info!(
        "1v1 round {} discarded, round {} reopened",
        dropped.map_or(0, |r| r.round_number),
        rounds.last().map_or(0, |r| r.round_number)
    );
    Ok(SwissState { players, rounds })
}

/// Records rebuilt from scratch over every round, including decided matches of the
/// current one, sorted by wins descending then losses ascending (stable).
pub fn standings(state: &SwissState) -> Vec<SwissPlayer> {
    let mut table = replay(&state.players, &state.rounds);
    table.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
    table
}

/// Close out the tournament: shared competition ranks, `total - rank + 1` points.
pub fn finish_swiss(state: &SwissState, today: NaiveDate) -> Result<GameResult, TournamentError> {
    if !state.is_round_complete() {
        return Err(TournamentError::IncompleteResults);
    }
    if !state.can_finish() {
        return Err(TournamentError::InvalidState);
    }
    let table = standings(state);
    let ranks = competition_ranks(&table, |p| (p.wins, p.losses));
    let total = state.players.len();
    let results = table
        .iter()
        .zip(ranks)
        .map(|(p, rank)| {
            ResultEntry::new(
                p.player.id.clone(),
                p.player.name.clone(),
                points_for_rank(total, rank),
                rank,
            )
            .with_record(p.wins, p.losses)
        })
        .collect();
    let name = format!("1v1 Tournament - {}", today.format("%Y-%m-%d"));
    log::info!("1v1 tournament finished after {} rounds", state.rounds.len());
    Ok(GameResult::new(name, GameType::OneVsOne, results))
}

/// Fresh records for `players`, then every decided match of `rounds` applied in order.
fn replay(players: &[SwissPlayer], rounds: &[Round]) -> Vec<SwissPlayer> {
    let mut records: Vec<SwissPlayer> = players.iter().map(SwissPlayer::cleared).collect();
    for round in rounds {
        apply_round(&mut records, round);
    }
    records
}

/// Winner +1 win; for non-bye matches the loser +1 loss and both record the meeting.
/// References to unknown players are skipped.
fn apply_round(players: &mut [SwissPlayer], round: &Round) {
    for m in &round.matches {
        let Some(winner_id) = m.winner.as_deref() else {
            continue;
        };
        if !m.involves(winner_id) {
            log::warn!("Match {}: winner {} is not seated, skipped", m.match_id, winner_id);
            continue;
        }
        match find_mut(players, winner_id) {
            Some(w) => w.wins += 1,
            None => log::warn!("Match {}: unknown winner {}, skipped", m.match_id, winner_id),
        }
        let Some(p2) = m.p2_player() else {
            continue;
        };
        if let Some(loser_id) = m.loser_id() {
            if let Some(l) = find_mut(players, loser_id) {
                l.losses += 1;
            }
        }
        record_meeting(players, &m.p1.id, &p2.id);
    }
}

fn record_meeting(players: &mut [SwissPlayer], a: &str, b: &str) {
    if let Some(p) = find_mut(players, a) {
        p.opponents.push(b.to_string());
    }
    if let Some(p) = find_mut(players, b) {
        p.opponents.push(a.to_string());
    }
}

fn find_mut<'a>(players: &'a mut [SwissPlayer], id: &str) -> Option<&'a mut SwissPlayer> {
    players.iter_mut().find(|p| p.id() == id)
}

/// Pair within win-count groups, highest wins first.
///
/// Each group is shuffled, then each player takes the first remaining opponent they have
/// not faced (or simply the first remaining if all are rematches). An odd player out of a
/// group gets a BYE.
fn pair_by_record<R: Rng + ?Sized>(
    players: &[SwissPlayer],
    round_number: u32,
    rng: &mut R,
) -> Vec<Match> {
    let mut by_wins: BTreeMap<u32, Vec<&SwissPlayer>> = BTreeMap::new();
    for p in players {
        by_wins.entry(p.wins).or_default().push(p);
    }

    let mut matches = Vec::new();
    for (_, mut group) in by_wins.into_iter().rev() {
        group.shuffle(rng);
        while !group.is_empty() {
            let p1 = group.remove(0);
            if group.is_empty() {
                matches.push(Match::bye(round_number, matches.len() + 1, p1.player.clone()));
                break;
            }
            let idx = group.iter().position(|p| !p1.has_faced(p.id())).unwrap_or(0);
            let p2 = group.remove(idx);
            matches.push(Match::new(
                round_number,
                matches.len() + 1,
                p1.player.clone(),
                p2.player.clone(),
            ));
        }
    }
    matches
}
