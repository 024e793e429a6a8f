//! Team game: two seeded teams, one aggregate score each.

use crate::logic::seeding::{rank_by_points, split_teams};
use crate::models::{GameResult, GameType, Player, ResultEntry, Team, TeamState};

pub fn create_team_game(roster: &[Player]) -> TeamState {
    let (team_a, team_b) = split_teams(&rank_by_points(roster));
    log::info!(
        "Team game created: {} vs {} players",
        team_a.len(),
        team_b.len()
    );
    TeamState {
        team_a,
        team_b,
        score_a: 0,
        score_b: 0,
    }
}

pub fn set_team_score(state: &TeamState, team: Team, score: i64) -> TeamState {
    let mut next = state.clone();
    match team {
        Team::A => next.score_a = score,
        Team::B => next.score_b = score,
    }
    next
}

/// Winners all get `total` points at shared rank 1; losers get
/// `round(losing / winning * total)` at shared rank `winners + 1`.
///
/// A tie, or a winning score that is not positive, gives everyone 0 points.
pub fn finish_team_game(state: &TeamState) -> GameResult {
    let total = state.total_players();
    let winning_score = state.score_a.max(state.score_b);
    let losing_score = state.score_a.min(state.score_b);

    if state.score_a == state.score_b || winning_score <= 0 {
        log::info!(
            "Team game ended without a winner ({}-{})",
            state.score_a,
            state.score_b
        );
        let results = state
            .team_a
            .iter()
            .chain(state.team_b.iter())
            .enumerate()
            .map(|(i, p)| ResultEntry::new(p.id.clone(), p.name.clone(), 0, rank_at(i)))
            .collect();
        return GameResult::new("Team Game (Tie)", GameType::Team, results);
    }

    let (winners, losers) = if state.score_a > state.score_b {
        (&state.team_a, &state.team_b)
    } else {
        (&state.team_b, &state.team_a)
    };
    let winner_points = u32::try_from(total).unwrap_or(u32::MAX);
    let ratio = losing_score as f64 / winning_score as f64;
    let loser_points = (ratio * total as f64).round().max(0.0) as u32;
    let loser_rank = rank_at(winners.len());

    let results = winners
        .iter()
        .map(|p| ResultEntry::new(p.id.clone(), p.name.clone(), winner_points, 1))
        .chain(
            losers
                .iter()
                .map(|p| ResultEntry::new(p.id.clone(), p.name.clone(), loser_points, loser_rank)),
        )
        .collect();
    GameResult::new("Team Game", GameType::Team, results)
}

fn rank_at(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
