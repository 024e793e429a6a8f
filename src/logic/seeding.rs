//! Initial pairings and groupings from a ranked roster.

use crate::models::{Groups, Match, Player, TournamentError};

/// Stable sort by points, descending. Players on equal points keep roster order.
pub fn rank_by_points(roster: &[Player]) -> Vec<Player> {
    let mut ranked = roster.to_vec();
    ranked.sort_by(|a, b| b.points.cmp(&a.points));
    ranked
}

/// Fail before any state exists when a fixed-size format gets the wrong roster.
pub fn require_player_count(roster: &[Player], required: usize) -> Result<(), TournamentError> {
    if roster.len() != required {
        return Err(TournamentError::InvalidPlayerCount {
            required,
            actual: roster.len(),
        });
    }
    Ok(())
}

/// 1v1 round-one pairing: rank 1 vs 2, 3 vs 4, and so on; an odd player out gets a BYE.
pub fn pair_adjacent(ranked: &[Player], round_number: u32) -> Vec<Match> {
    ranked
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let p1 = pair[0].clone();
            match pair.get(1) {
                Some(p2) => Match::new(round_number, i + 1, p1, p2.clone()),
                None => Match::bye(round_number, i + 1, p1),
            }
        })
        .collect()
}

/// Alternate seeds between teams: even ranks to A, odd ranks to B.
pub fn split_teams(ranked: &[Player]) -> (Vec<Player>, Vec<Player>) {
    let mut team_a = Vec::new();
    let mut team_b = Vec::new();
    for (i, p) in ranked.iter().enumerate() {
        if i % 2 == 0 {
            team_a.push(p.clone());
        } else {
            team_b.push(p.clone());
        }
    }
    (team_a, team_b)
}

/// Snake-draft `ranked` into `group_count` groups.
///
/// Pass `k` takes the next `group_count` seeds; even passes fill groups 0..n, odd passes n..0.
pub fn serpentine_groups(ranked: &[Player], group_count: usize) -> Vec<Vec<Player>> {
    let mut groups: Vec<Vec<Player>> = vec![Vec::new(); group_count];
    if group_count == 0 {
        return groups;
    }
    for (index, player) in ranked.iter().enumerate() {
        let pass = index / group_count;
        let slot = index % group_count;
        let group = if pass % 2 == 0 {
            slot
        } else {
            group_count - 1 - slot
        };
        groups[group].push(player.clone());
    }
    groups
}

/// `A`, `B`, `C`, ... for the first `count` groups.
pub fn group_keys(count: usize) -> Vec<String> {
    (b'A'..=b'Z')
        .take(count)
        .map(|c| char::from(c).to_string())
        .collect()
}

/// Rank the roster by points and snake-draft it into keyed groups.
pub fn seed_groups(roster: &[Player], group_count: usize) -> Groups {
    group_keys(group_count)
        .into_iter()
        .zip(serpentine_groups(&rank_by_points(roster), group_count))
        .collect()
}
