//! Point allocation shared across formats, plus the manual "add points" path.

use crate::models::{GameResult, GameType, Player, PlayerId, ResultEntry};
use std::collections::BTreeMap;

/// Leading-integer parse: optional sign then digits, anything after ignored.
/// Input with no leading digits counts as 0; out-of-range input saturates.
pub fn parse_score(input: &str) -> i64 {
    let s = input.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10)
                .saturating_add(sign * i64::from(d - b'0'))
        })
}

/// Like [`parse_score`] but for awarded points, which are never negative.
pub fn parse_points(input: &str) -> u32 {
    u32::try_from(parse_score(input).max(0)).unwrap_or(u32::MAX)
}

/// Standard competition ranks ("1224"): equal keys share a rank; the next distinct key
/// resumes at its 1-indexed position. `items` must already be sorted.
pub fn competition_ranks<T, K, F>(items: &[T], key: F) -> Vec<u32>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut ranks: Vec<u32> = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let rank = match i.checked_sub(1) {
            Some(prev) if key(&items[prev]) == key(item) => ranks[prev],
            _ => position_rank(i),
        };
        ranks.push(rank);
    }
    ranks
}

fn position_rank(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// Points for finishing at `rank` out of `total`: 1st gets `total`, last gets 1.
pub fn points_for_rank(total: usize, rank: u32) -> u32 {
    let total = u32::try_from(total).unwrap_or(u32::MAX);
    total.saturating_add(1).saturating_sub(rank)
}

/// Strict positional award: index 0 gets `len` points at rank 1, down to 1 point for last.
pub fn positional_entries(ranked: &[Player]) -> Vec<ResultEntry> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let rank = position_rank(i);
            ResultEntry::new(p.id.clone(), p.name.clone(), points_for_rank(ranked.len(), rank), rank)
        })
        .collect()
}

/// Stable sort by score, descending. Equal scores keep input order.
pub fn rank_by_score<F>(players: &[Player], score: F) -> Vec<Player>
where
    F: Fn(&Player) -> i64,
{
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| score(b).cmp(&score(a)));
    ranked
}

/// Manual entry bypassing tournament logic: entered points are taken verbatim, ranked by
/// points descending. Players without an entry get 0.
pub fn manual_result(
    players: &[Player],
    entered: &BTreeMap<PlayerId, u32>,
    game_name: &str,
    default_name: &str,
) -> GameResult {
    let mut with_points: Vec<(&Player, u32)> = players
        .iter()
        .map(|p| (p, entered.get(&p.id).copied().unwrap_or(0)))
        .collect();
    with_points.sort_by(|a, b| b.1.cmp(&a.1));
    let results = with_points
        .into_iter()
        .enumerate()
        .map(|(i, (p, points))| ResultEntry::new(p.id.clone(), p.name.clone(), points, position_rank(i)))
        .collect();
    let name = game_name.trim();
    let name = if name.is_empty() { default_name } else { name };
    GameResult::new(name, GameType::Manual, results)
}
