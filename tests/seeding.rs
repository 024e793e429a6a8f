//! Integration tests for initial pairings and group seeding.

mod common;

use common::{fresh_roster, ids, seeded_roster};
use game_night_scoreboard::logic::{
    group_keys, pair_adjacent, rank_by_points, require_player_count, seed_groups,
    serpentine_groups, split_teams,
};
use game_night_scoreboard::{Player, TournamentError};
use std::collections::HashSet;

#[test]
fn adjacent_pairing_covers_every_roster_size() {
    for n in 0..=11 {
        let roster = seeded_roster(n);
        let matches = pair_adjacent(&roster, 1);
        assert_eq!(matches.len(), n.div_ceil(2), "roster of {n}");

        let mut seen = HashSet::new();
        for m in &matches {
            assert!(seen.insert(m.p1.id.clone()));
            if let Some(p2) = m.p2_player() {
                assert!(seen.insert(p2.id.clone()));
            }
        }
        assert_eq!(seen.len(), n);

        let byes = matches.iter().filter(|m| m.is_bye()).count();
        assert_eq!(byes, n % 2, "roster of {n}");
    }
}

#[test]
fn adjacent_pairing_matches_neighbouring_seeds() {
    let matches = pair_adjacent(&seeded_roster(5), 1);
    assert_eq!(matches[0].match_id, "R1M1");
    assert_eq!(matches[0].p1.id, "p0");
    assert_eq!(matches[0].p2_player().unwrap().id, "p1");
    assert_eq!(matches[1].p1.id, "p2");
    assert_eq!(matches[1].p2_player().unwrap().id, "p3");

    let bye = &matches[2];
    assert!(bye.is_bye());
    assert_eq!(bye.p1.id, "p4");
    assert_eq!(bye.winner.as_deref(), Some("p4"));
}

#[test]
fn ranking_by_points_is_stable() {
    let roster = vec![
        Player::with_id("a", "A", 3),
        Player::with_id("b", "B", 5),
        Player::with_id("c", "C", 3),
        Player::with_id("d", "D", 5),
    ];
    let ranked = rank_by_points(&roster);
    assert_eq!(ids(&ranked), vec!["b", "d", "a", "c"]);
}

#[test]
fn teams_alternate_by_seed() {
    let (a, b) = split_teams(&seeded_roster(5));
    assert_eq!(ids(&a), vec!["p0", "p2", "p4"]);
    assert_eq!(ids(&b), vec!["p1", "p3"]);
}

#[test]
fn four_group_serpentine_for_fourteen() {
    let groups = serpentine_groups(&seeded_roster(14), 4);
    assert_eq!(ids(&groups[0]), vec!["p0", "p7", "p8"]);
    assert_eq!(ids(&groups[1]), vec!["p1", "p6", "p9"]);
    assert_eq!(ids(&groups[2]), vec!["p2", "p5", "p10", "p13"]);
    assert_eq!(ids(&groups[3]), vec!["p3", "p4", "p11", "p12"]);
}

#[test]
fn three_group_serpentine_for_fourteen() {
    let groups = serpentine_groups(&seeded_roster(14), 3);
    assert_eq!(ids(&groups[0]), vec!["p0", "p5", "p6", "p11", "p12"]);
    assert_eq!(ids(&groups[1]), vec!["p1", "p4", "p7", "p10", "p13"]);
    assert_eq!(ids(&groups[2]), vec!["p2", "p3", "p8", "p9"]);
}

#[test]
fn seeded_groups_are_keyed_and_partition_the_roster() {
    let groups = seed_groups(&fresh_roster(14), 4);
    assert_eq!(groups.keys().cloned().collect::<Vec<_>>(), group_keys(4));

    let all: Vec<&str> = groups.values().flatten().map(|p| p.id.as_str()).collect();
    let unique: HashSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), 14);
    assert_eq!(unique.len(), 14);
}

#[test]
fn fixed_formats_require_exact_roster() {
    assert_eq!(
        require_player_count(&seeded_roster(13), 14),
        Err(TournamentError::InvalidPlayerCount {
            required: 14,
            actual: 13
        })
    );
    assert!(require_player_count(&seeded_roster(15), 14).is_err());
    assert!(require_player_count(&seeded_roster(14), 14).is_ok());
}
