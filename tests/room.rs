//! Integration tests for the room ledger: roster, tournaments, history, and snapshots.

mod common;

use common::{game_day, init_logging, rng};
use game_night_scoreboard::{
    Room, ScoreboardConfig, TournamentError, TournamentEvent, TournamentState, TournamentType,
};
use std::collections::BTreeMap;

fn room_with(names: &[&str]) -> Room {
    let mut room = Room::new("  Friday ", ScoreboardConfig::default());
    for name in names {
        room.add_player(name).unwrap();
    }
    room
}

fn id_of(room: &Room, name: &str) -> String {
    room.players.iter().find(|p| p.name == name).unwrap().id.clone()
}

#[test]
fn registration_validates_names_and_roster_size() {
    init_logging();
    let mut room = room_with(&[]);
    assert_eq!(room.code, "friday");
    assert_eq!(room.add_player("   "), Err(TournamentError::EmptyName));

    for i in 0..15 {
        room.add_player(&format!("Player {i}")).unwrap();
    }
    assert_eq!(
        room.add_player("One too many"),
        Err(TournamentError::RosterFull { max: 15 })
    );

    let id = id_of(&room, "Player 3");
    assert_eq!(room.remove_player(&id).unwrap().name, "Player 3");
    assert!(room.player(&id).is_none());
    assert!(matches!(
        room.remove_player(&id),
        Err(TournamentError::PlayerNotFound(_))
    ));
}

#[test]
fn recording_and_deleting_a_game_is_reversible() {
    let mut room = room_with(&["Ann", "Ben", "Cat"]);
    room.start_tournament(TournamentType::FreeForAll).unwrap();
    let ann = id_of(&room, "Ann");
    room.apply(
        &TournamentEvent::SetScore {
            player_id: ann.clone(),
            score: 30,
        },
        &mut rng(),
    )
    .unwrap();

    let result = room.finish_tournament(game_day()).unwrap();
    let game = room.record_result(result);
    assert!(room.active_tournament().is_none());
    assert_eq!(room.player(&ann).unwrap().points, 3);
    assert_eq!(room.standings()[0].name, "Ann");
    assert_eq!(room.history().count(), 1);

    room.delete_game(game).unwrap();
    assert!(room.players.iter().all(|p| p.points == 0));
    assert_eq!(room.history().count(), 0);
    assert!(matches!(
        room.delete_game(game),
        Err(TournamentError::GameNotFound(_))
    ));
}

#[test]
fn manual_points_feed_the_scoreboard() {
    let mut room = room_with(&["Ann", "Ben"]);
    let mut entered = BTreeMap::new();
    entered.insert(id_of(&room, "Ben"), 7);
    let result = room.manual_result("", &entered);
    assert_eq!(result.game_name, "Untitled Game");

    let game = room.record_result(result);
    assert_eq!(room.standings()[0].name, "Ben");
    assert_eq!(room.standings()[0].points, 7);

    room.rename_game(game, "  Azul  ").unwrap();
    room.rename_game(game, "   ").unwrap();
    assert_eq!(room.history().next().unwrap().result.game_name, "Azul");
}

#[test]
fn history_is_newest_first() {
    let mut room = room_with(&["Ann"]);
    let first = room.record_result(room.manual_result("First", &BTreeMap::new()));
    let second = room.record_result(room.manual_result("Second", &BTreeMap::new()));
    let order: Vec<_> = room.history().map(|g| g.id).collect();
    assert_eq!(order, vec![second, first]);
}

#[test]
fn results_for_removed_players_are_skipped() {
    let mut room = room_with(&["Ann", "Ben"]);
    room.start_tournament(TournamentType::FreeForAll).unwrap();
    let ben = id_of(&room, "Ben");
    room.remove_player(&ben).unwrap();

    let result = room.finish_tournament(game_day()).unwrap();
    assert_eq!(result.results.len(), 2);
    room.record_result(result);
    assert_eq!(room.players.len(), 1);
    assert_eq!(room.players[0].points, 2);
}

#[test]
fn cancelling_leaves_the_roster_alone() {
    let mut room = room_with(&["Ann", "Ben", "Cat", "Dan"]);
    let before = room.players.clone();
    room.start_tournament(TournamentType::OneVsOne).unwrap();
    let cancelled = room.cancel_tournament().unwrap();
    assert_eq!(cancelled.kind(), TournamentType::OneVsOne);
    assert!(room.active_tournament().is_none());
    assert_eq!(room.players, before);
    assert_eq!(
        room.apply(&TournamentEvent::NextRound, &mut rng()).map(|_| ()),
        Err(TournamentError::NoActiveTournament)
    );
}

#[test]
fn starting_a_fixed_format_with_the_wrong_roster_changes_nothing() {
    let names: Vec<String> = (0..13).map(|i| format!("P{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut room = room_with(&refs);
    room.start_tournament(TournamentType::Team).unwrap();
    let before = room.active_tournament().cloned();

    assert_eq!(
        room.start_tournament(TournamentType::MarioKart).map(|_| ()),
        Err(TournamentError::InvalidPlayerCount {
            required: 14,
            actual: 13
        })
    );
    assert_eq!(room.active_tournament().cloned(), before);
}

#[test]
fn a_new_tournament_replaces_the_old_one() {
    let mut room = room_with(&["Ann", "Ben", "Cat"]);
    room.start_tournament(TournamentType::Team).unwrap();
    room.start_tournament(TournamentType::FreeForAll).unwrap();
    assert_eq!(
        room.active_tournament().map(TournamentState::kind),
        Some(TournamentType::FreeForAll)
    );
}

#[test]
fn failed_events_keep_the_current_state() {
    let mut room = room_with(&["Ann", "Ben", "Cat", "Dan"]);
    room.start_tournament(TournamentType::OneVsOne).unwrap();
    let before = room.active_tournament().cloned();
    assert_eq!(
        room.apply(&TournamentEvent::NextRound, &mut rng()).map(|_| ()),
        Err(TournamentError::IncompleteResults)
    );
    assert_eq!(room.active_tournament().cloned(), before);
}

#[test]
fn a_snapshot_resumes_mid_tournament() {
    let mut room = room_with(&["Ann", "Ben", "Cat", "Dan"]);
    room.start_tournament(TournamentType::OneVsOne).unwrap();
    let ann = id_of(&room, "Ann");
    room.apply(
        &TournamentEvent::SelectWinner {
            match_id: "R1M1".to_string(),
            player_id: ann.clone(),
        },
        &mut rng(),
    )
    .unwrap();

    let json = room.to_json().unwrap();
    let mut restored = Room::from_json(&json).unwrap();
    assert_eq!(restored.code, room.code);
    assert_eq!(restored.active_tournament(), room.active_tournament());

    let cat = id_of(&restored, "Cat");
    restored
        .apply(
            &TournamentEvent::SelectWinner {
                match_id: "R1M2".to_string(),
                player_id: cat,
            },
            &mut rng(),
        )
        .unwrap();
    restored.apply(&TournamentEvent::NextRound, &mut rng()).unwrap();
    match restored.active_tournament() {
        Some(TournamentState::OneVsOne(s)) => assert_eq!(s.current_round_number(), 2),
        other => panic!("unexpected state {other:?}"),
    }

    assert!(matches!(
        Room::from_json("{not json"),
        Err(TournamentError::Snapshot(_))
    ));
}

#[test]
fn reset_clears_everything() {
    let mut room = room_with(&["Ann", "Ben"]);
    room.record_result(room.manual_result("Warmup", &BTreeMap::new()));
    room.start_tournament(TournamentType::Team).unwrap();
    room.reset();
    assert!(room.players.is_empty());
    assert_eq!(room.history().count(), 0);
    assert!(room.active_tournament().is_none());
}

#[test]
fn config_defaults_fill_missing_fields() {
    let config: ScoreboardConfig = serde_json::from_str(r#"{"shuffle_seed": 3}"#).unwrap();
    assert_eq!(config.max_players, 15);
    assert_eq!(config.default_game_name, "Untitled Game");
    assert_eq!(config.shuffle_seed, Some(3));
    assert_eq!(ScoreboardConfig::default().shuffle_seed, None);
}
