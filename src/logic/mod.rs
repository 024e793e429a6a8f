//! Tournament business logic: seeding, per-format state machines, and point allocation.

mod dispatch;
mod free_for_all;
mod just_fu;
mod mario_kart;
mod scoring;
mod seeding;
mod swiss;
mod team;

pub use free_for_all::{create_free_for_all, finish_free_for_all, set_player_score};
pub use just_fu::{
    confirm_groups as confirm_just_fu_groups, create_just_fu, finish_just_fu, set_final_score,
    set_group_score,
};
pub use mario_kart::{
    confirm_groups as confirm_mario_kart_groups, create_mario_kart, finish_mario_kart,
    move_finalist, move_group_player,
};
pub use scoring::{
    competition_ranks, manual_result, parse_points, parse_score, points_for_rank,
    positional_entries, rank_by_score,
};
pub use seeding::{
    group_keys, pair_adjacent, rank_by_points, require_player_count, seed_groups,
    serpentine_groups, split_teams,
};
pub use swiss::{advance_round, create_swiss, finish_swiss, rewind_round, select_winner, standings};
pub use team::{create_team_game, finish_team_game, set_team_score};
