//! Game night scoreboard: tournament bracket and ranking engine, with an in-memory room ledger.

pub mod config;
pub mod logic;
pub mod models;

pub use config::ScoreboardConfig;
pub use logic::{
    advance_round, create_swiss, finish_swiss, manual_result, parse_points, parse_score,
    rewind_round, select_winner, standings,
};
pub use models::{
    FinalBracket, FinalTier, FreeForAllState, GameResult, GameType, HistoryEntry, JustFuState,
    MarioKartState, Match, Opponent, Player, PlayerId, ResultEntry, Room, Round, Stage,
    SwissPlayer, SwissState, Team, TeamState, TournamentError, TournamentEvent, TournamentState,
    TournamentType,
};
