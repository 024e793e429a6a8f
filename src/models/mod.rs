//! Data structures for the scoreboard: players, tournament states, results, and rooms.

mod bracket;
mod player;
mod result;
mod room;
mod swiss;
mod tournament;

pub use bracket::{
    find_final, find_final_mut, FinalBracket, FinalTier, Groups, JustFuState, MarioKartState,
    Stage, BRACKET_PLAYER_COUNT,
};
pub use player::{Player, PlayerId};
pub use result::{GameResult, GameType, ResultEntry};
pub use room::{HistoryEntry, Room};
pub use swiss::{Match, Opponent, Round, SwissPlayer, SwissState};
pub use tournament::{
    FreeForAllState, Team, TeamState, TournamentError, TournamentEvent, TournamentState,
    TournamentType,
};
