//! TournamentState (one variant per format), the events that drive it, and TournamentError.

use crate::models::bracket::{FinalTier, JustFuState, MarioKartState};
use crate::models::player::{Player, PlayerId};
use crate::models::swiss::SwissState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Errors that can occur during tournament and ledger operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A fixed-size format was started with the wrong roster size.
    InvalidPlayerCount { required: usize, actual: usize },
    /// Tournament is not in a state (or format) that allows this action.
    InvalidState,
    /// Not all matches in the current round have a winner.
    IncompleteResults,
    MatchNotFound(String),
    /// The selected winner is not seated in that match.
    PlayerNotInMatch(PlayerId),
    /// BYE matches are decided at creation and cannot be edited.
    ByeNotEditable(String),
    PlayerNotFound(PlayerId),
    GroupNotFound(String),
    FinalNotFound(FinalTier),
    /// Reorder index outside the list.
    PositionOutOfRange { len: usize, index: usize },
    /// Player names must not be blank.
    EmptyName,
    /// The room already holds the maximum number of players.
    RosterFull { max: usize },
    GameNotFound(Uuid),
    NoActiveTournament,
    /// A room snapshot could not be encoded or decoded.
    Snapshot(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidPlayerCount { required, actual } => {
                write!(f, "This tournament requires exactly {} players (have {})", required, actual)
            }
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::IncompleteResults => write!(f, "Not all matches have a result"),
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::PlayerNotInMatch(_) => write!(f, "Player is not part of this match"),
            TournamentError::ByeNotEditable(id) => write!(f, "Match {} is a bye and cannot be edited", id),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::GroupNotFound(key) => write!(f, "Group {} not found", key),
            TournamentError::FinalNotFound(tier) => write!(f, "Final {:?} not found", tier),
            TournamentError::PositionOutOfRange { len, index } => {
                write!(f, "Position {} is out of range for {} players", index, len)
            }
            TournamentError::EmptyName => write!(f, "Player name cannot be empty"),
            TournamentError::RosterFull { max } => {
                write!(f, "You can only register a maximum of {} players", max)
            }
            TournamentError::GameNotFound(_) => write!(f, "Game record not found"),
            TournamentError::NoActiveTournament => write!(f, "No tournament in progress"),
            TournamentError::Snapshot(msg) => write!(f, "Invalid room snapshot: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Tournament format selected from the play menu.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TournamentType {
    #[serde(rename = "1v1")]
    OneVsOne,
    #[serde(rename = "team")]
    Team,
    #[serde(rename = "ffa")]
    FreeForAll,
    #[serde(rename = "mariokart")]
    MarioKart,
    #[serde(rename = "justfu")]
    JustFu,
}

impl TournamentType {
    pub fn display_name(self) -> &'static str {
        match self {
            TournamentType::OneVsOne => "1v1 Tournament",
            TournamentType::Team => "Team Based",
            TournamentType::FreeForAll => "Free For All",
            TournamentType::MarioKart => "Mario Kart",
            TournamentType::JustFu => "Just Fu",
        }
    }

    /// Exact roster size the format needs, if fixed.
    pub fn required_players(self) -> Option<usize> {
        match self {
            TournamentType::MarioKart | TournamentType::JustFu => {
                Some(crate::models::bracket::BRACKET_PLAYER_COUNT)
            }
            _ => None,
        }
    }
}

/// Side in a team game.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    #[default]
    A,
    B,
}

/// Two seeded teams, each with one aggregate score.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamState {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
    #[serde(default)]
    pub score_a: i64,
    #[serde(default)]
    pub score_b: i64,
}

impl TeamState {
    pub fn total_players(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }
}

/// One pool, one score per player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FreeForAllState {
    pub players: Vec<Player>,
    #[serde(default)]
    pub scores: BTreeMap<PlayerId, i64>,
}

impl FreeForAllState {
    pub fn score_of(&self, id: &str) -> i64 {
        self.scores.get(id).copied().unwrap_or(0)
    }
}

/// Working state of the single in-progress tournament of a room.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TournamentState {
    #[serde(rename = "1v1")]
    OneVsOne(SwissState),
    #[serde(rename = "team")]
    Team(TeamState),
    #[serde(rename = "ffa")]
    FreeForAll(FreeForAllState),
    #[serde(rename = "mariokart")]
    MarioKart(MarioKartState),
    #[serde(rename = "justfu")]
    JustFu(JustFuState),
}

impl TournamentState {
    pub fn kind(&self) -> TournamentType {
        match self {
            TournamentState::OneVsOne(_) => TournamentType::OneVsOne,
            TournamentState::Team(_) => TournamentType::Team,
            TournamentState::FreeForAll(_) => TournamentType::FreeForAll,
            TournamentState::MarioKart(_) => TournamentType::MarioKart,
            TournamentState::JustFu(_) => TournamentType::JustFu,
        }
    }
}

/// Input that moves a tournament forward. Each event belongs to one or more formats.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TournamentEvent {
    /// 1v1: toggle a match winner.
    SelectWinner { match_id: String, player_id: PlayerId },
    /// 1v1: fold the current round in and pair the next one.
    NextRound,
    /// 1v1: drop the current round and reopen the previous one.
    EditPreviousRound,
    /// Team: set a team's aggregate score.
    SetTeamScore { team: Team, score: i64 },
    /// Free-for-all and Just-Fu groups: set a player's score.
    SetScore { player_id: PlayerId, score: i64 },
    /// Mario-Kart groups: drag a player to a new position.
    MovePlayer { group: String, from: usize, to: usize },
    /// Mario-Kart and Just-Fu: lock the group stage and seed the finals.
    ConfirmGroups,
    /// Mario-Kart finals: drag a finalist to a new position.
    MoveFinalist { tier: FinalTier, from: usize, to: usize },
    /// Just-Fu finals: set a finalist's score.
    SetFinalScore { tier: FinalTier, player_id: PlayerId, score: i64 },
}
