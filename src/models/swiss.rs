//! Swiss (1v1) bracket data: per-player records, matches, and rounds.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// A player's running record inside a 1v1 tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SwissPlayer {
    #[serde(flatten)]
    pub player: Player,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    /// Everyone this player has already faced, in the order they were met.
    #[serde(default)]
    pub opponents: Vec<PlayerId>,
}

impl SwissPlayer {
    pub fn from_player(player: Player) -> Self {
        Self {
            player,
            wins: 0,
            losses: 0,
            opponents: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.player.id
    }

    /// Same player with a blank record (used when replaying rounds).
    pub fn cleared(&self) -> Self {
        Self::from_player(self.player.clone())
    }

    pub fn has_faced(&self, id: &str) -> bool {
        self.opponents.iter().any(|o| o == id)
    }
}

/// Second seat of a match: a real player or the BYE sentinel.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    Player(Player),
    Bye,
}

/// A single 1v1 pairing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// `R{round}M{n}`, unique within the tournament.
    pub match_id: String,
    pub p1: Player,
    pub p2: Opponent,
    /// None while undecided. BYE matches are created already decided for `p1`.
    pub winner: Option<PlayerId>,
}

impl Match {
    pub fn new(round_number: u32, index: usize, p1: Player, p2: Player) -> Self {
        Self {
            match_id: Self::make_id(round_number, index),
            p1,
            p2: Opponent::Player(p2),
            winner: None,
        }
    }

    pub fn bye(round_number: u32, index: usize, p1: Player) -> Self {
        let winner = Some(p1.id.clone());
        Self {
            match_id: Self::make_id(round_number, index),
            p1,
            p2: Opponent::Bye,
            winner,
        }
    }

    fn make_id(round_number: u32, index: usize) -> String {
        format!("R{}M{}", round_number, index)
    }

    pub fn is_bye(&self) -> bool {
        matches!(self.p2, Opponent::Bye)
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// The real opponent in the second seat, if any.
    pub fn p2_player(&self) -> Option<&Player> {
        match &self.p2 {
            Opponent::Player(p) => Some(p),
            Opponent::Bye => None,
        }
    }

    pub fn involves(&self, id: &str) -> bool {
        self.p1.id == id || self.p2_player().is_some_and(|p| p.id == id)
    }

    /// Loser of a decided non-bye match. None if undecided, a bye, or the winner is not seated here.
    pub fn loser_id(&self) -> Option<&PlayerId> {
        let winner = self.winner.as_ref()?;
        let p2 = self.p2_player()?;
        if *winner == self.p1.id {
            Some(&p2.id)
        } else if *winner == p2.id {
            Some(&self.p1.id)
        } else {
            None
        }
    }
}

/// One round of pairings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub round_number: u32,
    pub matches: Vec<Match>,
}

impl Round {
    /// Every match has a recorded winner (an empty round counts as complete).
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_decided)
    }
}

/// Working state of a 1v1 Swiss tournament.
///
/// `players` carries the records of every round *before* the current one;
/// the current (last) round's results are folded in only when it is advanced.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SwissState {
    pub players: Vec<SwissPlayer>,
    pub rounds: Vec<Round>,
}

impl SwissState {
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn current_round_number(&self) -> u32 {
        self.current_round().map_or(0, |r| r.round_number)
    }

    /// `ceil(log2(player count))`; zero for one player or none.
    pub fn total_rounds(&self) -> u32 {
        match self.players.len() {
            0 | 1 => 0,
            n => n.next_power_of_two().trailing_zeros(),
        }
    }

    pub fn is_round_complete(&self) -> bool {
        self.current_round().is_some_and(Round::is_complete)
    }

    /// Another round may be started.
    pub fn can_advance(&self) -> bool {
        self.is_round_complete() && self.current_round_number() < self.total_rounds()
    }

    /// The tournament may be closed out.
    pub fn can_finish(&self) -> bool {
        self.is_round_complete() && self.current_round_number() >= self.total_rounds()
    }

    /// A previous round exists to go back to.
    pub fn can_rewind(&self) -> bool {
        self.rounds.len() > 1
    }
}
