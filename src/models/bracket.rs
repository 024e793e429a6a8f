//! Group and finals data for the two 14-player multi-stage formats.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Players exactly required by both group/finals formats.
pub const BRACKET_PLAYER_COUNT: usize = 14;

/// Group key (`A`, `B`, ...) to players. After confirmation, index 0 is the group's best.
pub type Groups = BTreeMap<String, Vec<Player>>;

/// Phase of a group/finals tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Groups,
    Finals,
}

/// Which final a bracket decides, in global ranking order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalTier {
    Championship,
    Silver,
    Bronze,
    Last,
}

/// A single final: its players and (for score-based formats) their scores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FinalBracket {
    pub tier: FinalTier,
    pub name: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub scores: BTreeMap<PlayerId, i64>,
}

impl FinalBracket {
    pub fn new(tier: FinalTier, name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            tier,
            name: name.into(),
            players,
            scores: BTreeMap::new(),
        }
    }

    pub fn score_of(&self, id: &str) -> i64 {
        self.scores.get(id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

/// Mario-Kart-style: 4 serpentine groups ranked by manual reordering, then 4 finals.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MarioKartState {
    pub stage: Stage,
    pub groups: Groups,
    /// Within-group rank (1-indexed), filled on confirmation.
    #[serde(default)]
    pub group_results: BTreeMap<PlayerId, u32>,
    #[serde(default)]
    pub finals: Vec<FinalBracket>,
}

/// Just-Fu-style: 3 serpentine groups ranked by score, then 3 score-ranked finals.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct JustFuState {
    pub stage: Stage,
    /// Seeded roster (points descending); its order breaks score ties.
    pub players: Vec<Player>,
    pub groups: Groups,
    #[serde(default)]
    pub group_scores: BTreeMap<PlayerId, i64>,
    #[serde(default)]
    pub finals: Vec<FinalBracket>,
}

impl JustFuState {
    pub fn group_score_of(&self, id: &str) -> i64 {
        self.group_scores.get(id).copied().unwrap_or(0)
    }
}

/// Look up a final by tier.
pub fn find_final<'a>(finals: &'a [FinalBracket], tier: FinalTier) -> Option<&'a FinalBracket> {
    finals.iter().find(|f| f.tier == tier)
}

pub fn find_final_mut(finals: &mut [FinalBracket], tier: FinalTier) -> Option<&mut FinalBracket> {
    finals.iter_mut().find(|f| f.tier == tier)
}
