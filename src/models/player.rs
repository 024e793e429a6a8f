//! Player: identity and running point total within a room.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque player identifier (document id in the room's store).
pub type PlayerId = String;

/// A registered player in a room.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Running total across every recorded game.
    #[serde(default)]
    pub points: u32,
}

impl Player {
    /// Create a new player with the given name and a fresh id. Points start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            points: 0,
        }
    }

    /// Build a player from an existing roster record.
    pub fn with_id(id: impl Into<PlayerId>, name: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
        }
    }

    /// Apply an awarded delta.
    pub fn add_points(&mut self, delta: u32) {
        self.points = self.points.saturating_add(delta);
    }

    /// Revert a previously awarded delta. Never goes below zero.
    pub fn remove_points(&mut self, delta: u32) {
        self.points = self.points.saturating_sub(delta);
    }
}
