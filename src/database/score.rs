use rocket::serde::{Deserialize, Serialize};

pub type GameScore = i64;

/// Milliseconds since the unix epoch.
pub type Timestamp = i64;

/// A player's best score as stored in the `scores` table.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct ScoreRecord {
    pub name: String,
    pub score: GameScore,
    pub timestamp: Timestamp,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: GameScore, timestamp: Timestamp) -> Self {
        Self {
            name: name.into(),
            score,
            timestamp,
        }
    }
}

/// Body of a score submission. Both fields are optional on the wire
/// so that a missing one is reported as invalid data.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
#[serde(crate = "rocket::serde")]
pub struct ScoreSubmission {
    pub name: Option<String>,
    pub score: Option<GameScore>,
}

impl ScoreSubmission {
    pub fn new(name: impl Into<String>, score: GameScore) -> Self {
        Self {
            name: Some(name.into()),
            score: Some(score),
        }
    }

    /// Returns the player name and score if both are present and the name is not empty.
    pub fn into_parts(self) -> Option<(String, GameScore)> {
        match (self.name, self.score) {
            (Some(name), Some(score)) if !name.is_empty() => Some((name, score)),
            _ => None,
        }
    }
}

/// Result of a submission that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreUpdate {
    /// A new record was created or the stored best was beaten.
    Recorded,
    /// The stored best was higher or equal; nothing changed.
    Ignored,
}
