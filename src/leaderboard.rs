use rocket::serde::{self, Deserialize, Serialize};

use crate::database::{GameScore, ScoreRecord, Timestamp};

/// Number of entries served by the leaderboard endpoint.
pub const LEADERBOARD_SIZE: u32 = 10;

/// One row of the public leaderboard.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: GameScore,
    /// Time of the player's last improvement.
    pub date: Timestamp,
}

impl From<ScoreRecord> for LeaderboardEntry {
    fn from(record: ScoreRecord) -> Self {
        Self {
            name: record.name,
            score: record.score,
            date: record.timestamp,
        }
    }
}

/// Ranked view of the best scores. Serializes as a plain array.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Expects `records` to already be ranked.
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        Self {
            entries: records.into_iter().map(LeaderboardEntry::from).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Leaderboard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Leaderboard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self {
            entries: Vec::deserialize(deserializer)?,
        })
    }
}
