use std::str::FromStr;
#[cfg(test)]
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::*;

/// Persistent best-score-per-player store backed by a single SQLite table.
#[derive(Clone, Debug)]
pub struct ScoreStore {
    pool: SqlitePool,
}

impl ScoreStore {
    /// Connects to the database at `database_url`, creating the file if it is missing.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        Self::connect_with(options).await
    }

    pub async fn connect_with(options: SqliteConnectOptions) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// A private in-memory database. The pool is pinned to one connection
    /// that never expires, since every sqlite memory connection is its own database.
    #[cfg(test)]
    pub(crate) async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Creates the `scores` table if it does not exist yet.
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS scores (
                name TEXT PRIMARY KEY,
                score INTEGER NOT NULL,
                timestamp INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Fetches up to `limit` records, best score first.
    /// Equal scores are ordered by who reached them first, then by name.
    pub async fn get_top(&self, limit: u32) -> StoreResult<Vec<ScoreRecord>> {
        let records = sqlx::query_as::<_, ScoreRecord>(
            "SELECT name, score, timestamp FROM scores
            ORDER BY score DESC, timestamp ASC, name ASC
            LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Fetches the record stored for `name`, if any.
    pub async fn get(&self, name: &str) -> StoreResult<Option<ScoreRecord>> {
        let record = sqlx::query_as::<_, ScoreRecord>(
            "SELECT name, score, timestamp FROM scores WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Records `score` for `name` stamped with the current time.
    pub async fn submit(&self, name: &str, score: GameScore) -> StoreResult<ScoreUpdate> {
        let now = chrono::Utc::now().timestamp_millis();
        self.submit_at(name, score, now).await
    }

    /// Inserts a record for a new player or replaces the stored one if `score` beats it.
    /// A score that does not beat the stored best is ignored.
    pub async fn submit_at(
        &self,
        name: &str,
        score: GameScore,
        timestamp: Timestamp,
    ) -> StoreResult<ScoreUpdate> {
        if name.is_empty() {
            return Err(StoreError::InvalidInput("empty player name".to_owned()));
        }

        let response = sqlx::query(
            "INSERT INTO scores (name, score, timestamp) VALUES (?, ?, ?)
            ON CONFLICT(name) DO UPDATE
            SET score = excluded.score, timestamp = excluded.timestamp
            WHERE excluded.score > scores.score",
        )
        .bind(name)
        .bind(score)
        .bind(timestamp)
        .execute(&self.pool)
        .await?;

        if response.rows_affected() > 0 {
            Ok(ScoreUpdate::Recorded)
        } else {
            Ok(ScoreUpdate::Ignored)
        }
    }

    pub async fn count(&self) -> StoreResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM scores")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    /// Deletes every record and returns how many were removed.
    pub async fn clear_all(&self) -> StoreResult<u64> {
        let response = sqlx::query("DELETE FROM scores")
            .execute(&self.pool)
            .await?;
        Ok(response.rows_affected())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
