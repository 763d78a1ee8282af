//! Administrative operations on an existing leaderboard database.

use std::future::Future;
use std::path::Path;

use sqlx::sqlite::SqliteConnectOptions;

use crate::database::{ScoreStore, StoreError, StoreResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    /// There was nothing to delete; confirmation was not requested.
    AlreadyEmpty,
    /// The operator declined.
    Cancelled,
    /// Number of records deleted.
    Cleared(u64),
}

/// Opens the database file at `path` without creating it.
pub async fn open_existing(path: &Path) -> StoreResult<ScoreStore> {
    if !path.is_file() {
        return Err(StoreError::Missing(path.to_owned()));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false);
    ScoreStore::connect_with(options).await
}

/// Deletes every score once `confirm` agrees. `confirm` receives the number
/// of stored records and is only asked when there is something to delete.
pub async fn clear_scores<F, Fut>(store: &ScoreStore, confirm: F) -> StoreResult<ClearOutcome>
where
    F: FnOnce(u64) -> Fut,
    Fut: Future<Output = bool>,
{
    let count = store.count().await?;
    tracing::debug!("found {} records in the leaderboard", count);

    if count == 0 {
        return Ok(ClearOutcome::AlreadyEmpty);
    }

    if !confirm(count).await {
        return Ok(ClearOutcome::Cancelled);
    }

    let removed = store.clear_all().await?;
    Ok(ClearOutcome::Cleared(removed))
}
