use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),

    #[error("database file {} does not exist", .0.display())]
    Missing(PathBuf),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
