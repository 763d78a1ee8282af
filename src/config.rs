use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://leaderboard.db";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Service settings read from the environment (and `.env`, if present).
/// The bind address and port are left to Rocket's own configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Directory holding the front-end, served at `/`.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: dotenv::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            static_dir: dotenv::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
