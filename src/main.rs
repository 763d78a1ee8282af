use anyhow::Context;
use snake_leaderboard::{database::ScoreStore, Config};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    let config = Config::from_env();
    tracing::info!("Using database at {}", config.database_url);

    // Connect to a database
    let store = ScoreStore::connect(&config.database_url)
        .await
        .context("failed to connect to a database")?;
    store
        .init_schema()
        .await
        .context("failed to create the scores table")?;

    // Build the rocket
    let _rocket = snake_leaderboard::build(store, config)
        .launch()
        .await
        .map_err(|error| anyhow::anyhow!("server terminated with an error: {}", error))?;

    Ok(())
}
