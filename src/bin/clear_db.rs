use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use snake_leaderboard::admin::{self, ClearOutcome};
use snake_leaderboard::database::StoreError;

#[derive(Parser)]
#[command(name = "clear_db")]
#[command(about = "Deletes every score from the leaderboard database", long_about = None)]
struct Cli {
    /// Path to the leaderboard database file. Relative paths resolve against
    /// the current directory, so pass `--database ../leaderboard.db` when
    /// running from a subdirectory.
    #[arg(long, env = "LEADERBOARD_DB", default_value = "leaderboard.db")]
    database: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

fn ask_confirmation(count: u64) -> bool {
    print!(
        "Are you sure you want to delete ALL {} scores? (y/n): ",
        count
    );
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let store = match admin::open_existing(&cli.database).await {
        Ok(store) => store,
        Err(StoreError::Missing(path)) => {
            println!("Error: database file '{}' not found.", path.display());
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    let count = store.count().await?;
    println!("Found {} records in leaderboard.", count);

    let skip_prompt = cli.yes;
    let outcome = admin::clear_scores(&store, |count| async move {
        if skip_prompt {
            return true;
        }
        tokio::task::spawn_blocking(move || ask_confirmation(count))
            .await
            .unwrap_or(false)
    })
    .await?;
    store.close().await;

    match outcome {
        ClearOutcome::AlreadyEmpty => println!("Leaderboard is already empty."),
        ClearOutcome::Cancelled => println!("Operation cancelled."),
        ClearOutcome::Cleared(count) => println!("Successfully cleared {} scores.", count),
    }

    Ok(())
}
