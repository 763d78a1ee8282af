use rocket::fs::{FileServer, NamedFile, Options};
use rocket::*;

pub mod admin;
pub mod config;
pub mod database;
pub mod leaderboard;
#[cfg(test)]
mod tests;

pub use config::Config;
use database::ScoreStore;

/// Assembles the server around an already initialised store.
pub fn build(store: ScoreStore, config: Config) -> Rocket<Build> {
    let static_files = FileServer::new(&config.static_dir, Options::Index | Options::Missing);

    rocket::build()
        .mount(
            "/",
            routes![
                index,
                database::requests::get_leaderboard,
                database::requests::submit_score
            ],
        )
        .mount("/", static_files)
        .manage::<ScoreStore>(store)
        .manage::<Config>(config)
}

#[get("/")]
async fn index(config: &State<Config>) -> Option<NamedFile> {
    NamedFile::open(config.static_dir.join("index.html"))
        .await
        .ok()
}
