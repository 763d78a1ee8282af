use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::*;

mod request_error;
pub mod requests;
mod score;
mod store;
mod store_error;

pub use request_error::*;
pub use score::{GameScore, ScoreRecord, ScoreSubmission, ScoreUpdate, Timestamp};
pub use store::ScoreStore;
pub use store_error::*;
