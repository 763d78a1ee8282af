use crate::leaderboard::{Leaderboard, LEADERBOARD_SIZE};

use super::*;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct SubmitResponse {
    pub success: bool,
}

/// Fetches the top scores, best first.
#[get("/api/leaderboard")]
pub async fn get_leaderboard(store: &State<ScoreStore>) -> RequestResult<Json<Leaderboard>> {
    let records = store.get_top(LEADERBOARD_SIZE).await?;
    Ok(Json(Leaderboard::from_records(records)))
}

/// Records a player's score if it beats their previous best.
/// A score that does not is still reported as a success.
#[post("/api/score", data = "<submission>")]
pub async fn submit_score(
    submission: Option<Json<ScoreSubmission>>,
    store: &State<ScoreStore>,
) -> RequestResult<Json<SubmitResponse>> {
    let (name, score) = submission
        .and_then(|submission| submission.into_inner().into_parts())
        .ok_or(RequestError::InvalidData)?;

    match store.submit(&name, score).await? {
        ScoreUpdate::Recorded => tracing::info!("new best score for {}: {}", name, score),
        ScoreUpdate::Ignored => tracing::debug!("score {} for {} is not an improvement", score, name),
    }

    Ok(Json(SubmitResponse { success: true }))
}
