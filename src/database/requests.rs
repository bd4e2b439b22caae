use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::*;

use super::*;

/// Number of entries returned by the top leaderboard.
pub const TOP_ENTRIES: usize = 10;

/// A plain confirmation message.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Answers failures raised outside the routes (unknown paths, malformed
/// bodies) with the same `{"detail": ...}` body the routes use.
#[catch(default)]
pub fn default_catcher(
    status: http::Status,
    _request: &Request<'_>,
) -> (http::Status, Json<ErrorDetail>) {
    let detail = status.reason_lossy().to_owned();
    (status, Json(ErrorDetail { detail }))
}

/// Fetches the best scores, best first.
#[get("/leaderboard/top10")]
pub async fn get_top(store: &State<ScoreStore>) -> RequestResult<Json<Vec<ScoreEntry>>> {
    let entries = store.list_top(TOP_ENTRIES).await?;
    Ok(Json(entries))
}

/// Registers a new score and returns it with its assigned id and date.
#[post("/leaderboard", data = "<score>")]
pub async fn add_score(
    score: Json<ScoreCreate>,
    store: &State<ScoreStore>,
) -> RequestResult<Json<ScoreEntry>> {
    let entry = store.submit(score.into_inner()).await?;
    Ok(Json(entry))
}

/// Fetches up to ten ranked scores surrounding the score `id`.
/// Returns an error if no such score exists.
#[get("/leaderboard/<id>/around")]
pub async fn get_around(
    id: ScoreId,
    store: &State<ScoreStore>,
) -> RequestResult<Json<Vec<ScoreEntry>>> {
    let window = store.window_around(&id).await?;
    Ok(Json(window))
}

/// Deletes the score `id`.
/// Returns an error if no such score exists.
#[delete("/leaderboard/<id>")]
pub async fn delete_score(id: ScoreId, store: &State<ScoreStore>) -> RequestResult<Json<Message>> {
    store.delete(&id).await?;
    Ok(Message::new(format!(
        "Score with ID {} deleted successfully.",
        id
    )))
}

/// Deletes every score.
#[delete("/leaderboard")]
pub async fn reset_leaderboard(store: &State<ScoreStore>) -> RequestResult<Json<Message>> {
    store.reset().await?;
    Ok(Message::new("Leaderboard has been reset."))
}
