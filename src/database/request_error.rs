use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::{json::Json, Deserialize, Serialize};
use rocket::Request;

use crate::score_id::ScoreId;

#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Score ID {id} not found")]
    NotFound { id: ScoreId },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl LeaderboardError {
    pub fn status(&self) -> Status {
        match self {
            Self::NotFound { .. } => Status::NotFound,
            Self::Database(_) => Status::InternalServerError,
        }
    }
}

/// Body of an error response.
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ErrorDetail {
    pub detail: String,
}

impl<'r, 'o: 'r> Responder<'r, 'o> for LeaderboardError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'o> {
        let detail = match &self {
            Self::NotFound { .. } => self.to_string(),
            Self::Database(err) => {
                tracing::error!(%err, uri = %request.uri(), "request failed");
                "internal error".to_owned()
            }
        };
        (self.status(), Json(ErrorDetail { detail })).respond_to(request)
    }
}

pub type RequestResult<T, E = LeaderboardError> = std::result::Result<T, E>;
