use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rocket::serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

use crate::leaderboard::LeaderboardItem;
use crate::score_id::ScoreId;

pub type GameScore = i64;

/// A persisted leaderboard entry.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreEntry {
    pub id: ScoreId,
    pub registration_date: DateTime<Utc>,
    pub score: GameScore,
    pub survival_time: i64,
    pub nickname: String,
}

/// A score submission, before the server assigns an id and a date.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreCreate {
    pub score: GameScore,
    pub survival_time: i64,
    pub nickname: String,
}

impl ScoreCreate {
    pub fn new(score: GameScore, survival_time: i64, nickname: impl Into<String>) -> Self {
        Self {
            score,
            survival_time,
            nickname: nickname.into(),
        }
    }
}

impl ScoreEntry {
    /// Assigns a new id and the current date to a submission.
    /// The date is truncated to the microsecond precision it is stored with.
    pub fn register(score: ScoreCreate) -> Self {
        Self {
            id: ScoreId::generate(),
            registration_date: Utc::now().trunc_subsecs(6),
            score: score.score,
            survival_time: score.survival_time,
            nickname: score.nickname,
        }
    }
}

/// Formats a date the way it is stored in the `scores` table.
/// Fixed width with a `Z` suffix, so stored dates sort chronologically as text.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl<'r> FromRow<'r, SqliteRow> for ScoreEntry {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let registration_date: String = row.try_get("registration_date")?;
        let registration_date = DateTime::parse_from_rfc3339(&registration_date)
            .map_err(|err| sqlx::Error::ColumnDecode {
                index: "registration_date".to_owned(),
                source: Box::new(err),
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: ScoreId::from(row.try_get::<String, _>("id")?),
            registration_date,
            score: row.try_get("score")?,
            survival_time: row.try_get("survival_time")?,
            nickname: row.try_get("nickname")?,
        })
    }
}

impl LeaderboardItem for ScoreEntry {
    type Id = ScoreId;

    fn id(&self) -> &ScoreId {
        &self.id
    }
}
