mod request_error;
pub mod requests;
mod score;
mod store;

pub use request_error::*;
pub use score::{format_date, ScoreCreate, ScoreEntry};
pub use store::ScoreStore;

use crate::score_id::ScoreId;

pub type DatabasePool = sqlx::SqlitePool;
