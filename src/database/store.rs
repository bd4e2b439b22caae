use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info, warn};

use super::*;
use crate::config::ServerConfig;
use crate::leaderboard::Leaderboard;

// Equal scores rank by earlier registration first, then by id
const SELECT_RANKED: &str =
    "SELECT * FROM scores ORDER BY score DESC, registration_date ASC, id ASC";

/// Handle to the `scores` table.
///
/// Cloning is cheap: clones share the same connection pool, and every
/// operation checks a connection out of it only for its own duration.
#[derive(Clone)]
pub struct ScoreStore {
    pool: DatabasePool,
}

impl ScoreStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Connects to the database described by `config`,
    /// creating the database file and the `scores` table if needed.
    pub async fn connect(config: &ServerConfig) -> Result<Self, sqlx::Error> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            // An in-memory database lives only as long as its connection
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.create_table().await?;
        Ok(store)
    }

    pub async fn create_table(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS scores (
                id TEXT PRIMARY KEY,
                registration_date TEXT NOT NULL,
                score INTEGER NOT NULL,
                survival_time INTEGER NOT NULL,
                nickname TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Stores a new entry with a freshly generated id and the current date.
    pub async fn submit(&self, score: ScoreCreate) -> RequestResult<ScoreEntry> {
        let entry = ScoreEntry::register(score);

        let mut transaction = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO scores (id, registration_date, score, survival_time, nickname) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(entry.id.as_str())
        .bind(format_date(&entry.registration_date))
        .bind(entry.score)
        .bind(entry.survival_time)
        .bind(&entry.nickname)
        .execute(&mut *transaction)
        .await?;
        transaction.commit().await?;

        info!(id = %entry.id, score = entry.score, "score submitted");
        Ok(entry)
    }

    /// Fetches the `limit` best entries, best first.
    pub async fn list_top(&self, limit: usize) -> RequestResult<Vec<ScoreEntry>> {
        let query = format!("{} LIMIT ?", SELECT_RANKED);
        let entries = sqlx::query_as::<_, ScoreEntry>(&query)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        debug!("fetched {} top entries", entries.len());
        Ok(entries)
    }

    /// Fetches the window of ranked entries surrounding the entry `id`.
    ///
    /// The lookup and the ranked scan run in one transaction,
    /// so both observe the same state of the table.
    pub async fn window_around(&self, id: &ScoreId) -> RequestResult<Vec<ScoreEntry>> {
        let not_found = || LeaderboardError::NotFound { id: id.clone() };

        let mut transaction = self.pool.begin().await?;

        sqlx::query("SELECT id FROM scores WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&mut *transaction)
            .await?
            .ok_or_else(not_found)?;

        let ranked = sqlx::query_as::<_, ScoreEntry>(SELECT_RANKED)
            .fetch_all(&mut *transaction)
            .await?;
        transaction.commit().await?;

        let total = ranked.len();
        let window = Leaderboard::new(ranked).around(id).ok_or_else(|| {
            warn!(%id, "entry vanished between lookup and ranking");
            not_found()
        })?;

        debug!(%id, total, "fetched {} entries around", window.len());
        Ok(window)
    }

    pub async fn delete(&self, id: &ScoreId) -> RequestResult<()> {
        let mut transaction = self.pool.begin().await?;
        let response = sqlx::query("DELETE FROM scores WHERE id = ?")
            .bind(id.as_str())
            .execute(&mut *transaction)
            .await?;

        if response.rows_affected() == 0 {
            transaction.rollback().await?;
            return Err(LeaderboardError::NotFound { id: id.clone() });
        }
        transaction.commit().await?;

        info!(%id, "score deleted");
        Ok(())
    }

    /// Deletes every entry and returns how many were removed.
    pub async fn reset(&self) -> RequestResult<u64> {
        let mut transaction = self.pool.begin().await?;
        let response = sqlx::query("DELETE FROM scores")
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;

        let rows_affected = response.rows_affected();
        info!(removed = rows_affected, "leaderboard reset");
        Ok(rows_affected)
    }
}
