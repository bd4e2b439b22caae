const DEFAULT_DATABASE_URL: &str = "sqlite://leaderboard.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Settings of the score database.
/// The HTTP side is configured through Rocket's own `Rocket.toml`/`ROCKET_*`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Reads the configuration from the environment and an optional `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let database_url =
            dotenv::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        let max_connections = match dotenv::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => parse_connections(&value)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    /// A private in-memory database. It lives in a single pooled connection.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_owned(),
            max_connections: 1,
        }
    }
}

fn parse_connections(value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(0) => Err(ConfigError::Invalid {
            name: "DATABASE_MAX_CONNECTIONS",
            reason: "must be at least 1".to_owned(),
        }),
        Ok(count) => Ok(count),
        Err(err) => Err(ConfigError::Invalid {
            name: "DATABASE_MAX_CONNECTIONS",
            reason: err.to_string(),
        }),
    }
}
