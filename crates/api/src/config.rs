use feed_core::karma::{
    KarmaPolicy, DEFAULT_COMMENT_LIKE_WEIGHT, DEFAULT_POST_LIKE_WEIGHT, DEFAULT_WINDOW_HOURS,
};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for in-flight requests on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// JWT token configuration.
    pub jwt: JwtConfig,
    /// Like weights and window used by the leaderboard.
    pub karma: KarmaPolicy,
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} has an invalid value: {raw}")),
        Err(_) => default,
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `HOST`                      | `0.0.0.0`               |
    /// | `PORT`                      | `3000`                  |
    /// | `CORS_ORIGINS`              | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`     | `30`                    |
    /// | `DB_MAX_CONNECTIONS`        | `20`                    |
    /// | `KARMA_POST_LIKE_WEIGHT`    | `5`                     |
    /// | `KARMA_COMMENT_LIKE_WEIGHT` | `1`                     |
    /// | `KARMA_WINDOW_HOURS`        | `24`                    |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values or an invalid karma policy, so
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let karma = KarmaPolicy::new(
            env_or("KARMA_POST_LIKE_WEIGHT", DEFAULT_POST_LIKE_WEIGHT),
            env_or("KARMA_COMMENT_LIKE_WEIGHT", DEFAULT_COMMENT_LIKE_WEIGHT),
            env_or("KARMA_WINDOW_HOURS", DEFAULT_WINDOW_HOURS),
        )
        .unwrap_or_else(|e| panic!("Invalid karma configuration: {e}"));

        Self {
            host,
            port: env_or("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_or("SHUTDOWN_TIMEOUT_SECS", 30),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 20),
            jwt: JwtConfig::from_env(),
            karma,
        }
    }
}
