use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Handlers keep no state of their own between requests;
/// all coordination between concurrent requests happens in the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: feed_db::DbPool,
    /// Server configuration, including JWT settings and the karma policy.
    pub config: Arc<ServerConfig>,
}
