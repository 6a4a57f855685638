use axum::routing::get;
use axum::Router;

use crate::handlers::leaderboard;
use crate::state::AppState;

/// Leaderboard routes, mounted at `/leaderboard`.
pub fn router() -> Router<AppState> {
    Router::new().route("/top", get(leaderboard::top))
}
