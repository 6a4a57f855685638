use axum::routing::post;
use axum::Router;

use crate::handlers::likes;
use crate::state::AppState;

/// Like routes, mounted at `/likes`.
pub fn router() -> Router<AppState> {
    Router::new().route("/toggle", post(likes::toggle_like))
}
