pub mod auth;
pub mod comments;
pub mod health;
pub mod leaderboard;
pub mod likes;
pub mod posts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/me                       current user (requires auth)
///
/// /posts                         list (public), create (requires auth)
/// /posts/{id}                    detail with nested comments (public)
///
/// /comments                      create (requires auth)
/// /comments/{id}                 get (public)
///
/// /likes/toggle                  like/unlike a post or comment (requires auth)
///
/// /leaderboard/top               top users by 24h karma (public, ?limit)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/posts", posts::router())
        .nest("/comments", comments::router())
        .nest("/likes", likes::router())
        .nest("/leaderboard", leaderboard::router())
}
