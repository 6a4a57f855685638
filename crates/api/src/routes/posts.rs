//! Route definitions for `/posts`.
//!
//! ```text
//! GET  /              list_posts
//! POST /              create_post
//! GET  /{id}          get_post (with nested comments)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{id}", get(posts::get_post))
}
