//! Route definitions for `/comments`.
//!
//! ```text
//! POST /              create_comment
//! GET  /{id}          get_comment
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(comments::create_comment))
        .route("/{id}", get(comments::get_comment))
}
