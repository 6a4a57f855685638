//! Handlers for comments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use feed_core::comment_tree::validate_reply_parent;
use feed_core::content;
use feed_core::error::CoreError;
use feed_core::types::DbId;
use feed_db::models::comment::{Comment, CreateComment};
use feed_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a comment exists, returning the full row.
async fn ensure_comment_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Comment> {
    CommentRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))
}

// ---------------------------------------------------------------------------
// POST /comments
// ---------------------------------------------------------------------------

/// Create a comment or a reply.
///
/// The post must exist, and a reply's parent must exist on the same post.
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    content::validate_comment_content(&body.content)?;

    if PostRepo::find_by_id(&state.pool, body.post_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id: body.post_id,
        }));
    }

    if let Some(parent_id) = body.parent_id {
        let parent = ensure_comment_exists(&state.pool, parent_id).await?;
        validate_reply_parent(body.post_id, parent.id, parent.post_id)?;
    }

    let comment = CommentRepo::create(&state.pool, auth.user_id, &body).await?;

    tracing::info!(
        comment_id = comment.id,
        post_id = comment.post_id,
        parent_id = ?comment.parent_id,
        user_id = auth.user_id,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

// ---------------------------------------------------------------------------
// GET /comments/{id}
// ---------------------------------------------------------------------------

/// Get a single comment by ID.
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Comment>>> {
    let comment = ensure_comment_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: comment }))
}
