//! Handlers for posts: creation, the feed listing, and post detail with its
//! assembled comment thread.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use feed_core::comment_tree::{self, CommentNode};
use feed_core::content;
use feed_core::error::CoreError;
use feed_core::types::DbId;
use feed_db::models::comment::ThreadComment;
use feed_db::models::post::{CreatePost, Post, PostWithStats};
use feed_db::repositories::{CommentRepo, PostRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A post with its full comment forest.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: PostWithStats,
    pub comments: Vec<CommentNode<ThreadComment>>,
}

// ---------------------------------------------------------------------------
// GET /posts
// ---------------------------------------------------------------------------

/// List all posts newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    viewer: Option<AuthUser>,
) -> AppResult<Json<DataResponse<Vec<PostWithStats>>>> {
    let viewer_id = viewer.map(|v| v.user_id);
    let rows = PostRepo::list_with_stats(&state.pool, viewer_id).await?;

    tracing::debug!(count = rows.len(), ?viewer_id, "Listed posts");

    let posts = rows.into_iter().map(PostWithStats::from).collect();
    Ok(Json(DataResponse { data: posts }))
}

// ---------------------------------------------------------------------------
// POST /posts
// ---------------------------------------------------------------------------

/// Create a post authored by the caller.
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<CreatePost>,
) -> AppResult<(StatusCode, Json<DataResponse<Post>>)> {
    content::validate_post_content(&body.content)?;

    let post = PostRepo::create(&state.pool, auth.user_id, &body).await?;

    tracing::info!(post_id = post.id, user_id = auth.user_id, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

// ---------------------------------------------------------------------------
// GET /posts/{id}
// ---------------------------------------------------------------------------

/// Fetch a post with its nested comment thread.
///
/// Comments come back from one flat query and are linked in memory. The
/// post and its comments are read in the same snapshot.
pub async fn get_post(
    State(state): State<AppState>,
    viewer: Option<AuthUser>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PostDetail>>> {
    let viewer_id = viewer.map(|v| v.user_id);

    // One snapshot for both reads, so the counts match the thread.
    let mut tx = feed_db::begin_snapshot(&state.pool).await?;

    let post = PostRepo::find_with_stats(&mut *tx, id, viewer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    let rows = CommentRepo::list_thread(&mut *tx, id, viewer_id).await?;
    tx.commit().await?;

    let comment_count = rows.len();
    let forest = comment_tree::assemble(rows.into_iter().map(ThreadComment::from).collect());

    if !forest.promoted.is_empty() {
        tracing::warn!(
            post_id = id,
            promoted = ?forest.promoted,
            "Comments with unresolved parents promoted to top level"
        );
    }

    tracing::debug!(post_id = id, comment_count, roots = forest.roots.len(), "Assembled thread");

    Ok(Json(DataResponse {
        data: PostDetail {
            post: PostWithStats::from(post),
            comments: forest.roots,
        },
    }))
}
