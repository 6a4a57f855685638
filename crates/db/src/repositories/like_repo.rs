//! Repository for the `likes` table.
//!
//! [`LikeRepo::toggle`] is the only writer. It never checks for an existing
//! like and then inserts; instead it runs delete-then-insert inside one
//! transaction and lets the partial unique indexes `uq_likes_user_post` and
//! `uq_likes_user_comment` arbitrate concurrent inserts. The losing
//! transaction sees a unique violation, rolls back, and is reported as
//! [`ToggleError::Conflict`] for the caller to retry.

use sqlx::{PgPool, Postgres, Transaction};
use feed_core::likes::{LikeTarget, ToggleOutcome};
use feed_core::types::DbId;

use crate::error::{constraint_name, is_integrity_violation, is_unique_violation};
use crate::models::like::Like;

/// Column list for likes queries.
const COLUMNS: &str = "id, user_id, post_id, comment_id, created_at";

/// Failure modes of a like toggle.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// A concurrent toggle for the same user and target inserted first.
    #[error("Concurrent like toggle on {0} lost the race, retry the request")]
    Conflict(LikeTarget),

    #[error("{} with id {} not found", .0.entity(), .0.id())]
    TargetNotFound(LikeTarget),

    /// A constraint other than the like uniqueness indexes failed, e.g. the
    /// target was deleted between the existence check and the insert.
    #[error("Integrity violation while toggling like on {target}: {message}")]
    Integrity { target: LikeTarget, message: String },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides the like toggle and like lookups.
pub struct LikeRepo;

impl LikeRepo {
    /// Flip `user_id`'s like on `target`.
    ///
    /// Runs as a single transaction: delete the existing like if there is
    /// one (`Unliked`), otherwise insert a new one (`Liked`). Any error,
    /// including the future being dropped on timeout, rolls the transaction
    /// back, so a partial toggle is never visible.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        target: LikeTarget,
    ) -> Result<ToggleOutcome, ToggleError> {
        let mut tx = pool.begin().await?;

        if !target_exists(&mut tx, target).await? {
            return Err(ToggleError::TargetNotFound(target));
        }

        let delete = match target {
            LikeTarget::Post(_) => "DELETE FROM likes WHERE user_id = $1 AND post_id = $2",
            LikeTarget::Comment(_) => "DELETE FROM likes WHERE user_id = $1 AND comment_id = $2",
        };
        let deleted = sqlx::query(delete)
            .bind(user_id)
            .bind(target.id())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted > 0 {
            tx.commit().await?;
            tracing::debug!(user_id, %target, "Like removed");
            return Ok(ToggleOutcome::Unliked);
        }

        let (post_id, comment_id) = target.columns();
        let inserted = sqlx::query(
            "INSERT INTO likes (user_id, post_id, comment_id) VALUES ($1, $2, $3)",
        )
        .bind(user_id)
        .bind(post_id)
        .bind(comment_id)
        .execute(&mut *tx)
        .await;

        if let Err(err) = inserted {
            // `tx` is dropped on return, which rolls it back.
            return Err(classify_insert_error(err, target));
        }

        tx.commit().await?;
        tracing::debug!(user_id, %target, "Like added");
        Ok(ToggleOutcome::Liked)
    }

    /// Find the like `user_id` holds on `target`, if any.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        target: LikeTarget,
    ) -> Result<Option<Like>, sqlx::Error> {
        let filter = match target {
            LikeTarget::Post(_) => "post_id",
            LikeTarget::Comment(_) => "comment_id",
        };
        let query = format!("SELECT {COLUMNS} FROM likes WHERE user_id = $1 AND {filter} = $2");
        sqlx::query_as::<_, Like>(&query)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(pool)
            .await
    }

    /// Count all likes on `target`.
    pub async fn count_for_target(pool: &PgPool, target: LikeTarget) -> Result<i64, sqlx::Error> {
        let query = match target {
            LikeTarget::Post(_) => "SELECT COUNT(*) FROM likes WHERE post_id = $1",
            LikeTarget::Comment(_) => "SELECT COUNT(*) FROM likes WHERE comment_id = $1",
        };
        let row: (i64,) = sqlx::query_as(query)
            .bind(target.id())
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

/// Check the target row exists, inside the toggle's transaction.
async fn target_exists(
    tx: &mut Transaction<'_, Postgres>,
    target: LikeTarget,
) -> Result<bool, sqlx::Error> {
    let query = match target {
        LikeTarget::Post(_) => "SELECT EXISTS (SELECT 1 FROM posts WHERE id = $1)",
        LikeTarget::Comment(_) => "SELECT EXISTS (SELECT 1 FROM comments WHERE id = $1)",
    };
    let row: (bool,) = sqlx::query_as(query)
        .bind(target.id())
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0)
}

fn classify_insert_error(err: sqlx::Error, target: LikeTarget) -> ToggleError {
    if is_unique_violation(&err) {
        tracing::warn!(%target, "Like toggle lost a concurrent insert race");
        return ToggleError::Conflict(target);
    }
    if is_integrity_violation(&err) {
        let message = match constraint_name(&err) {
            Some(constraint) => format!("constraint {constraint} violated"),
            None => err.to_string(),
        };
        tracing::error!(%target, error = %err, "Unexpected integrity violation in like toggle");
        return ToggleError::Integrity { target, message };
    }
    ToggleError::Database(err)
}
