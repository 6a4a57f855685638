//! Leaderboard aggregation over the `likes` history.
//!
//! Karma is derived, never stored: each call scores the likes received by
//! every author inside the trailing window in a single grouped query.

use sqlx::PgPool;
use feed_core::karma::KarmaPolicy;
use feed_core::types::Timestamp;

use crate::models::karma::LeaderboardEntry;

/// Provides the live karma leaderboard.
pub struct KarmaRepo;

impl KarmaRepo {
    /// Top `limit` users by karma earned in the window ending at `now`.
    ///
    /// Post likes and comment likes stamped at or after `now - window` are
    /// turned into weighted points per author, summed, filtered to positive
    /// totals, and ordered by karma descending then user id ascending.
    ///
    /// `created_at` comes from the database clock, so the window has no
    /// upper bound: a like committed just before this call always counts,
    /// even if the database clock is ahead of `now`.
    pub async fn top(
        pool: &PgPool,
        policy: &KarmaPolicy,
        now: Timestamp,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let window_start = policy.window_start(now);

        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            "WITH points AS (
                SELECT p.author_id AS user_id, $1::BIGINT AS points
                FROM likes l
                JOIN posts p ON p.id = l.post_id
                WHERE l.created_at >= $3
                UNION ALL
                SELECT c.author_id AS user_id, $2::BIGINT AS points
                FROM likes l
                JOIN comments c ON c.id = l.comment_id
                WHERE l.created_at >= $3
             )
             SELECT u.id AS user_id, u.username, SUM(points.points)::BIGINT AS karma
             FROM points
             JOIN users u ON u.id = points.user_id
             GROUP BY u.id, u.username
             HAVING SUM(points.points) > 0
             ORDER BY karma DESC, u.id ASC
             LIMIT $4",
        )
        .bind(policy.post_like_weight)
        .bind(policy.comment_like_weight)
        .bind(window_start)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        tracing::debug!(
            count = entries.len(),
            %window_start,
            "Computed karma leaderboard"
        );

        Ok(entries)
    }
}
