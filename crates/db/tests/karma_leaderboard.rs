//! Integration tests for the live karma leaderboard.
//!
//! Likes are inserted with explicit timestamps and the leaderboard is
//! evaluated at a fixed `now`, so the window arithmetic is deterministic.

mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::PgPool;
use feed_core::karma::KarmaPolicy;
use feed_db::repositories::KarmaRepo;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Weighting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_and_comment_likes_are_weighted(pool: PgPool) {
    let author = common::user(&pool, "author").await;
    let post_a = common::post(&pool, author.id, "a").await;
    let post_b = common::post(&pool, author.id, "b").await;
    let comment = common::comment(&pool, post_a.id, author.id, None, "c").await;

    let likers = [
        common::user(&pool, "liker1").await,
        common::user(&pool, "liker2").await,
        common::user(&pool, "liker3").await,
    ];
    let at = now() - Duration::hours(1);

    common::like_at(&pool, likers[0].id, Some(post_a.id), None, at).await;
    common::like_at(&pool, likers[1].id, Some(post_b.id), None, at).await;
    for liker in &likers {
        common::like_at(&pool, liker.id, None, Some(comment.id), at).await;
    }

    let board = KarmaRepo::top(&pool, &KarmaPolicy::default(), now(), 5).await.unwrap();

    assert_eq!(board.len(), 1);
    assert_eq!(board[0].user_id, author.id);
    assert_eq!(board[0].username, "author");
    assert_eq!(board[0].karma, 2 * 5 + 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_custom_policy_changes_weights(pool: PgPool) {
    let author = common::user(&pool, "author").await;
    let liker = common::user(&pool, "liker").await;
    let post = common::post(&pool, author.id, "a").await;
    let comment = common::comment(&pool, post.id, author.id, None, "c").await;
    let at = now() - Duration::hours(1);

    common::like_at(&pool, liker.id, Some(post.id), None, at).await;
    common::like_at(&pool, liker.id, None, Some(comment.id), at).await;

    let policy = KarmaPolicy::new(10, 3, 24).unwrap();
    let board = KarmaRepo::top(&pool, &policy, now(), 5).await.unwrap();
    assert_eq!(board[0].karma, 13);
}

// ---------------------------------------------------------------------------
// Window boundary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_window_start_is_inclusive(pool: PgPool) {
    let author = common::user(&pool, "author").await;
    let liker = common::user(&pool, "liker").await;
    let post = common::post(&pool, author.id, "a").await;

    common::like_at(&pool, liker.id, Some(post.id), None, now() - Duration::hours(24)).await;

    let board = KarmaRepo::top(&pool, &KarmaPolicy::default(), now(), 5).await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].karma, 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_like_just_outside_window_is_excluded(pool: PgPool) {
    let author = common::user(&pool, "author").await;
    let liker = common::user(&pool, "liker").await;
    let post = common::post(&pool, author.id, "a").await;

    let outside = now() - Duration::hours(24) - Duration::seconds(1);
    common::like_at(&pool, liker.id, Some(post.id), None, outside).await;

    let board = KarmaRepo::top(&pool, &KarmaPolicy::default(), now(), 5).await.unwrap();
    assert!(board.is_empty(), "stale like must not count: {board:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_like_stamped_ahead_of_caller_clock_counts(pool: PgPool) {
    let author = common::user(&pool, "author").await;
    let liker = common::user(&pool, "liker").await;
    let post = common::post(&pool, author.id, "a").await;

    // The database clock runs slightly ahead of the caller's `now`.
    common::like_at(&pool, liker.id, Some(post.id), None, now() + Duration::milliseconds(50)).await;

    let board = KarmaRepo::top(&pool, &KarmaPolicy::default(), now(), 5).await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].user_id, author.id);
    assert_eq!(board[0].karma, 5);
}

// ---------------------------------------------------------------------------
// Ordering and truncation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ranking_orders_by_karma_then_user_id(pool: PgPool) {
    let first = common::user(&pool, "first").await;
    let second = common::user(&pool, "second").await;
    let third = common::user(&pool, "third").await;
    let liker = common::user(&pool, "liker").await;
    let at = now() - Duration::minutes(5);

    // `second` and `third` tie on one post like each; `first` has one comment like.
    let p2 = common::post(&pool, second.id, "p2").await;
    let p3 = common::post(&pool, third.id, "p3").await;
    let c1 = common::comment(&pool, p2.id, first.id, None, "c1").await;
    common::like_at(&pool, liker.id, Some(p3.id), None, at).await;
    common::like_at(&pool, liker.id, Some(p2.id), None, at).await;
    common::like_at(&pool, liker.id, None, Some(c1.id), at).await;

    let board = KarmaRepo::top(&pool, &KarmaPolicy::default(), now(), 5).await.unwrap();
    let ranked: Vec<_> = board.iter().map(|e| (e.user_id, e.karma)).collect();
    assert_eq!(ranked, vec![(second.id, 5), (third.id, 5), (first.id, 1)]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_is_truncated_to_limit(pool: PgPool) {
    let liker = common::user(&pool, "liker").await;
    let at = now() - Duration::minutes(5);

    for i in 0..7 {
        let author = common::user(&pool, &format!("author{i}")).await;
        let post = common::post(&pool, author.id, "p").await;
        common::like_at(&pool, liker.id, Some(post.id), None, at).await;
    }

    let board = KarmaRepo::top(&pool, &KarmaPolicy::default(), now(), 5).await.unwrap();
    assert_eq!(board.len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_users_without_karma_are_omitted(pool: PgPool) {
    let author = common::user(&pool, "author").await;
    let _idle = common::user(&pool, "idle").await;
    let liker = common::user(&pool, "liker").await;
    let post = common::post(&pool, author.id, "p").await;
    common::like_at(&pool, liker.id, Some(post.id), None, now() - Duration::hours(2)).await;

    let board = KarmaRepo::top(&pool, &KarmaPolicy::default(), now(), 5).await.unwrap();
    let names: Vec<_> = board.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(names, vec!["author"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_weight_karma_is_filtered(pool: PgPool) {
    let author = common::user(&pool, "author").await;
    let liker = common::user(&pool, "liker").await;
    let post = common::post(&pool, author.id, "p").await;
    let comment = common::comment(&pool, post.id, author.id, None, "c").await;
    common::like_at(&pool, liker.id, None, Some(comment.id), now() - Duration::hours(2)).await;

    let policy = KarmaPolicy::new(5, 0, 24).unwrap();
    let board = KarmaRepo::top(&pool, &policy, now(), 5).await.unwrap();
    assert!(board.is_empty());
}
