//! Fixture helpers shared by the repository integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use feed_core::types::DbId;
use feed_db::models::comment::{Comment, CreateComment};
use feed_db::models::post::{CreatePost, Post};
use feed_db::models::user::{CreateUser, User};
use feed_db::repositories::{CommentRepo, PostRepo, UserRepo};

pub async fn user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            bio: String::new(),
        },
    )
    .await
    .unwrap()
}

pub async fn post(pool: &PgPool, author_id: DbId, content: &str) -> Post {
    PostRepo::create(
        pool,
        author_id,
        &CreatePost {
            content: content.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn comment(
    pool: &PgPool,
    post_id: DbId,
    author_id: DbId,
    parent_id: Option<DbId>,
    content: &str,
) -> Comment {
    CommentRepo::create(
        pool,
        author_id,
        &CreateComment {
            post_id,
            parent_id,
            content: content.to_string(),
        },
    )
    .await
    .unwrap()
}

/// Insert a like with an explicit timestamp, bypassing the toggle.
pub async fn like_at(
    pool: &PgPool,
    user_id: DbId,
    post_id: Option<DbId>,
    comment_id: Option<DbId>,
    created_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO likes (user_id, post_id, comment_id, created_at) VALUES ($1, $2, $3, $4)")
        .bind(user_id)
        .bind(post_id)
        .bind(comment_id)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn like_rows(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM likes")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}
