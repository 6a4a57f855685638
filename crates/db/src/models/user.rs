//! User models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use feed_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub bio: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for inserting a user. The password is already hashed.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub bio: String,
}

/// Lightweight author representation embedded in posts and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub username: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
