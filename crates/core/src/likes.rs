//! Like targets and toggle outcomes.
//!
//! A like applies to exactly one post or exactly one comment. The store keeps
//! this as two nullable columns guarded by a check constraint; in Rust the
//! target is a sum type so the "both" and "neither" states cannot be built.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// The single entity a like applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum LikeTarget {
    Post(DbId),
    Comment(DbId),
}

impl LikeTarget {
    /// Build a target from the two optional ids of a request payload.
    ///
    /// Exactly one of them must be present.
    pub fn from_parts(post_id: Option<DbId>, comment_id: Option<DbId>) -> Result<Self, CoreError> {
        match (post_id, comment_id) {
            (Some(id), None) => Ok(LikeTarget::Post(id)),
            (None, Some(id)) => Ok(LikeTarget::Comment(id)),
            _ => Err(CoreError::Validation(
                "Must specify exactly one of post_id or comment_id".to_string(),
            )),
        }
    }

    /// The `(post_id, comment_id)` column pair for this target.
    pub fn columns(&self) -> (Option<DbId>, Option<DbId>) {
        match *self {
            LikeTarget::Post(id) => (Some(id), None),
            LikeTarget::Comment(id) => (None, Some(id)),
        }
    }

    pub fn id(&self) -> DbId {
        match *self {
            LikeTarget::Post(id) | LikeTarget::Comment(id) => id,
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity(&self) -> &'static str {
        match self {
            LikeTarget::Post(_) => "Post",
            LikeTarget::Comment(_) => "Comment",
        }
    }
}

impl fmt::Display for LikeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LikeTarget::Post(id) => write!(f, "post {id}"),
            LikeTarget::Comment(id) => write!(f, "comment {id}"),
        }
    }
}

/// Result of a committed toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Liked,
    Unliked,
}

impl ToggleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleOutcome::Liked => "liked",
            ToggleOutcome::Unliked => "unliked",
        }
    }
}
