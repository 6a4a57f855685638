//! Domain logic for the community feed.
//!
//! Everything in this crate is pure: no database or network access. The
//! `feed-db` and `feed-api` crates call into these modules for validation,
//! comment thread assembly, like-target modelling, and karma policy.

pub mod comment_tree;
pub mod content;
pub mod error;
pub mod karma;
pub mod likes;
pub mod types;
