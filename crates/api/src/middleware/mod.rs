//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the authenticated user from a JWT Bearer token,
//!   required (`AuthUser`) or optional (`Option<AuthUser>`).

pub mod auth;
