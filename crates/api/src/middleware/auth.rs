//! JWT-based authentication extractor for Axum handlers.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use feed_core::error::CoreError;
use feed_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Use `AuthUser` for endpoints that require a login and `Option<AuthUser>`
/// for public reads that personalise their response (e.g. `user_has_liked`).
/// A present but invalid token is rejected in both cases.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub username: String,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

fn decode_header(value: &str, state: &AppState) -> Result<AuthUser, AppError> {
    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

    let claims = validate_token(token, &state.config.jwt)
        .map_err(|_| unauthorized("Invalid or expired token"))?;

    Ok(AuthUser {
        user_id: claims.sub,
        username: claims.username,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        decode_header(header, state)
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match parts.headers.get(AUTHORIZATION) {
            None => Ok(None),
            Some(value) => {
                let header = value
                    .to_str()
                    .map_err(|_| unauthorized("Malformed Authorization header"))?;
                decode_header(header, state).map(Some)
            }
        }
    }
}
