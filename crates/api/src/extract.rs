//! Request extractors whose rejections use the `AppError` JSON envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with malformed or mistyped bodies reported as
/// `400 BAD_REQUEST` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
