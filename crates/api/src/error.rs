use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use feed_core::error::CoreError;
use feed_db::error::{constraint_name, is_integrity_violation, is_unique_violation};
use feed_db::repositories::ToggleError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `feed_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ToggleError> for AppError {
    fn from(err: ToggleError) -> Self {
        match err {
            ToggleError::Conflict(target) => AppError::Core(CoreError::Conflict(format!(
                "Concurrent modification of the like on {target}. Please try again."
            ))),
            ToggleError::TargetNotFound(target) => AppError::Core(CoreError::NotFound {
                entity: target.entity(),
                id: target.id(),
            }),
            ToggleError::Integrity { target, message } => {
                AppError::Core(CoreError::Integrity(format!("{target}: {message}")))
            }
            ToggleError::Database(err) => AppError::Database(err),
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Integrity(msg) => {
                    tracing::error!(error = %msg, "Integrity violation");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTEGRITY_VIOLATION",
                        "The request conflicted with a concurrent change and was aborted"
                            .to_string(),
                    )
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Other integrity violations map to 500 `INTEGRITY_VIOLATION` and are logged.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if is_unique_violation(err) {
        let constraint = constraint_name(err).unwrap_or("unknown");
        if constraint.starts_with("uq_") {
            return (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            );
        }
    }

    if is_integrity_violation(err) {
        tracing::error!(error = %err, "Unexpected integrity violation");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTEGRITY_VIOLATION",
            "The request conflicted with a concurrent change and was aborted".to_string(),
        );
    }

    tracing::error!(error = %err, "Database error");
    internal()
}
