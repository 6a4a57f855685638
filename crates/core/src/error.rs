use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A lost race on a uniqueness constraint. Callers may retry.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A constraint violation nobody anticipated (e.g. a foreign key whose
    /// target vanished mid-transaction). Fatal for the request.
    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
