//! Classification of PostgreSQL constraint violations.
//!
//! sqlx surfaces constraint failures as `sqlx::Error::Database` carrying the
//! SQLSTATE code. These helpers let repositories and the API layer tell a
//! lost uniqueness race apart from other integrity failures.

/// SQLSTATE `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

/// Whether `err` is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(UNIQUE_VIOLATION)
}

/// Whether `err` is a foreign-key violation.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(FOREIGN_KEY_VIOLATION)
}

/// Whether `err` is any integrity-constraint violation (SQLSTATE class 23).
pub fn is_integrity_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).is_some_and(|code| code.starts_with("23"))
}

/// Name of the violated constraint, when PostgreSQL reports one.
pub fn constraint_name(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
