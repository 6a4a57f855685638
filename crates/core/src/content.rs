//! Input validation for user-authored content and account names.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum allowed length of a post body, in characters.
pub const MAX_POST_LENGTH: usize = 10_000;

/// Maximum allowed length of a comment body, in characters.
pub const MAX_COMMENT_LENGTH: usize = 5_000;

/// Maximum allowed length of a user bio, in characters.
pub const MAX_BIO_LENGTH: usize = 500;

/// Username length limits, in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 150;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_body(kind: &str, body: &str, max: usize) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(format!("{kind} content must not be empty")));
    }
    let len = body.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{kind} content must not exceed {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate a post body: non-blank and within [`MAX_POST_LENGTH`].
pub fn validate_post_content(content: &str) -> Result<(), CoreError> {
    validate_body("Post", content, MAX_POST_LENGTH)
}

/// Validate a comment body: non-blank and within [`MAX_COMMENT_LENGTH`].
pub fn validate_comment_content(content: &str) -> Result<(), CoreError> {
    validate_body("Comment", content, MAX_COMMENT_LENGTH)
}

/// Validate a bio: may be empty, but bounded by [`MAX_BIO_LENGTH`].
pub fn validate_bio(bio: &str) -> Result<(), CoreError> {
    let len = bio.chars().count();
    if len > MAX_BIO_LENGTH {
        return Err(CoreError::Validation(format!(
            "Bio must not exceed {MAX_BIO_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate a username.
///
/// Letters, digits and `@ . + - _` only, between [`MIN_USERNAME_LENGTH`]
/// and [`MAX_USERNAME_LENGTH`] characters.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} \
             characters, got {len}"
        )));
    }
    if let Some(bad) = username
        .chars()
        .find(|c| !(c.is_alphanumeric() || "@.+-_".contains(*c)))
    {
        return Err(CoreError::Validation(format!(
            "Username contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_post_is_rejected() {
        assert!(validate_post_content("").is_err());
        assert!(validate_post_content("   \n").is_err());
    }

    #[test]
    fn normal_post_is_accepted() {
        assert!(validate_post_content("hello feed").is_ok());
    }

    #[test]
    fn oversized_comment_is_rejected() {
        let body = "x".repeat(MAX_COMMENT_LENGTH + 1);
        let err = validate_comment_content(&body).unwrap_err();
        assert!(err.to_string().contains("5000"));
    }

    #[test]
    fn comment_at_limit_is_accepted() {
        let body = "x".repeat(MAX_COMMENT_LENGTH);
        assert!(validate_comment_content(&body).is_ok());
    }

    #[test]
    fn empty_bio_is_fine() {
        assert!(validate_bio("").is_ok());
        assert!(validate_bio(&"b".repeat(MAX_BIO_LENGTH + 1)).is_err());
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("bob.smith+feed@x").is_ok());
        assert!(validate_username("al").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("semi;colon").is_err());
    }
}
