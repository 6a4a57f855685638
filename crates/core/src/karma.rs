//! Karma policy: like weights, the trailing window, and leaderboard limits.
//!
//! Karma is never stored. It is recomputed from like history on every read,
//! so the only state here is the policy the aggregation query is run with.

use chrono::{DateTime, Duration, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Karma earned by an author for each like on one of their posts.
pub const DEFAULT_POST_LIKE_WEIGHT: i64 = 5;

/// Karma earned by an author for each like on one of their comments.
pub const DEFAULT_COMMENT_LIKE_WEIGHT: i64 = 1;

/// Length of the trailing karma window in hours.
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Longest accepted karma window in hours (one leap year).
pub const MAX_WINDOW_HOURS: i64 = 366 * 24;

/// Leaderboard size when the caller does not ask for one.
pub const DEFAULT_LEADERBOARD_SIZE: i64 = 5;

/// Upper bound on a requested leaderboard size.
pub const MAX_LEADERBOARD_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Weights and window used to score likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KarmaPolicy {
    pub post_like_weight: i64,
    pub comment_like_weight: i64,
    pub window: Duration,
}

impl Default for KarmaPolicy {
    fn default() -> Self {
        Self {
            post_like_weight: DEFAULT_POST_LIKE_WEIGHT,
            comment_like_weight: DEFAULT_COMMENT_LIKE_WEIGHT,
            window: Duration::hours(DEFAULT_WINDOW_HOURS),
        }
    }
}

impl KarmaPolicy {
    /// Build a policy, rejecting negative weights and windows outside
    /// `1..=MAX_WINDOW_HOURS`.
    pub fn new(
        post_like_weight: i64,
        comment_like_weight: i64,
        window_hours: i64,
    ) -> Result<Self, CoreError> {
        if post_like_weight < 0 || comment_like_weight < 0 {
            return Err(CoreError::Validation(format!(
                "Karma weights must be non-negative, got post={post_like_weight} \
                 comment={comment_like_weight}"
            )));
        }
        if !(1..=MAX_WINDOW_HOURS).contains(&window_hours) {
            return Err(CoreError::Validation(format!(
                "Karma window must be between 1 and {MAX_WINDOW_HOURS} hours, got {window_hours}"
            )));
        }
        let window = Duration::try_hours(window_hours).ok_or_else(|| {
            CoreError::Validation(format!("Karma window of {window_hours} hours is out of range"))
        })?;
        Ok(Self {
            post_like_weight,
            comment_like_weight,
            window,
        })
    }

    /// Inclusive lower bound of the window ending at `now`.
    ///
    /// Saturates at the earliest representable instant instead of
    /// overflowing. There is no upper bound: likes are stamped by the
    /// database clock, which may run ahead of the caller's `now`.
    pub fn window_start(&self, now: Timestamp) -> Timestamp {
        now.checked_sub_signed(self.window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Clamp a requested leaderboard size into `1..=MAX_LEADERBOARD_SIZE`.
pub fn clamp_leaderboard_size(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_LEADERBOARD_SIZE)
        .clamp(1, MAX_LEADERBOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_policy_matches_constants() {
        let policy = KarmaPolicy::default();
        assert_eq!(policy.post_like_weight, 5);
        assert_eq!(policy.comment_like_weight, 1);
        assert_eq!(policy.window, Duration::hours(24));
    }

    #[test]
    fn window_starts_one_day_before_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();
        let start = KarmaPolicy::default().window_start(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn oversized_window_is_rejected() {
        assert!(KarmaPolicy::new(5, 1, MAX_WINDOW_HOURS).is_ok());
        assert!(KarmaPolicy::new(5, 1, MAX_WINDOW_HOURS + 1).is_err());
        assert!(KarmaPolicy::new(5, 1, 10_000_000_000).is_err());
        assert!(KarmaPolicy::new(5, 1, i64::MAX).is_err());
    }

    #[test]
    fn window_start_saturates_instead_of_overflowing() {
        let policy = KarmaPolicy {
            window: Duration::MAX,
            ..KarmaPolicy::default()
        };
        assert_eq!(policy.window_start(Utc::now()), DateTime::<Utc>::MIN_UTC);

        let near_min = DateTime::<Utc>::MIN_UTC + Duration::hours(1);
        assert_eq!(
            KarmaPolicy::default().window_start(near_min),
            DateTime::<Utc>::MIN_UTC
        );
    }

    #[test]
    fn custom_policy_is_accepted() {
        let policy = KarmaPolicy::new(10, 2, 48).unwrap();
        assert_eq!(policy.post_like_weight, 10);
        assert_eq!(policy.window, Duration::hours(48));
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert!(KarmaPolicy::new(-1, 1, 24).is_err());
        assert!(KarmaPolicy::new(5, -1, 24).is_err());
    }

    #[test]
    fn empty_window_is_rejected() {
        assert!(KarmaPolicy::new(5, 1, 0).is_err());
    }

    #[test]
    fn leaderboard_size_defaults_to_five() {
        assert_eq!(clamp_leaderboard_size(None), 5);
    }

    #[test]
    fn leaderboard_size_is_clamped() {
        assert_eq!(clamp_leaderboard_size(Some(0)), 1);
        assert_eq!(clamp_leaderboard_size(Some(-3)), 1);
        assert_eq!(clamp_leaderboard_size(Some(500)), MAX_LEADERBOARD_SIZE);
        assert_eq!(clamp_leaderboard_size(Some(10)), 10);
    }
}
