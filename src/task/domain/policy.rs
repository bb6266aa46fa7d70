//! Scheduling rules applied to task timestamps.

/// Configures how strictly task timestamps are checked against the clock.
///
/// Ordering between `created_at` and `finished_at` is always enforced. The
/// policy only controls whether timestamps may lie in the past.
///
/// # Examples
///
/// ```
/// use project_tracker::task::domain::TaskSchedulePolicy;
///
/// let policy = TaskSchedulePolicy::default();
/// assert!(policy.reject_past_timestamps);
///
/// let lenient = TaskSchedulePolicy::lenient();
/// assert!(!lenient.reject_past_timestamps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSchedulePolicy {
    /// Whether unfinished tasks must be scheduled at or after the current
    /// instant.
    pub reject_past_timestamps: bool,
}

impl Default for TaskSchedulePolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl TaskSchedulePolicy {
    /// Rejects unfinished tasks whose timestamps lie in the past.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            reject_past_timestamps: true,
        }
    }

    /// Accepts any timestamps that are correctly ordered.
    ///
    /// Useful when importing historical tasks.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            reject_past_timestamps: false,
        }
    }
}
