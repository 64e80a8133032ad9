//! Timed "copied" confirmation.

use std::time::{Duration, Instant};

/// How long the confirmation stays visible.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// A boolean "copied" flag that resets itself after a fixed time.
///
/// Nothing is scheduled: the flag is evaluated against the caller's clock,
/// so there is no timer to cancel when the owning view goes away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
    label: String,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful copy at `now`.
    pub fn mark_copied(&mut self, label: impl Into<String>, now: Instant) {
        self.copied_at = Some(now);
        self.label = label.into();
    }

    /// Whether the confirmation is still showing at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < FEEDBACK_DURATION)
    }

    /// Label of the last copy while it is still showing.
    pub fn active_label(&self, now: Instant) -> Option<&str> {
        self.is_copied(now).then_some(self.label.as_str())
    }

    /// Time until the confirmation disappears, if it is showing.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let at = self.copied_at?;
        FEEDBACK_DURATION
            .checked_sub(now.saturating_duration_since(at))
            .filter(|left| !left.is_zero())
    }
}
