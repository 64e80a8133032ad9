//! Player state management
//!
//! Contains the `PlaybackState` struct that holds everything visible about a
//! playback in progress, as well as the shared types used by the state
//! machine and its drivers.

use std::time::Duration;

use crate::transcript::TranscriptLine;

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not started, or started on an empty script
    #[default]
    Idle,
    /// Waiting out the current line's pre-delay
    WaitingPreDelay,
    /// Revealing the current line one character per tick
    Typing,
    /// Last line done, waiting before the loop restarts
    PausedBeforeLoop,
    /// Last line done, no loop; terminal until restarted
    Completed,
}

/// What the driver should do after a transition.
///
/// Returned by every operation that moves the state machine; the driver is
/// expected to call `tick` again once the wait has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Call `tick` again after this long
    Wait(Duration),
    /// Nothing is pending; do not schedule anything
    Idle,
}

impl Step {
    pub fn wait(&self) -> Option<Duration> {
        match self {
            Step::Wait(d) => Some(*d),
            Step::Idle => None,
        }
    }
}

/// Visible playback state.
///
/// Owned by a single player; reset on restart and at every loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Lines fully shown so far, in script order
    pub revealed_lines: Vec<TranscriptLine>,
    /// Index of the line currently being typed (or about to be)
    pub cursor_index: usize,
    /// Prefix of the current line revealed so far
    pub partial_text: String,
    /// True while characters of the current line are being revealed
    pub is_typing: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything and point at the first line.
    pub fn reset(&mut self) {
        self.revealed_lines.clear();
        self.cursor_index = 0;
        self.partial_text.clear();
        self.is_typing = false;
    }
}
