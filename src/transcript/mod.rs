//! Transcript data model
//!
//! A transcript is an ordered list of scripted terminal lines. Each line
//! carries a semantic kind (command, output, ...) that decides how it is
//! rendered, and an optional delay to wait before it starts typing.
//!
//! Scripts are plain data: built-in scenarios live in [`scenarios`], custom
//! ones can be loaded from TOML or JSON files with [`Script::load`].

mod load;
pub mod scenarios;

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use scenarios::{builtin_scenarios, find_scenario, Scenario, SCENARIO_IDS};

/// Semantic tag of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// A command typed at the prompt (rendered with `$ `)
    Command,
    /// Plain program output
    Output,
    /// Successful result
    Success,
    /// Failure message
    Error,
    /// Annotation, not produced by any program
    Comment,
}

impl LineKind {
    /// All kinds in declaration order.
    pub const ALL: [LineKind; 5] = [
        LineKind::Command,
        LineKind::Output,
        LineKind::Success,
        LineKind::Error,
        LineKind::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Command => "command",
            LineKind::Output => "output",
            LineKind::Success => "success",
            LineKind::Error => "error",
            LineKind::Comment => "comment",
        }
    }

    /// Whether lines of this kind are displayed behind the shell prompt.
    pub fn is_command(&self) -> bool {
        matches!(self, LineKind::Command)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scripted line of a transcript.
///
/// Lines are immutable once handed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
    /// Delay before the line starts typing, in milliseconds
    #[serde(
        rename = "delay_ms",
        alias = "delay",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pre_delay_ms: Option<u64>,
}

impl TranscriptLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            pre_delay_ms: None,
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(LineKind::Command, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(LineKind::Comment, text)
    }

    /// Set the pre-typing delay.
    pub fn with_delay(mut self, millis: u64) -> Self {
        self.pre_delay_ms = Some(millis);
        self
    }

    /// The pre-typing delay, if any. A zero delay counts as none.
    pub fn pre_delay(&self) -> Option<Duration> {
        self.pre_delay_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

/// A titled transcript, as stored in script files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lines: Vec<TranscriptLine>,
}

impl Script {
    pub fn new(title: impl Into<String>, lines: Vec<TranscriptLine>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all pre-typing delays (ignores the randomized typing time).
    pub fn total_pre_delay(&self) -> Duration {
        self.lines
            .iter()
            .filter_map(TranscriptLine::pre_delay)
            .sum()
    }
}
