//! The transcript player state machine.
//!
//! `TranscriptPlayer` never sleeps. Every operation performs one transition
//! and returns a [`Step`] telling the driver how long to wait before calling
//! [`TranscriptPlayer::tick`] again. Dropping the driver's pending wait is
//! all it takes to cancel a playback.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::cadence::{self, TypingCadence};
use super::state::{Phase, PlaybackState, Step};
use crate::transcript::TranscriptLine;

/// Pause between the last line and a loop restart.
pub const DEFAULT_LOOP_PAUSE: Duration = Duration::from_millis(2000);

type FinishedCallback = Box<dyn FnMut() + Send>;

/// Playback options fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOptions {
    /// Start as soon as the player is mounted or given a new script
    pub auto_start: bool,
    /// Replay forever instead of completing
    pub looping: bool,
    pub cadence: TypingCadence,
    pub loop_pause: Duration,
    /// Speed multiplier applied to every wait
    pub speed: f64,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            auto_start: true,
            looping: false,
            cadence: TypingCadence::default(),
            loop_pause: DEFAULT_LOOP_PAUSE,
            speed: 1.0,
        }
    }
}

/// Replays a fixed script as a typewriter transcript.
pub struct TranscriptPlayer {
    lines: Arc<[TranscriptLine]>,
    options: PlayerOptions,
    state: PlaybackState,
    phase: Phase,
    rng: StdRng,
    on_finished: Option<FinishedCallback>,
    /// Completed playback cycles (loop restarts included)
    cycles: u64,
    /// Bumped on every reset so observers can spot a fresh playback
    generation: u64,
}

impl TranscriptPlayer {
    /// Create an idle player. Call [`mount`](Self::mount) or
    /// [`start`](Self::start) to begin.
    pub fn new(lines: impl Into<Arc<[TranscriptLine]>>, options: PlayerOptions) -> Self {
        let mut options = options;
        options.speed = cadence::clamp_speed(options.speed);
        Self {
            lines: lines.into(),
            options,
            state: PlaybackState::new(),
            phase: Phase::Idle,
            rng: StdRng::from_os_rng(),
            on_finished: None,
            cycles: 0,
            generation: 0,
        }
    }

    /// Use a deterministic random source for the typing cadence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Register the completion notification.
    ///
    /// It fires once per non-looping playback, right after the last line is
    /// fully revealed.
    pub fn on_finished(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_finished = Some(Box::new(callback));
        self
    }

    /// Start if `auto_start` is set; otherwise stay idle.
    pub fn mount(&mut self) -> Step {
        if self.options.auto_start {
            self.start()
        } else {
            Step::Idle
        }
    }

    /// Start playback from the first line.
    pub fn start(&mut self) -> Step {
        self.restart()
    }

    /// Discard all playback state and replay from the first line.
    pub fn restart(&mut self) -> Step {
        self.reset();
        self.begin_line()
    }

    /// Swap in a new script.
    ///
    /// All state from the old script is dropped immediately. Playback begins
    /// at the first line of the new script if `auto_start` is set.
    pub fn replace_script(&mut self, lines: impl Into<Arc<[TranscriptLine]>>) -> Step {
        self.lines = lines.into();
        self.reset();
        tracing::debug!(lines = self.lines.len(), "script replaced");
        if self.options.auto_start {
            self.begin_line()
        } else {
            Step::Idle
        }
    }

    /// Advance by one step. Call when the last returned wait has elapsed.
    pub fn tick(&mut self) -> Step {
        match self.phase {
            Phase::Idle | Phase::Completed => Step::Idle,
            Phase::WaitingPreDelay => self.begin_typing(),
            Phase::Typing => self.type_next_char(),
            Phase::PausedBeforeLoop => {
                if !self.options.looping {
                    return self.complete();
                }
                tracing::debug!(cycle = self.cycles, "loop restart");
                self.reset();
                self.begin_line()
            }
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// The line being typed or waited on, if any.
    pub fn current_line(&self) -> Option<&TranscriptLine> {
        match self.phase {
            Phase::WaitingPreDelay | Phase::Typing => self.lines.get(self.state.cursor_index),
            _ => None,
        }
    }

    /// True once a non-looping playback has revealed its last line.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn looping(&self) -> bool {
        self.options.looping
    }

    /// Toggle looping. Takes effect at the end of the current cycle.
    pub fn set_looping(&mut self, looping: bool) {
        self.options.looping = looping;
    }

    pub fn speed(&self) -> f64 {
        self.options.speed
    }

    /// Set the speed multiplier. Applies from the next wait on.
    pub fn set_speed(&mut self, speed: f64) {
        self.options.speed = cadence::clamp_speed(speed);
    }

    pub fn speed_up(&mut self) {
        self.options.speed = cadence::faster(self.options.speed);
    }

    pub fn speed_down(&mut self) {
        self.options.speed = cadence::slower(self.options.speed);
    }

    fn reset(&mut self) {
        self.state.reset();
        self.phase = Phase::Idle;
        self.generation += 1;
    }

    fn wait(&self, duration: Duration) -> Step {
        Step::Wait(cadence::scale(duration, self.options.speed))
    }

    fn char_wait(&mut self) -> Step {
        let delay = self.options.cadence.next_delay(&mut self.rng);
        self.wait(delay)
    }

    fn begin_line(&mut self) -> Step {
        let Some(line) = self.lines.get(self.state.cursor_index) else {
            // Only reachable at the start of an empty script
            self.phase = Phase::Idle;
            return Step::Idle;
        };
        match line.pre_delay() {
            Some(delay) => {
                self.phase = Phase::WaitingPreDelay;
                self.state.is_typing = false;
                self.wait(delay)
            }
            None => self.begin_typing(),
        }
    }

    fn begin_typing(&mut self) -> Step {
        tracing::debug!(line = self.state.cursor_index, "typing line");
        self.phase = Phase::Typing;
        self.state.is_typing = true;
        self.state.partial_text.clear();
        self.char_wait()
    }

    fn type_next_char(&mut self) -> Step {
        let line = &self.lines[self.state.cursor_index];
        // partial_text is always a prefix of the line, so its byte length is
        // the offset of the next character
        let next = line.text[self.state.partial_text.len()..].chars().next();
        match next {
            Some(c) => {
                self.state.partial_text.push(c);
                self.char_wait()
            }
            None => self.finish_line(),
        }
    }

    fn finish_line(&mut self) -> Step {
        let line = self.lines[self.state.cursor_index].clone();
        self.state.revealed_lines.push(line);
        self.state.partial_text.clear();
        self.state.is_typing = false;
        self.state.cursor_index += 1;

        if self.state.cursor_index < self.lines.len() {
            self.begin_line()
        } else {
            self.finish_cycle()
        }
    }

    fn finish_cycle(&mut self) -> Step {
        self.cycles += 1;
        if self.options.looping {
            self.phase = Phase::PausedBeforeLoop;
            self.wait(self.options.loop_pause)
        } else {
            self.complete()
        }
    }

    fn complete(&mut self) -> Step {
        self.phase = Phase::Completed;
        tracing::debug!(lines = self.state.revealed_lines.len(), "playback completed");
        if let Some(callback) = self.on_finished.as_mut() {
            callback();
        }
        Step::Idle
    }
}

impl fmt::Debug for TranscriptPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptPlayer")
            .field("lines", &self.lines.len())
            .field("options", &self.options)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("cycles", &self.cycles)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
