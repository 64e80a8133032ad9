//! Drivers that turn `Step`s into elapsed time.
//!
//! - [`Driver`] keeps a single pending deadline and is polled from an event
//!   loop (the TUI computes its input poll timeout from it).
//! - [`play_blocking`] runs a player on the current thread, sleeping in short
//!   slices so a cancellation flag is honoured promptly.
//!
//! Neither driver ever holds more than one pending wait, so replacing the
//! script or dropping the driver leaves nothing behind that could fire later.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::Result;

use super::machine::TranscriptPlayer;
use super::state::Step;
use crate::transcript::TranscriptLine;

/// Upper bound on ticks processed by one `poll` call.
const MAX_CATCH_UP_TICKS: usize = 256;

/// Longest uninterrupted sleep of the blocking driver.
pub const SLEEP_SLICE: Duration = Duration::from_millis(25);

/// Deadline-based driver for event loops.
#[derive(Debug)]
pub struct Driver {
    player: TranscriptPlayer,
    due: Option<Instant>,
}

impl Driver {
    pub fn new(player: TranscriptPlayer) -> Self {
        Self { player, due: None }
    }

    /// Mount the player (auto-start) with `now` as the time origin.
    pub fn mount(&mut self, now: Instant) {
        let step = self.player.mount();
        self.schedule(now, step);
    }

    pub fn restart(&mut self, now: Instant) {
        let step = self.player.restart();
        self.schedule(now, step);
    }

    /// Replace the script. The old pending deadline is discarded.
    pub fn replace_script(&mut self, lines: impl Into<std::sync::Arc<[TranscriptLine]>>, now: Instant) {
        let step = self.player.replace_script(lines);
        self.schedule(now, step);
    }

    /// Run every tick whose deadline is at or before `now`.
    ///
    /// Returns true if the player changed. Deadlines chain from the previous
    /// deadline rather than from `now`, so a late poll catches up instead of
    /// stretching the transcript.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut ticks = 0;
        while let Some(due) = self.due {
            if due > now {
                break;
            }
            let step = self.player.tick();
            self.due = step.wait().map(|wait| due + wait);
            ticks += 1;
            if ticks >= MAX_CATCH_UP_TICKS {
                self.due = self.due.map(|due| due.max(now));
                break;
            }
        }
        ticks > 0
    }

    /// Time left until the next tick, or `None` when nothing is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    pub fn player(&self) -> &TranscriptPlayer {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut TranscriptPlayer {
        &mut self.player
    }

    fn schedule(&mut self, from: Instant, step: Step) {
        self.due = step.wait().map(|wait| from + wait);
    }
}

/// How a blocking playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The script completed (or the requested number of loops ran)
    Finished,
    /// The cancellation flag was raised
    Cancelled,
}

/// Drive `player` to completion on the current thread.
///
/// `on_change` is called after mounting and after every tick. With looping
/// enabled the playback only ends after `max_cycles` cycles (if given) or on
/// cancellation.
pub fn play_blocking<F>(
    player: &mut TranscriptPlayer,
    cancel: &AtomicBool,
    max_cycles: Option<u64>,
    mut on_change: F,
) -> Result<PlaybackOutcome>
where
    F: FnMut(&TranscriptPlayer) -> Result<()>,
{
    let mut step = player.mount();
    on_change(player)?;

    while let Step::Wait(wait) = step {
        if !sleep_unless_cancelled(wait, cancel) {
            tracing::debug!("playback cancelled");
            return Ok(PlaybackOutcome::Cancelled);
        }
        step = player.tick();
        on_change(player)?;

        if max_cycles.is_some_and(|max| player.cycles() >= max) {
            break;
        }
    }
    Ok(PlaybackOutcome::Finished)
}

/// Sleep for `wait` in slices. Returns false if cancelled first.
fn sleep_unless_cancelled(wait: Duration, cancel: &AtomicBool) -> bool {
    let deadline = Instant::now() + wait;
    loop {
        if cancel.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        std::thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Phase, PlayerOptions, TypingCadence};

    fn options(char_ms: u64) -> PlayerOptions {
        PlayerOptions {
            cadence: TypingCadence::fixed(Duration::from_millis(char_ms)),
            ..Default::default()
        }
    }

    fn lines() -> Vec<TranscriptLine> {
        vec![
            TranscriptLine::command("pf add . x").with_delay(500),
            TranscriptLine::success("done").with_delay(200),
        ]
    }

    #[test]
    fn poll_before_deadline_does_nothing() {
        let start = Instant::now();
        let mut driver = Driver::new(TranscriptPlayer::new(lines(), options(10)));
        driver.mount(start);

        assert_eq!(driver.time_until_due(start), Some(Duration::from_millis(500)));
        assert!(!driver.poll(start + Duration::from_millis(499)));
        assert_eq!(driver.player().phase(), Phase::WaitingPreDelay);
    }

    #[test]
    fn poll_catches_up_with_late_deadlines() {
        let start = Instant::now();
        let mut driver = Driver::new(TranscriptPlayer::new(lines(), options(10)));
        driver.mount(start);

        // 500ms pre-delay, empty prefix wait (10ms), then 3 chars
        let late = start + Duration::from_millis(535);
        assert!(driver.poll(late));
        assert_eq!(driver.player().state().partial_text, "pf ");
        assert_eq!(driver.time_until_due(late), Some(Duration::from_millis(5)));
    }

    #[test]
    fn poll_runs_to_completion_and_clears_deadline() {
        let start = Instant::now();
        let mut driver = Driver::new(TranscriptPlayer::new(lines(), options(10)));
        driver.mount(start);

        driver.poll(start + Duration::from_secs(5));
        assert!(driver.player().is_finished());
        assert_eq!(driver.due(), None);
        assert_eq!(driver.time_until_due(start), None);
        assert!(!driver.poll(start + Duration::from_secs(10)));
    }

    #[test]
    fn replace_script_drops_old_deadline() {
        let start = Instant::now();
        let mut driver = Driver::new(TranscriptPlayer::new(lines(), options(10)));
        driver.mount(start);
        driver.poll(start + Duration::from_millis(560));
        assert!(!driver.player().state().partial_text.is_empty());

        let later = start + Duration::from_millis(600);
        driver.replace_script(vec![TranscriptLine::output("new")], later);
        assert!(driver.player().state().partial_text.is_empty());
        assert_eq!(driver.due(), Some(later + Duration::from_millis(10)));
    }

    #[test]
    fn empty_script_schedules_nothing() {
        let start = Instant::now();
        let mut driver = Driver::new(TranscriptPlayer::new(Vec::new(), options(10)));
        driver.mount(start);
        assert_eq!(driver.due(), None);
    }

    #[test]
    fn blocking_playback_reveals_everything() {
        let mut player = TranscriptPlayer::new(
            vec![TranscriptLine::command("ab"), TranscriptLine::output("c")],
            options(0),
        );
        let cancel = AtomicBool::new(false);
        let mut changes = 0;
        let outcome = play_blocking(&mut player, &cancel, None, |_| {
            changes += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(outcome, PlaybackOutcome::Finished);
        assert_eq!(player.state().revealed_lines.len(), 2);
        // mount, two chars, finish + start of "c", one char, finish
        assert_eq!(changes, 6);
    }

    #[test]
    fn blocking_playback_honours_cancel_flag() {
        let mut player = TranscriptPlayer::new(lines(), options(10));
        let cancel = AtomicBool::new(true);
        let outcome = play_blocking(&mut player, &cancel, None, |_| Ok(())).unwrap();
        assert_eq!(outcome, PlaybackOutcome::Cancelled);
        assert!(player.state().revealed_lines.is_empty());
    }

    #[test]
    fn blocking_loop_stops_after_max_cycles() {
        let mut player = TranscriptPlayer::new(
            vec![TranscriptLine::output("x")],
            PlayerOptions {
                looping: true,
                loop_pause: Duration::ZERO,
                ..options(0)
            },
        );
        let cancel = AtomicBool::new(false);
        let outcome = play_blocking(&mut player, &cancel, Some(2), |_| Ok(())).unwrap();
        assert_eq!(outcome, PlaybackOutcome::Finished);
        assert_eq!(player.cycles(), 2);
    }

    #[test]
    fn callback_errors_propagate() {
        let mut player = TranscriptPlayer::new(lines(), options(0));
        let cancel = AtomicBool::new(false);
        let result = play_blocking(&mut player, &cancel, None, |_| anyhow::bail!("broken pipe"));
        assert!(result.is_err());
    }
}
