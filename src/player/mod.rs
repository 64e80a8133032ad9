//! Scripted transcript player
//!
//! Replays a script of labeled lines as a typewriter animation:
//!
//! - `state`: PlaybackState, Phase and Step (shared types)
//! - `machine`: the `TranscriptPlayer` state machine
//! - `cadence`: randomized typing delays and the speed multiplier
//! - `driver`: deadline driver for event loops, blocking driver for stdout
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//! use pfdemo::player::{play_blocking, PlayerOptions, TranscriptPlayer};
//! use pfdemo::transcript::TranscriptLine;
//!
//! let lines = vec![
//!     TranscriptLine::command("pf add . x").with_delay(500),
//!     TranscriptLine::success("done").with_delay(200),
//! ];
//! let mut player = TranscriptPlayer::new(lines, PlayerOptions::default())
//!     .on_finished(|| println!("finished"));
//! let cancel = AtomicBool::new(false);
//! play_blocking(&mut player, &cancel, None, |p| {
//!     println!("{:?}", p.state().partial_text);
//!     Ok(())
//! })
//! .unwrap();
//! ```

pub mod cadence;
mod driver;
mod machine;
pub mod state;

pub use cadence::TypingCadence;
pub use driver::{play_blocking, Driver, PlaybackOutcome};
pub use machine::{PlayerOptions, TranscriptPlayer, DEFAULT_LOOP_PAUSE};
pub use state::{Phase, PlaybackState, Step};
