//! pf-demo - replays scripted Path-Fast terminal transcripts.
//!
//! The heart of the crate is [`player::TranscriptPlayer`], a timer-free state
//! machine that reveals a script line by line as a typewriter animation.
//! Around it sit the renderers, the built-in scenarios, the Path-Fast install
//! catalog and an interactive ratatui front end.

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod player;
pub mod render;
pub mod theme;
pub mod transcript;
pub mod tui;

pub use config::Config;
pub use player::{PlayerOptions, TranscriptPlayer};
pub use transcript::{Script, TranscriptLine};
