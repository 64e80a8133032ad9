//! Subcommand handlers.

pub mod about;
pub mod completions;
pub mod config;
pub mod examples;
pub mod features;
pub mod install;
pub mod play;
pub mod scenarios;
pub mod tui;
