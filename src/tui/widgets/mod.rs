//! TUI widgets

pub mod terminal_pane;

pub use terminal_pane::{PlayerStatus, TerminalPane};
