//! Interactive terminal UI
//!
//! A ratatui/crossterm front end around the transcript player: the demo
//! view, the install guide and the code examples.

pub mod app;
pub mod demo_app;
pub mod ui;
mod views;
pub mod widgets;

pub use app::{App, TuiApp};
pub use demo_app::{DemoApp, DemoState, View};
