//! Terminal handling shared by the TUI applications.
//!
//! `App` owns the ratatui terminal: raw mode and the alternate screen are
//! entered on creation and restored on drop (and on panic). `TuiApp` is the
//! event loop every application runs.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Terminal wrapper for a full-screen application.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        install_panic_hook();

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to `timeout` for the next terminal event.
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Leave the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Event loop of a TUI application.
pub trait TuiApp {
    fn app(&mut self) -> &mut App;

    /// Handle a key press.
    fn handle_key(&mut self, key: KeyEvent) -> Result<()>;

    /// Render the current state.
    fn draw(&mut self) -> Result<()>;

    /// Advance time-driven state. Called after every wake-up.
    fn on_tick(&mut self) {}

    /// Longest time to wait for input before the next wake-up.
    fn poll_timeout(&self) -> Duration;

    fn should_quit(&self) -> bool;

    /// Run until the application asks to quit.
    fn run(&mut self) -> Result<()> {
        while !self.should_quit() {
            self.draw()?;
            let timeout = self.poll_timeout();
            match self.app().next_event(timeout)? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
                // Resize and focus events only need a redraw
                _ => {}
            }
            self.on_tick();
        }
        Ok(())
    }
}
