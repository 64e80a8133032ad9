//! Interactive demo application
//!
//! All views share one state. The demo pairs a scenario list with a terminal
//! pane replaying the selected scenario. Features lists what Path-Fast does
//! with a command for each. The install guide has the package manager choice,
//! a copyable install command and a step checklist. Examples shows code
//! snippets, and About carries the project links and ways to contribute.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, TuiApp};
use super::widgets::PlayerStatus;
use crate::catalog::{
    InstallChecklist, PackageManagerSelection, CODE_EXAMPLES, INSTALLATION_STEPS, SITE,
};
use crate::clipboard::{Copy, CopyFeedback};
use crate::config::{Config, PlayerConfig};
use crate::player::{Driver, Phase, TranscriptPlayer};
use crate::theme::Theme;
use crate::transcript::{builtin_scenarios, Scenario};

/// Top-level views, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Demo,
    Features,
    Install,
    Examples,
    About,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Demo,
        View::Features,
        View::Install,
        View::Examples,
        View::About,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Demo => "Demo",
            View::Features => "Features",
            View::Install => "Install",
            View::Examples => "Examples",
            View::About => "About",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    fn cycle(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        Self::ALL[(self.index() as isize + delta).rem_euclid(len) as usize]
    }
}

/// Label of the install command in the copy feedback.
pub(super) const INSTALL_COPY_LABEL: &str = "install command";
pub(super) const REPO_COPY_LABEL: &str = "repository URL";

/// Everything the demo shows, independent of the terminal.
pub struct DemoState {
    pub(super) theme: Theme,
    player_config: PlayerConfig,
    tick_rate: Duration,
    pub(super) scenarios: Vec<Scenario>,
    pub(super) scenario_idx: usize,
    pub(super) driver: Driver,
    /// Set by the player's completion notification
    finished: Arc<AtomicBool>,
    /// Start of the cursor blink cycle
    pub(super) blink_epoch: Instant,
    pub(super) view: View,
    pub(super) selection: PackageManagerSelection,
    pub(super) checklist: InstallChecklist,
    pub(super) example_idx: usize,
    pub(super) feedback: CopyFeedback,
    copier: Copy,
    pub(super) status_message: Option<String>,
    pub(super) show_help: bool,
    quit: bool,
}

impl DemoState {
    /// Create the state and start the initial scenario (hero by default).
    pub fn new(config: &Config, scenario: Option<&str>, now: Instant) -> Self {
        let scenarios = builtin_scenarios();
        let scenario_idx = scenario
            .and_then(|id| scenarios.iter().position(|s| s.id.eq_ignore_ascii_case(id)))
            .unwrap_or(0);

        let finished = Arc::new(AtomicBool::new(false));
        let player = build_player(&scenarios[scenario_idx], &config.player, Arc::clone(&finished));
        let mut driver = Driver::new(player);
        driver.mount(now);

        Self {
            theme: config.theme(),
            player_config: config.player.clone(),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms.max(10)),
            scenarios,
            scenario_idx,
            driver,
            finished,
            blink_epoch: now,
            view: View::default(),
            selection: PackageManagerSelection::new(config.install.default_manager),
            checklist: InstallChecklist::new(),
            example_idx: 0,
            feedback: CopyFeedback::new(),
            copier: Copy::new(),
            status_message: None,
            show_help: false,
            quit: false,
        }
    }

    /// Use specific clipboard tools.
    pub fn with_copier(mut self, copier: Copy) -> Self {
        self.copier = copier;
        self
    }

    /// Use a deterministic typing cadence for the current scenario.
    pub fn with_seed(mut self, seed: u64, now: Instant) -> Self {
        let scenario = &self.scenarios[self.scenario_idx];
        let player = build_player(scenario, &self.player_config, Arc::clone(&self.finished))
            .with_seed(seed);
        self.driver = Driver::new(player);
        self.driver.mount(now);
        self
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn player(&self) -> &TranscriptPlayer {
        self.driver.player()
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenarios[self.scenario_idx]
    }

    pub fn selection(&self) -> &PackageManagerSelection {
        &self.selection
    }

    pub fn checklist(&self) -> &InstallChecklist {
        &self.checklist
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Status indicator for the terminal pane.
    pub fn player_status(&self) -> PlayerStatus {
        let player = self.driver.player();
        if self.finished.load(Ordering::SeqCst) {
            PlayerStatus::Done
        } else if player.phase() == Phase::Idle {
            PlayerStatus::Idle
        } else if player.looping() {
            PlayerStatus::Looping
        } else {
            PlayerStatus::Running
        }
    }

    /// Run every player tick that is due. Returns true if anything changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.driver.poll(now)
    }

    /// How long the event loop may sleep.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = self.tick_rate;
        if let Some(due) = self.driver.time_until_due(now) {
            timeout = timeout.min(due);
        }
        if let Some(left) = self.feedback.remaining(now) {
            timeout = timeout.min(left);
        }
        timeout
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        self.status_message = None;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.view = self.view.cycle(1),
            KeyCode::BackTab => self.view = self.view.cycle(-1),
            _ => match self.view {
                View::Demo => self.handle_demo_key(key, now),
                View::Features => {}
                View::Install => self.handle_install_key(key, now),
                View::Examples => self.handle_examples_key(key, now),
                View::About => {
                    if key.code == KeyCode::Char('c') {
                        self.copy(SITE.github, REPO_COPY_LABEL, now);
                    }
                }
            },
        }
    }

    fn handle_demo_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.scenario_idx > 0 {
                    self.select_scenario(self.scenario_idx - 1, now);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scenario_idx + 1 < self.scenarios.len() {
                    self.select_scenario(self.scenario_idx + 1, now);
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if idx < self.scenarios.len() {
                    self.select_scenario(idx, now);
                }
            }
            KeyCode::Char('r') => self.restart(now),
            KeyCode::Char('l') => {
                let player = self.driver.player_mut();
                let looping = !player.looping();
                player.set_looping(looping);
                self.status_message = Some(format!("Loop {}", if looping { "on" } else { "off" }));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.driver.player_mut().speed_up();
                self.status_message = Some(format!("Speed {:.2}x", self.driver.player().speed()));
            }
            KeyCode::Char('-') => {
                self.driver.player_mut().speed_down();
                self.status_message = Some(format!("Speed {:.2}x", self.driver.player().speed()));
            }
            _ => {}
        }
    }

    fn handle_install_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.selection.cycle(-1),
            KeyCode::Right | KeyCode::Char('l') => self.selection.cycle(1),
            KeyCode::Char(c @ '1'..='9') => {
                let step = c as u8 - b'0';
                if INSTALLATION_STEPS.iter().any(|s| s.step == step) {
                    self.checklist.toggle(step);
                }
            }
            KeyCode::Char('c') => {
                self.copy(self.selection.install_command(), INSTALL_COPY_LABEL, now)
            }
            _ => {}
        }
    }

    fn handle_examples_key(&mut self, key: KeyEvent, now: Instant) {
        let len = CODE_EXAMPLES.len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.example_idx = (self.example_idx + len - 1) % len,
            KeyCode::Right | KeyCode::Char('l') => self.example_idx = (self.example_idx + 1) % len,
            KeyCode::Char('c') => {
                let (id, _, code) = CODE_EXAMPLES[self.example_idx];
                self.copy(code, id, now);
            }
            _ => {}
        }
    }

    /// Switch scenarios. The old playback is discarded immediately.
    fn select_scenario(&mut self, idx: usize, now: Instant) {
        if idx == self.scenario_idx {
            return;
        }
        self.scenario_idx = idx;
        let scenario = &self.scenarios[idx];
        tracing::debug!(scenario = scenario.id, "scenario selected");

        self.finished.store(false, Ordering::SeqCst);
        self.driver.player_mut().set_looping(scenario.looping);
        self.driver.replace_script(scenario.script.lines.clone(), now);
        self.blink_epoch = now;
    }

    fn restart(&mut self, now: Instant) {
        self.finished.store(false, Ordering::SeqCst);
        self.driver.restart(now);
        self.blink_epoch = now;
    }

    fn copy(&mut self, text: &str, label: &str, now: Instant) {
        match self.copier.text(text) {
            Ok(result) => {
                self.feedback.mark_copied(label, now);
                self.status_message = Some(result.message(label));
            }
            Err(err) => {
                tracing::warn!(%err, label, "copy failed");
                self.status_message = Some(format!("Copy failed: {}", err));
            }
        }
    }
}

fn build_player(scenario: &Scenario, config: &PlayerConfig, finished: Arc<AtomicBool>) -> TranscriptPlayer {
    TranscriptPlayer::new(
        scenario.script.lines.clone(),
        config.to_options(scenario.looping),
    )
    .on_finished(move || finished.store(true, Ordering::SeqCst))
}

/// The demo running in a real terminal.
pub struct DemoApp {
    app: App,
    state: DemoState,
}

impl DemoApp {
    pub fn new(config: Config, scenario: Option<&str>) -> Result<Self> {
        let state = DemoState::new(&config, scenario, Instant::now());
        let app = App::new()?;
        Ok(Self { app, state })
    }
}

impl TuiApp for DemoApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.state.handle_key(key, Instant::now());
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let now = Instant::now();
        let state = &self.state;
        self.app.draw(|frame| state.render(frame, now))
    }

    fn on_tick(&mut self) {
        self.state.advance(Instant::now());
    }

    fn poll_timeout(&self) -> Duration {
        self.state.poll_timeout(Instant::now())
    }

    fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
