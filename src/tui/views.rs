//! Rendering of the demo application's views.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::status_footer::{render_footer, render_status_line};
use super::demo_app::{DemoState, View, INSTALL_COPY_LABEL, REPO_COPY_LABEL};
use super::ui::{popup_area, screen_layout};
use super::widgets::TerminalPane;
use crate::catalog::{
    PackageManager, CODE_EXAMPLES, CONTRIBUTIONS, FEATURES, INSTALLATION_STEPS, SITE,
};
use crate::render::{cursor_visible, styled_lines};
use crate::theme::Theme;

const DEMO_KEYS: &[(&str, &str)] = &[
    ("↑↓", "scenario"),
    ("r", "restart"),
    ("l", "loop"),
    ("+/-", "speed"),
    ("Tab", "view"),
    ("?", "help"),
    ("q", "quit"),
];

const FEATURES_KEYS: &[(&str, &str)] = &[("Tab", "view"), ("?", "help"), ("q", "quit")];

const INSTALL_KEYS: &[(&str, &str)] = &[
    ("←→", "manager"),
    ("1-3", "toggle step"),
    ("c", "copy"),
    ("Tab", "view"),
    ("?", "help"),
    ("q", "quit"),
];

const EXAMPLES_KEYS: &[(&str, &str)] = &[
    ("←→", "example"),
    ("c", "copy"),
    ("Tab", "view"),
    ("?", "help"),
    ("q", "quit"),
];

const ABOUT_KEYS: &[(&str, &str)] = &[
    ("c", "copy repo URL"),
    ("Tab", "view"),
    ("?", "help"),
    ("q", "quit"),
];

impl DemoState {
    /// Draw the whole screen.
    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let theme = &self.theme;
        let [tabs, body, status, footer] = screen_layout(frame.area());

        render_tabs(frame, tabs, self.view, theme);
        match self.view {
            View::Demo => self.render_demo(frame, body, now),
            View::Features => render_features(frame, body, theme),
            View::Install => self.render_install(frame, body, now),
            View::Examples => self.render_examples(frame, body, now),
            View::About => self.render_about(frame, body, now),
        }

        let status_text = self
            .status_message
            .clone()
            .unwrap_or_else(|| self.status_summary());
        render_status_line(frame, status, &status_text, theme);

        let keys = match self.view {
            View::Demo => DEMO_KEYS,
            View::Features => FEATURES_KEYS,
            View::Install => INSTALL_KEYS,
            View::Examples => EXAMPLES_KEYS,
            View::About => ABOUT_KEYS,
        };
        render_footer(frame, footer, keys, theme);

        if self.show_help {
            render_help(frame, theme);
        }
    }

    /// Status line when no message is showing.
    fn status_summary(&self) -> String {
        let player = self.driver.player();
        let state = player.state();
        format!(
            "{} | {}/{} lines | speed {:.2}x | loop {}",
            self.scenario().script.title,
            state.revealed_lines.len(),
            player.lines().len(),
            player.speed(),
            if player.looping() { "on" } else { "off" },
        )
    }

    fn render_demo(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let theme = &self.theme;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(area);

        let items: Vec<ListItem> = self
            .scenarios
            .iter()
            .enumerate()
            .map(|(i, scenario)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", i + 1), theme.accent_style()),
                    Span::raw(scenario.script.title.clone()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.text_secondary_style())
                    .title(" Scenarios "),
            )
            .style(theme.text_style())
            .highlight_style(theme.highlight_style());
        let mut list_state = ListState::default().with_selected(Some(self.scenario_idx));
        frame.render_stateful_widget(list, chunks[0], &mut list_state);

        let player = self.driver.player();
        let cursor_on = cursor_visible(now.saturating_duration_since(self.blink_epoch));
        let lines = styled_lines(player.state(), player.current_line(), theme, cursor_on);
        let title = &self.scenario().script.title;
        frame.render_widget(
            TerminalPane::new(title, lines, self.player_status(), theme),
            chunks[1],
        );
    }

    fn render_install(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let theme = &self.theme;
        let selected = self.selection.selected();

        let mut managers = Vec::new();
        for (i, manager) in PackageManager::ALL.iter().enumerate() {
            if i > 0 {
                managers.push(Span::raw("  "));
            }
            let label = format!(" {} {} ", manager.icon(), manager.name());
            let style = if *manager == selected {
                theme.highlight_style()
            } else {
                theme.text_secondary_style()
            };
            managers.push(Span::styled(label, style));
        }

        let recommended = if selected.is_recommended() { " (recommended)" } else { "" };
        let mut command_line = vec![Span::styled(
            format!("$ {}", self.selection.install_command()),
            theme.accent_bold_style(),
        )];
        if self.feedback.active_label(now) == Some(INSTALL_COPY_LABEL) {
            command_line.push(Span::styled("  ✓ Copied!", theme.success_style()));
        }

        let mut progress = vec![Span::styled(
            format!(
                "Steps ({}/{} done)",
                self.checklist.completed_count(),
                INSTALLATION_STEPS.len()
            ),
            theme.text_style().add_modifier(Modifier::BOLD),
        )];
        if self.checklist.all_done() {
            progress.push(Span::styled("  ✓ All set!", theme.success_style()));
        }

        let mut lines = vec![
            Line::from(managers),
            Line::from(Span::styled(
                format!("{}{}", selected.description(), recommended),
                theme.text_secondary_style(),
            )),
            Line::from(""),
            Line::from(command_line),
            Line::from(""),
            Line::from(progress),
        ];

        for step in &INSTALLATION_STEPS {
            let done = self.checklist.is_done(step.step);
            let command = if step.step == 1 {
                self.selection.install_command()
            } else {
                step.command
            };
            let check = if done { "[x]" } else { "[ ]" };
            let title_style = if done {
                theme.success_style()
            } else {
                theme.text_style()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", check), title_style),
                Span::styled(format!("{}. {}", step.step, step.title), title_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("      $ {}", command),
                theme.accent_style(),
            )));
            lines.push(Line::from(Span::styled(
                format!("      {}", step.description),
                theme.text_secondary_style(),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.text_secondary_style())
            .title(format!(" Install {} ", SITE.name));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_examples(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let theme = &self.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        let titles: Vec<&str> = CODE_EXAMPLES.iter().map(|(_, title, _)| *title).collect();
        let tabs = Tabs::new(titles)
            .select(self.example_idx)
            .style(theme.text_secondary_style())
            .highlight_style(theme.accent_bold_style());
        frame.render_widget(tabs, chunks[0]);

        let (id, title, code) = CODE_EXAMPLES[self.example_idx];
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.text_secondary_style())
            .title_top(Line::from(format!(" {} ", title)));
        if self.feedback.active_label(now) == Some(id) {
            block = block.title_top(
                Line::from(Span::styled(" ✓ Copied! ", theme.success_style())).right_aligned(),
            );
        }

        let lines: Vec<Line> = code
            .lines()
            .map(|line| {
                let style = if line.trim_start().starts_with('#') {
                    theme.text_secondary_style().add_modifier(Modifier::ITALIC)
                } else {
                    theme.text_style()
                };
                Line::from(Span::styled(line.to_string(), style))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), chunks[1]);
    }

    fn render_about(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let theme = &self.theme;
        let link = |label: &'static str, url: String| {
            Line::from(vec![
                Span::styled(format!("{:<9}", label), theme.text_secondary_style()),
                Span::styled(url, theme.accent_style()),
            ])
        };

        let mut repo = link("GitHub", SITE.github.to_string());
        if self.feedback.active_label(now) == Some(REPO_COPY_LABEL) {
            repo.push_span(Span::styled("  ✓ Copied!", theme.success_style()));
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled(SITE.name, theme.accent_bold_style()),
                Span::styled(format!(": {}", SITE.tagline), theme.text_style()),
            ]),
            Line::from(""),
            repo,
            link("npm", SITE.npm.to_string()),
            link("Issues", SITE.issues.to_string()),
            link("License", format!("{} ({})", SITE.license, SITE.license_url())),
            Line::from(""),
            Line::from(Span::styled(
                "How to contribute",
                theme.text_style().add_modifier(Modifier::BOLD),
            )),
        ];
        for contribution in &CONTRIBUTIONS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} {}", contribution.icon, contribution.title),
                    theme.text_style(),
                ),
                Span::styled(format!(" · {}", contribution.action), theme.text_secondary_style()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", contribution.link),
                theme.accent_style(),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.text_secondary_style())
            .title(format!(" About {} ", SITE.name))
            .title_bottom(Line::from(format!(" Made by {} ", SITE.author)).right_aligned());
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

fn render_features(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(SITE.description, theme.text_secondary_style())),
        Line::from(""),
    ];
    for feature in &FEATURES {
        lines.push(Line::from(Span::styled(
            format!("{} {}", feature.icon, feature.title),
            theme.text_style().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", feature.description),
            theme.text_secondary_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("   $ {}", feature.command),
            theme.accent_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.text_secondary_style())
        .title(" Features ");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_tabs(frame: &mut Frame, area: Rect, view: View, theme: &Theme) {
    let titles: Vec<&str> = View::ALL.iter().map(View::title).collect();
    let tabs = Tabs::new(titles)
        .select(view.index())
        .style(theme.text_secondary_style())
        .highlight_style(theme.accent_bold_style())
        .divider("|");
    frame.render_widget(tabs, area);
}

const HELP_WIDTH: u16 = 44;

fn render_help(frame: &mut Frame, theme: &Theme) {
    let text = build_help_text(theme);
    let area = popup_area(frame.area(), HELP_WIDTH, text.len() as u16 + 2);
    frame.render_widget(Clear, area);

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let section = |title: &'static str| Line::from(Span::styled(title, theme.text_secondary_style()));
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), theme.accent_style()),
            Span::raw(desc),
        ])
    };

    vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme.accent_bold_style())),
        Line::from(""),
        section("Demo"),
        entry("↑/↓ 1-4", "Pick a scenario"),
        entry("r", "Restart playback"),
        entry("l", "Toggle loop"),
        entry("+/-", "Faster / slower"),
        Line::from(""),
        section("Install"),
        entry("←/→", "Package manager"),
        entry("1-3", "Mark a step done"),
        entry("c", "Copy install command"),
        Line::from(""),
        section("Examples"),
        entry("←/→", "Switch example"),
        entry("c", "Copy example"),
        Line::from(""),
        section("About"),
        entry("c", "Copy repository URL"),
        Line::from(""),
        entry("Tab", "Next view"),
        entry("?", "This help"),
        entry("q/Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", theme.text_secondary_style())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Copy;
    use crate::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn screen_text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(state: &DemoState, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| state.render(frame, now)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    fn state(scenario: &str, now: Instant) -> DemoState {
        DemoState::new(&Config::default(), Some(scenario), now)
            .with_copier(Copy::with_tools(vec![]))
            .with_seed(1, now)
    }

    fn press(state: &mut DemoState, code: KeyCode, now: Instant) {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn open(state: &mut DemoState, view: View, now: Instant) {
        while state.view() != view {
            press(state, KeyCode::Tab, now);
        }
    }

    #[test]
    fn demo_view_shows_finished_transcript() {
        let now = Instant::now();
        let mut s = state("basic", now);
        let later = now + Duration::from_secs(600);
        for _ in 0..200 {
            s.advance(later);
        }

        let screen = draw(&s, later);
        assert!(screen.contains("Scenarios"));
        assert!(screen.contains("$ pf add . my-project"));
        assert!(screen.contains("✓ Done"));
        assert!(screen.contains("Basic Usage | 6/6 lines | speed 1.00x | loop off"));
        assert!(screen.contains("r: restart"));
    }

    #[test]
    fn install_view_shows_selected_command_and_checklist() {
        let now = Instant::now();
        let mut s = state("basic", now);
        open(&mut s, View::Install, now);
        press(&mut s, KeyCode::Right, now);
        press(&mut s, KeyCode::Char('1'), now);

        let screen = draw(&s, now);
        assert!(screen.contains("$ npm install -g path-fast"));
        assert!(screen.contains("[x] 1. Install globally"));
        assert!(screen.contains("[ ] 2. Add a project"));
        assert!(screen.contains("Steps (1/3 done)"));
        assert!(!screen.contains("All set!"));
        assert!(screen.contains("c: copy"));
    }

    #[test]
    fn install_view_marks_completed_checklist() {
        let now = Instant::now();
        let mut s = state("basic", now);
        open(&mut s, View::Install, now);
        for step in ['1', '2', '3'] {
            press(&mut s, KeyCode::Char(step), now);
        }

        let screen = draw(&s, now);
        assert!(screen.contains("Steps (3/3 done)  ✓ All set!"));
    }

    #[test]
    fn features_view_lists_every_feature_with_its_command() {
        let now = Instant::now();
        let mut s = state("basic", now);
        open(&mut s, View::Features, now);

        let screen = draw(&s, now);
        for feature in &FEATURES {
            assert!(screen.contains(feature.title), "{}", feature.title);
            assert!(screen.contains(&format!("$ {}", feature.command)), "{}", feature.command);
        }
        assert!(screen.contains("Tab: view"));
    }

    #[test]
    fn about_view_shows_links_license_and_contributions() {
        let now = Instant::now();
        let mut s = state("basic", now);
        open(&mut s, View::About, now);

        let screen = draw(&s, now);
        assert!(screen.contains(SITE.github));
        assert!(screen.contains(SITE.npm));
        assert!(screen.contains(SITE.issues));
        assert!(screen.contains("License  MIT"));
        assert!(screen.contains("How to contribute"));
        for contribution in &CONTRIBUTIONS {
            assert!(screen.contains(contribution.title), "{}", contribution.title);
        }
        assert!(screen.contains("Discussions · Join in"));
        assert!(screen.contains(&format!("   {}", SITE.discussions)));
        assert!(screen.contains("Made by Eduardo Nicola Possani"));
        assert!(screen.contains("c: copy repo URL"));
    }

    #[test]
    fn examples_view_shows_selected_snippet() {
        let now = Instant::now();
        let mut s = state("basic", now);
        open(&mut s, View::Examples, now);
        press(&mut s, KeyCode::Right, now);

        let screen = draw(&s, now);
        assert!(screen.contains("pf add . api --cmd \"npm run dev\""));
        assert!(!screen.contains("Copied!"));
    }

    #[test]
    fn help_overlay_lists_shortcuts() {
        let now = Instant::now();
        let mut s = state("basic", now);
        press(&mut s, KeyCode::Char('?'), now);

        let screen = draw(&s, now);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("Restart playback"));
    }

    #[test]
    fn status_summary_counts_lines() {
        let now = Instant::now();
        let s = state("basic", now);
        assert_eq!(
            s.status_summary(),
            format!(
                "Basic Usage | 0/{} lines | speed 1.00x | loop off",
                s.scenario().script.lines.len()
            )
        );
    }
}
