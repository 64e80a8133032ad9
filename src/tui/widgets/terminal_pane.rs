//! Terminal-window widget showing a playback.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

/// Status indicator in the pane's title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Nothing to play
    Idle,
    Running,
    /// Running and will replay after the last line
    Looping,
    /// The completion notification fired
    Done,
}

impl PlayerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerStatus::Idle => "○ Idle",
            PlayerStatus::Running => "● Running",
            PlayerStatus::Looping => "⟳ Looping",
            PlayerStatus::Done => "✓ Done",
        }
    }

    fn style(&self, theme: &Theme) -> Style {
        match self {
            PlayerStatus::Idle => theme.text_secondary_style(),
            PlayerStatus::Running | PlayerStatus::Looping => theme.accent_style(),
            PlayerStatus::Done => theme.success_style(),
        }
    }
}

/// A bordered "terminal window": title on the left, status on the right,
/// transcript lines inside, scrolled so the newest line stays visible.
pub struct TerminalPane<'a> {
    title: &'a str,
    lines: Vec<Line<'static>>,
    status: PlayerStatus,
    theme: &'a Theme,
}

impl<'a> TerminalPane<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'static>>, status: PlayerStatus, theme: &'a Theme) -> Self {
        Self {
            title,
            lines,
            status,
            theme,
        }
    }
}

impl Widget for TerminalPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.text_secondary_style())
            .title_top(Line::from(Span::styled(
                format!(" {} ", self.title),
                self.theme.text_style().add_modifier(Modifier::BOLD),
            )))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", self.status.label()),
                    self.status.style(self.theme),
                ))
                .right_aligned(),
            );

        let inner_height = block.inner(area).height as usize;
        let scroll = self.lines.len().saturating_sub(inner_height);
        let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

        Paragraph::new(self.lines)
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}
