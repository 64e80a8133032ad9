//! Line formatting and styling.

use std::time::Duration;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::player::PlaybackState;
use crate::theme::{color_to_ansi, Theme, ANSI_ITALIC};
use crate::transcript::{LineKind, TranscriptLine};

/// Shell prompt shown in front of command lines.
pub const PROMPT: &str = "$ ";

/// Block cursor drawn after the typing line.
pub const CURSOR: &str = "▌";

/// Full on/off period of the blinking cursor.
pub const CURSOR_BLINK_PERIOD: Duration = Duration::from_millis(1000);

/// Display text of a fully revealed line.
pub fn format_line(line: &TranscriptLine) -> String {
    format_partial(line.kind, &line.text)
}

/// Display text of a partially revealed line of the given kind.
pub fn format_partial(kind: LineKind, partial: &str) -> String {
    if kind.is_command() {
        format!("{}{}", PROMPT, partial)
    } else {
        partial.to_string()
    }
}

/// TUI style for a line kind.
pub fn line_style(kind: LineKind, theme: &Theme) -> Style {
    match kind {
        LineKind::Command => theme.accent_style(),
        LineKind::Output => theme.text_secondary_style(),
        LineKind::Success => theme.success_style(),
        LineKind::Error => theme.error_style(),
        LineKind::Comment => theme
            .text_secondary_style()
            .add_modifier(Modifier::ITALIC),
    }
}

/// ANSI prefix for a line kind (reset with `ANSI_RESET`).
pub fn kind_ansi(kind: LineKind, theme: &Theme) -> String {
    let color = match kind {
        LineKind::Command => theme.accent,
        LineKind::Output | LineKind::Comment => theme.muted,
        LineKind::Success => theme.success,
        LineKind::Error => theme.error,
    };
    let mut prefix = color_to_ansi(color).to_string();
    if kind == LineKind::Comment {
        prefix.push_str(ANSI_ITALIC);
    }
    prefix
}

/// Whether the cursor is drawn at `elapsed` into the blink cycle.
///
/// Visible for the first half of every period.
pub fn cursor_visible(elapsed: Duration) -> bool {
    let period = CURSOR_BLINK_PERIOD.as_millis();
    elapsed.as_millis() % period < period / 2
}

/// Build the ratatui lines for a playback: every revealed line, then the
/// typing line (if any) followed by the cursor.
///
/// Multi-line text is split on `\n`; the prompt only precedes the first row.
pub fn styled_lines(
    state: &PlaybackState,
    current: Option<&TranscriptLine>,
    theme: &Theme,
    cursor_on: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for line in &state.revealed_lines {
        let style = line_style(line.kind, theme);
        for row in format_line(line).split('\n') {
            lines.push(Line::from(Span::styled(row.to_string(), style)));
        }
    }

    if let (true, Some(line)) = (state.is_typing, current) {
        let style = line_style(line.kind, theme);
        let text = format_partial(line.kind, &state.partial_text);
        let mut rows: Vec<Line<'static>> = text
            .split('\n')
            .map(|row| Line::from(Span::styled(row.to_string(), style)))
            .collect();
        let cursor = if cursor_on { CURSOR } else { " " };
        if let Some(last) = rows.last_mut() {
            last.spans
                .push(Span::styled(cursor.to_string(), theme.accent_style()));
        }
        lines.extend(rows);
    }

    lines
}

/// Render a whole script at once as ANSI text (no animation).
pub fn render_plain(lines: &[TranscriptLine], theme: &Theme, color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        if color {
            out.push_str(&kind_ansi(line.kind, theme));
        }
        out.push_str(&format_line(line));
        if color {
            out.push_str(crate::theme::ANSI_RESET);
        }
        out.push('\n');
    }
    out
}
