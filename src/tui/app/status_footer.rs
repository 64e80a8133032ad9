//! Status line and footer rendering
//!
//! The status bar shows the playback summary or a transient message; the
//! footer lists the keybindings of the active view.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const SEPARATOR: &str = " | ";

/// Render a status line in the secondary text color.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let status = Paragraph::new(text.to_string()).style(theme.text_secondary_style());
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// `&[("q", "quit"), ("?", "help")]` renders as `"q: quit | ?: help"`.
/// Trailing hints that do not fit the width are left out.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let keys = fit_keys(keys, area.width as usize);
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Keys in the accent color, descriptions secondary, joined by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(theme.accent)));
        spans.push(Span::styled(format!(": {}", desc), theme.text_secondary_style()));
    }
    spans
}

/// Longest prefix of `keys` whose rendered hints fit in `width` columns.
fn fit_keys<'a, 'k>(keys: &'a [(&'k str, &'k str)], width: usize) -> &'a [(&'k str, &'k str)] {
    let mut used = 0;
    for (i, (key, desc)) in keys.iter().enumerate() {
        let sep = if i > 0 { SEPARATOR.width() } else { 0 };
        // "key: desc"
        let hint = key.width() + 2 + desc.width();
        if used + sep + hint > width {
            return &keys[..i];
        }
        used += sep + hint;
    }
    keys
}
