//! Rendering of transcripts.
//!
//! - `line`: prompt formatting, per-kind styles, ratatui lines, cursor blink
//! - `stream`: incremental ANSI output for plain stdout playback

mod line;
mod stream;

pub use line::{
    cursor_visible, format_line, format_partial, kind_ansi, line_style, render_plain,
    styled_lines, CURSOR, CURSOR_BLINK_PERIOD, PROMPT,
};
pub use stream::StreamRenderer;
