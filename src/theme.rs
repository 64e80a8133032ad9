//! Color palettes.
//!
//! A palette assigns a color to each semantic role of the demo. The TUI reads
//! the roles as ratatui styles, the stdout renderer and the plain-text
//! commands as ANSI escapes.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// A named set of role colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Body text
    pub text: Color,
    /// Program output, comments and hints
    pub muted: Color,
    /// Prompt, commands, key hints and the cursor
    pub accent: Color,
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::path_fast()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`].
    pub const NAMES: [&'static str; 3] = ["default", "mono", "ocean"];

    /// The Path-Fast site colors.
    pub fn path_fast() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Near-monochrome palette for light or low-color terminals.
    pub fn mono() -> Self {
        Self {
            text: Color::Reset,
            muted: Color::DarkGray,
            accent: Color::White,
            success: Color::White,
            error: Color::LightRed,
        }
    }

    pub fn ocean() -> Self {
        Self {
            text: Color::LightCyan,
            muted: Color::Blue,
            accent: Color::LightBlue,
            success: Color::LightGreen,
            error: Color::LightMagenta,
        }
    }

    /// Resolve a config name, case-insensitively. `path-fast` aliases the default.
    pub fn by_name(name: &str) -> Option<Self> {
        let theme = match name.to_ascii_lowercase().as_str() {
            "default" | "path-fast" => Self::path_fast(),
            "mono" => Self::mono(),
            "ocean" => Self::ocean(),
            _ => return None,
        };
        Some(theme)
    }

    pub fn text_style(&self) -> Style {
        fg(self.text)
    }

    pub fn text_secondary_style(&self) -> Style {
        fg(self.muted)
    }

    pub fn accent_style(&self) -> Style {
        fg(self.accent)
    }

    /// Accent in bold, used for key names.
    pub fn accent_bold_style(&self) -> Style {
        fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Selected list row: dark text on the accent color.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        fg(self.success)
    }

    pub fn error_style(&self) -> Style {
        fg(self.error)
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.muted, text)
    }

    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_ITALIC: &str = "\x1b[3m";

fn paint(color: Color, text: &str) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// SGR foreground sequence for the 16 named colors.
///
/// RGB and indexed colors have no fixed escape and map to an empty string,
/// leaving the terminal's current color in place.
pub fn color_to_ansi(color: Color) -> &'static str {
    const NORMAL: [&str; 8] = [
        "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m",
        "\x1b[37m",
    ];
    const BRIGHT: [&str; 8] = [
        "\x1b[90m", "\x1b[91m", "\x1b[92m", "\x1b[93m", "\x1b[94m", "\x1b[95m", "\x1b[96m",
        "\x1b[97m",
    ];
    match color {
        Color::Reset => ANSI_RESET,
        Color::Black => NORMAL[0],
        Color::Red => NORMAL[1],
        Color::Green => NORMAL[2],
        Color::Yellow => NORMAL[3],
        Color::Blue => NORMAL[4],
        Color::Magenta => NORMAL[5],
        Color::Cyan => NORMAL[6],
        Color::Gray => NORMAL[7],
        Color::DarkGray => BRIGHT[0],
        Color::LightRed => BRIGHT[1],
        Color::LightGreen => BRIGHT[2],
        Color::LightYellow => BRIGHT[3],
        Color::LightBlue => BRIGHT[4],
        Color::LightMagenta => BRIGHT[5],
        Color::LightCyan => BRIGHT[6],
        Color::White => BRIGHT[7],
        Color::Rgb(..) | Color::Indexed(_) => "",
    }
}

/// False when `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the configured theme. Later calls are ignored.
pub fn init_theme(theme: Theme) {
    if THEME.set(theme).is_err() {
        tracing::debug!("theme already initialized");
    }
}

/// The installed theme, or the default before [`init_theme`] runs.
pub fn current_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}
