/// Why text could not be copied.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Every known tool is missing from the PATH
    #[error("no clipboard tool found (install pbcopy, xclip, xsel or wl-copy)")]
    NoToolAvailable,

    /// A tool ran and reported an error; the last such error is kept
    #[error("{tool} could not copy: {message}")]
    ToolFailed { tool: &'static str, message: String },

    #[error("copying is only supported on macOS and Linux")]
    UnsupportedPlatform,
}
