//! Clipboard support.
//!
//! Text is copied by piping it into a platform tool (pbcopy, xclip, xsel,
//! wl-copy). `CopyFeedback` tracks the short-lived "copied" confirmation the
//! views display after a successful copy.

mod copy;
mod error;
mod feedback;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use feedback::{CopyFeedback, FEEDBACK_DURATION};
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};

/// Copy text with the platform tools.
pub fn copy_text(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
