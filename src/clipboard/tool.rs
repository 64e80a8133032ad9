//! The seam between the copy orchestrator and the OS tools.

use super::result::CopyMethod;

/// An external program that places text on the system clipboard.
///
/// Tests substitute their own implementations to observe what the views
/// copy without touching the real clipboard.
pub trait CopyTool: Send + Sync {
    fn method(&self) -> CopyMethod;

    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Cheap presence check, run before every copy attempt.
    fn is_available(&self) -> bool;

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}

/// Outcome of a single tool invocation.
///
/// `NotFound` lets the orchestrator move on silently, `Failed` is logged and
/// reported if no later tool succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    Failed(String),
    NotFound,
}
