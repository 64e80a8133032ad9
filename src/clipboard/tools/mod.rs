//! Platform-specific clipboard tools.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::{self, Write};
use std::process::{Child, Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pbcopy::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
            Box::new(WlCopy::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check if a binary is on the PATH.
fn tool_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run `program args...` with `text` on its stdin.
fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    let written = match child.stdin.take() {
        // stdin drops at the end of the arm so the tool sees EOF
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    reap(&mut child, program, written)
}

/// Wait for `child` whatever happened while feeding it, so no zombie is left.
///
/// A failed write wins over the exit status; the child is killed first since
/// it may still be waiting for input.
fn reap(child: &mut Child, program: &str, written: io::Result<()>) -> Result<(), CopyToolError> {
    if let Err(e) = written {
        if let Err(kill_err) = child.kill() {
            tracing::debug!(program, %kill_err, "clipboard tool already exited");
        }
        if let Err(wait_err) = child.wait() {
            tracing::debug!(program, %wait_err, "could not reap clipboard tool");
        }
        return Err(CopyToolError::Failed(format!("writing to {}: {}", program, e)));
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} exited with {}", program, status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_maps_to_not_found() {
        let err = pipe_text("pf-demo-no-such-clipboard-tool", &[], "x").unwrap_err();
        assert_eq!(err, CopyToolError::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn failed_write_still_reaps_the_child() {
        let mut child = Command::new("true")
            .stdin(Stdio::piped())
            .spawn()
            .unwrap();
        let broken = Err(io::Error::from(io::ErrorKind::BrokenPipe));

        let err = reap(&mut child, "true", broken).unwrap_err();
        assert!(matches!(err, CopyToolError::Failed(ref msg) if msg.starts_with("writing to true")));
        // Already waited: the exit status is cached
        assert!(child.try_wait().unwrap().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_a_failure() {
        // `false` may exit before reading, so the write can fail too
        let err = pipe_text("false", &[], "x").unwrap_err();
        assert!(matches!(err, CopyToolError::Failed(_)));
    }

    #[test]
    fn tool_names_are_stable() {
        assert_eq!(Pbcopy::new().name(), "pbcopy");
        assert_eq!(Xclip::new().name(), "xclip");
        assert_eq!(Xsel::new().name(), "xsel");
        assert_eq!(WlCopy::new().name(), "wl-copy");
    }
}
