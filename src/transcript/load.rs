//! Loading scripts from disk.
//!
//! The format is picked from the file extension: `.json` is parsed as JSON,
//! anything else as TOML with `[[lines]]` tables.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Script;

impl Script {
    /// Load a script file, choosing the parser from the extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let mut script = if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_toml(&content)
        }
        .with_context(|| format!("Invalid script: {}", path.display()))?;

        if script.title.is_empty() {
            script.title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        tracing::debug!(path = %path.display(), lines = script.lines.len(), "loaded script");
        Ok(script)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML script")
    }

    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON script")
    }
}
