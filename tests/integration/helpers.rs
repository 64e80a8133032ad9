//! Shared helpers for integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated environment: its own config path, no colors.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    /// `pf-demo` with this environment applied.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pf-demo").expect("binary should be built");
        cmd.env("NO_COLOR", "1")
            .env("PF_DEMO_CONFIG", self.config_path())
            .env_remove("PF_DEMO_LOG");
        cmd
    }

    /// Write a file relative to the temp dir and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        write_file(&path, content);
        path
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
