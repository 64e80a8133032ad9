//! Package managers Path-Fast can be installed with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Pnpm,
    Npm,
    Yarn,
}

impl PackageManager {
    /// All managers in display order (recommended first).
    pub const ALL: [PackageManager; 3] = [PackageManager::Pnpm, PackageManager::Npm, PackageManager::Yarn];

    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Global install command for Path-Fast.
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm add -g path-fast",
            PackageManager::Npm => "npm install -g path-fast",
            PackageManager::Yarn => "yarn global add path-fast",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "📦",
            PackageManager::Npm => "📋",
            PackageManager::Yarn => "🧶",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "Fast and efficient",
            PackageManager::Npm => "Node.js default",
            PackageManager::Yarn => "Popular alternative",
        }
    }

    pub fn is_recommended(&self) -> bool {
        matches!(self, PackageManager::Pnpm)
    }

    /// Position in [`PackageManager::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown package manager: {}", s))
    }
}

/// The package manager chosen by the user, shared by every view of one app.
///
/// The owning app creates it and lends it to views by reference; it lives
/// exactly as long as that app.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageManagerSelection {
    selected: PackageManager,
}

impl PackageManagerSelection {
    pub fn new(initial: PackageManager) -> Self {
        Self { selected: initial }
    }

    pub fn selected(&self) -> PackageManager {
        self.selected
    }

    pub fn select(&mut self, manager: PackageManager) {
        if self.selected != manager {
            tracing::debug!(from = %self.selected, to = %manager, "package manager selected");
        }
        self.selected = manager;
    }

    /// Move the selection by `delta` positions, wrapping around.
    pub fn cycle(&mut self, delta: isize) {
        let len = PackageManager::ALL.len() as isize;
        let idx = (self.selected.index() as isize + delta).rem_euclid(len) as usize;
        self.select(PackageManager::ALL[idx]);
    }

    pub fn install_command(&self) -> &'static str {
        self.selected.install_command()
    }
}
