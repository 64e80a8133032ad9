//! Command line definitions.
//!
//! Lives in the library so `xtask` can render man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::catalog::PackageManager;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("PF_DEMO_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PF_DEMO_BUILD_DATE"), ")");

const AFTER_HELP: &str = concat!(
    "Set PF_DEMO_LOG (e.g. PF_DEMO_LOG=debug) for diagnostic output on stderr.\n\n",
    "Source: https://github.com/",
    env!("PF_DEMO_REPO_NAME")
);

#[derive(Debug, Parser)]
#[command(
    name = "pf-demo",
    version = VERSION,
    about = "Replay scripted Path-Fast terminal transcripts",
    long_about = "Replay scripted Path-Fast terminal transcripts.\n\n\
                  Transcripts are typed out line by line like a live shell session, \
                  either streamed to stdout or inside an interactive terminal UI.",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Type a transcript out to stdout
    Play(PlayArgs),

    /// Open the interactive demo
    Tui {
        /// Scenario selected on start
        #[arg(short, long, value_name = "NAME")]
        scenario: Option<String>,
    },

    /// List the built-in scenarios
    Scenarios,

    /// List Path-Fast features with a command for each
    Features,

    /// Show how to install Path-Fast
    Install {
        /// Package manager to show the command for (defaults to config)
        #[arg(short, long, value_enum)]
        manager: Option<PackageManager>,

        /// Copy the install command to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Print Path-Fast code examples
    Examples {
        /// Example to print (basic, advanced, workflow); all when omitted
        id: Option<String>,

        /// Copy the example to the clipboard
        #[arg(short, long, requires = "id")]
        copy: bool,
    },

    /// Show project links, license and how to contribute
    About,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Built-in scenario to play
    #[arg(default_value = "basic", conflicts_with = "file")]
    pub scenario: String,

    /// Play a script file (TOML or JSON) instead of a scenario
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Replay forever (Ctrl-C to stop)
    #[arg(short, long = "loop")]
    pub looping: bool,

    /// Stop after this many loop cycles
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,

    /// Speed multiplier, 0.1 to 16 (defaults to config)
    #[arg(short, long, value_name = "X")]
    pub speed: Option<f64>,

    /// Seed for the typing cadence, for reproducible timing
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Open the config file in $EDITOR
    Edit,

    /// Add settings missing from the config file
    Migrate {
        /// Apply without asking
        #[arg(short, long)]
        yes: bool,
    },
}
