//! pf-demo command line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pfdemo::cli::{Cli, Commands, ConfigCommands};
use pfdemo::theme::init_theme;
use pfdemo::Config;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PF_DEMO_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Log to stderr. `-v` overrides `PF_DEMO_LOG`, which defaults to `warn`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// A broken config file should not lock users out of the demo.
fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}; using default settings");
            Config::default()
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config();
    init_theme(config.theme());

    match cli.command {
        Commands::Play(args) => commands::play::handle(&args, &config),
        Commands::Tui { scenario } => commands::tui::handle(scenario.as_deref(), &config),
        Commands::Scenarios => commands::scenarios::handle(),
        Commands::Features => commands::features::handle(),
        Commands::Install { manager, copy } => commands::install::handle(manager, copy, &config),
        Commands::Examples { id, copy } => commands::examples::handle(id.as_deref(), copy),
        Commands::About => commands::about::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
