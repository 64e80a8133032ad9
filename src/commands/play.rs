//! `pf-demo play`: stream a transcript to stdout.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use pfdemo::cli::PlayArgs;
use pfdemo::player::{play_blocking, PlaybackOutcome, TranscriptPlayer};
use pfdemo::render::StreamRenderer;
use pfdemo::theme::{colors_enabled, current_theme};
use pfdemo::transcript::{find_scenario, Script, SCENARIO_IDS};
use pfdemo::Config;

/// Resolve the script to play and whether it loops by default.
fn resolve_script(args: &PlayArgs) -> Result<(Script, bool)> {
    if let Some(path) = &args.file {
        return Ok((Script::load(path)?, false));
    }
    match find_scenario(&args.scenario) {
        Some(scenario) => Ok((scenario.script, scenario.looping)),
        None => bail!(
            "Unknown scenario '{}' (available: {})",
            args.scenario,
            SCENARIO_IDS.join(", ")
        ),
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config) -> Result<()> {
    let (script, scenario_loops) = resolve_script(args)?;
    if script.is_empty() {
        eprintln!("{}", current_theme().secondary_text("Script has no lines."));
        return Ok(());
    }

    let looping = args.looping || scenario_loops;
    let mut options = config.player.to_options(looping);
    if let Some(speed) = args.speed {
        options.speed = speed;
    }

    let mut player = TranscriptPlayer::new(script.lines, options);
    if let Some(seed) = args.seed {
        player = player.with_seed(seed);
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    let color = !args.no_color && colors_enabled() && atty::is(atty::Stream::Stdout);
    let mut renderer = StreamRenderer::new(io::stdout().lock(), current_theme(), color);

    tracing::debug!(title = %script.title, looping, "playing");
    let outcome = play_blocking(&mut player, &cancel, args.cycles, |player| {
        renderer.update(player)
    })?;

    if outcome == PlaybackOutcome::Cancelled {
        tracing::debug!("stopped by Ctrl-C");
    }
    // Leave the shell prompt on a fresh line
    renderer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pfdemo::cli::{Cli, Commands};

    fn play_args(argv: &[&str]) -> PlayArgs {
        let mut full = vec!["pf-demo", "play"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Play(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn resolves_builtin_scenario() {
        let (script, looping) = resolve_script(&play_args(&["hero"])).unwrap();
        assert!(looping);
        assert!(!script.is_empty());
    }

    #[test]
    fn unknown_scenario_lists_available() {
        let err = resolve_script(&play_args(&["nope"])).unwrap_err();
        assert!(err.to_string().contains("hero, basic, advanced, workflow"));
    }

    #[test]
    fn file_scripts_do_not_loop_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.toml");
        std::fs::write(&path, "[[lines]]\nkind = \"command\"\ntext = \"pf list\"\n").unwrap();

        let (script, looping) =
            resolve_script(&play_args(&["--file", path.to_str().unwrap()])).unwrap();
        assert!(!looping);
        assert_eq!(script.lines.len(), 1);
        assert_eq!(script.title, "demo");
    }
}
