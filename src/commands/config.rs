//! Config subcommands handler

use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use pfdemo::config::migrate_config;
use pfdemo::theme::{current_theme, Theme};
use pfdemo::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print the config file location.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite, or `config migrate` to add new settings)",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    println!(
        "{}",
        current_theme().success_text(&format!("Wrote {}", path.display()))
    );
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.primary_text(&format!("Opening {} with {}", config_path.display(), editor))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        bail!("Editor exited with {}", status);
    }
    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Shows the added lines and asks before writing unless `yes` is set.
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        let fields = result.added_fields.len();
        let summary = if result.sections_added.is_empty() {
            format!("Found {} missing field(s):", fields)
        } else {
            format!(
                "Found {} missing field(s) in {} new section(s):",
                fields,
                result.sections_added.len()
            )
        };
        println!("{}", theme.primary_text(&summary));
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
    }
    println!();
    for line in diff_preview(
        &result.content,
        &result.added_fields,
        &result.sections_added,
        !file_exists,
    ) {
        println!("{}", paint_added(&theme, &line));
    }
    println!();

    let question = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{}", theme.success_text("Config updated successfully."));
    Ok(())
}

fn paint_added(theme: &Theme, line: &str) -> String {
    if line.starts_with('+') {
        theme.success_text(line)
    } else {
        line.to_string()
    }
}

/// Diff-style lines for the migrated content.
///
/// Added keys (and the headers of their sections) are prefixed with `+ `.
/// Headers of existing sections that gained keys are shown as context.
/// For a new file every non-empty line counts as added.
fn diff_preview(
    new_content: &str,
    added_fields: &[String],
    sections_added: &[String],
    is_new_file: bool,
) -> Vec<String> {
    let added: HashSet<&str> = added_fields.iter().map(String::as_str).collect();
    let new_sections: HashSet<&str> = sections_added.iter().map(String::as_str).collect();
    let mut out = Vec::new();
    let mut section = String::new();
    let mut pending_header: Option<String> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = trimmed.trim_matches(|c| c == '[' || c == ']').to_string();
            pending_header = Some(line.to_string());
            continue;
        }

        let is_added = is_new_file
            || trimmed
                .split_once('=')
                .is_some_and(|(key, _)| added.contains(format!("{}.{}", section, key.trim()).as_str()));
        if !is_added {
            continue;
        }

        if let Some(header) = pending_header.take() {
            let prefix = if is_new_file || new_sections.contains(section.as_str()) {
                "+ "
            } else {
                "  "
            };
            out.push(format!("{}{}", prefix, header));
        }
        out.push(format!("+ {}", line));
    }
    out
}

/// Prompt user for yes/no confirmation.
///
/// Returns false without asking if stdin is not a terminal.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
