//! `pf-demo install`: the Path-Fast installation guide.

use anyhow::Result;

use pfdemo::catalog::{PackageManager, PackageManagerSelection, INSTALLATION_STEPS, SITE};
use pfdemo::clipboard::copy_text;
use pfdemo::theme::current_theme;
use pfdemo::Config;

/// Command shown for a step; the first step depends on the package manager.
fn step_command(step: u8, selection: &PackageManagerSelection) -> Option<&'static str> {
    let found = INSTALLATION_STEPS.iter().find(|s| s.step == step)?;
    Some(if step == 1 {
        selection.install_command()
    } else {
        found.command
    })
}

pub fn handle(manager: Option<PackageManager>, copy: bool, config: &Config) -> Result<()> {
    let theme = current_theme();
    let selection = PackageManagerSelection::new(manager.unwrap_or(config.install.default_manager));
    let selected = selection.selected();

    println!("{}", theme.accent_text(&format!("Install {}", SITE.name)));
    println!();
    for manager in PackageManager::ALL {
        let marker = if manager == selected { ">" } else { " " };
        let recommended = if manager.is_recommended() { " (recommended)" } else { "" };
        let line = format!("{} {} {}{}", marker, manager.icon(), manager.name(), recommended);
        if manager == selected {
            println!("{}", theme.primary_text(&line));
        } else {
            println!("{}", theme.secondary_text(&line));
        }
    }
    println!();

    for step in &INSTALLATION_STEPS {
        let command = step_command(step.step, &selection).unwrap_or(step.command);
        println!("{}", theme.primary_text(&format!("{}. {}", step.step, step.title)));
        println!("   {}", theme.accent_text(&format!("$ {}", command)));
        println!("   {}", theme.secondary_text(step.description));
    }

    if copy {
        match copy_text(selection.install_command()) {
            Ok(result) => {
                println!();
                println!("{}", theme.success_text(&result.message("install command")));
            }
            Err(err) => {
                tracing::warn!(%err, "install command not copied");
                eprintln!("{}", theme.error_text(&format!("Could not copy: {}", err)));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_follows_selection() {
        let selection = PackageManagerSelection::new(PackageManager::Yarn);
        assert_eq!(step_command(1, &selection), Some("yarn global add path-fast"));
        assert_eq!(step_command(2, &selection), Some("pf add . my-project"));
        assert_eq!(step_command(9, &selection), None);
    }
}
