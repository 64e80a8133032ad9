//! `pf-demo features`: what Path-Fast does, with a command for each.

use anyhow::Result;

use pfdemo::catalog::{FEATURES, SITE};
use pfdemo::theme::current_theme;

pub fn handle() -> Result<()> {
    let theme = current_theme();

    println!("{}", theme.secondary_text(SITE.description));
    for feature in &FEATURES {
        println!();
        println!("{} {}", feature.icon, theme.primary_text(feature.title));
        println!("   {}", theme.secondary_text(feature.description));
        println!("   {}", theme.accent_text(&format!("$ {}", feature.command)));
    }
    Ok(())
}
