//! `pf-demo about`: project links, license and ways to contribute.

use anyhow::Result;

use pfdemo::catalog::{CONTRIBUTIONS, SITE};
use pfdemo::theme::current_theme;

pub fn handle() -> Result<()> {
    let theme = current_theme();

    println!("{}: {}", theme.accent_text(SITE.name), SITE.tagline);
    println!();
    let links = [
        ("GitHub", SITE.github.to_string()),
        ("npm", SITE.npm.to_string()),
        ("Issues", SITE.issues.to_string()),
        ("License", format!("{} ({})", SITE.license, SITE.license_url())),
        ("Author", SITE.author.to_string()),
    ];
    for (label, value) in &links {
        println!("{} {}", theme.secondary_text(&format!("{:<8}", label)), value);
    }

    println!();
    println!("{}", theme.primary_text("How to contribute"));
    for contribution in &CONTRIBUTIONS {
        println!();
        println!("{} {}", contribution.icon, theme.primary_text(contribution.title));
        println!("   {}", theme.secondary_text(contribution.description));
        println!(
            "   {} {}",
            contribution.action,
            theme.accent_text(&format!("→ {}", contribution.link))
        );
    }
    Ok(())
}
