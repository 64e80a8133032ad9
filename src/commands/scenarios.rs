//! `pf-demo scenarios`: list the built-in transcripts.

use anyhow::Result;

use pfdemo::theme::current_theme;
use pfdemo::transcript::builtin_scenarios;

pub fn handle() -> Result<()> {
    let theme = current_theme();
    let scenarios = builtin_scenarios();
    let width = scenarios.iter().map(|s| s.id.len()).max().unwrap_or(0);

    for scenario in scenarios {
        let script = &scenario.script;
        let details = format!(
            "{} lines, {:.1}s of pauses{}",
            script.lines.len(),
            script.total_pre_delay().as_secs_f64(),
            if scenario.looping { ", loops" } else { "" }
        );
        println!(
            "{}  {} {}",
            theme.accent_text(&format!("{:<width$}", scenario.id)),
            theme.primary_text(&script.title),
            theme.secondary_text(&format!("({})", details)),
        );
        println!("{:<width$}  {}", "", theme.secondary_text(&script.description));
    }
    Ok(())
}
