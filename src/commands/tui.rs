//! `pf-demo tui`: the interactive demo.

use anyhow::{bail, Result};

use pfdemo::transcript::{find_scenario, SCENARIO_IDS};
use pfdemo::tui::{DemoApp, TuiApp};
use pfdemo::Config;

#[cfg(not(tarpaulin_include))]
pub fn handle(scenario: Option<&str>, config: &Config) -> Result<()> {
    if let Some(id) = scenario {
        if find_scenario(id).is_none() {
            bail!("Unknown scenario '{}' (available: {})", id, SCENARIO_IDS.join(", "));
        }
    }
    let mut app = DemoApp::new(config.clone(), scenario)?;
    app.run()
}
