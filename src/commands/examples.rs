//! `pf-demo examples`: print Path-Fast code examples.

use anyhow::{bail, Result};

use pfdemo::catalog::{code_example, CODE_EXAMPLES};
use pfdemo::clipboard::copy_text;
use pfdemo::theme::current_theme;

pub fn handle(id: Option<&str>, copy: bool) -> Result<()> {
    let theme = current_theme();

    let Some(id) = id else {
        for (i, (id, title, code)) in CODE_EXAMPLES.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{} {}", theme.accent_text(title), theme.secondary_text(&format!("({})", id)));
            println!("{}", code);
        }
        return Ok(());
    };

    let Some(code) = code_example(id) else {
        let ids: Vec<&str> = CODE_EXAMPLES.iter().map(|(id, _, _)| *id).collect();
        bail!("Unknown example '{}' (available: {})", id, ids.join(", "));
    };

    // Raw snippet so it can be piped
    println!("{}", code);

    if copy {
        match copy_text(code) {
            Ok(result) => eprintln!("{}", theme.success_text(&result.message("example"))),
            Err(err) => bail!("Could not copy example: {}", err),
        }
    }
    Ok(())
}
