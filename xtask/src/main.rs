//! Development tasks for pf-demo.
//!
//! `cargo run -p xtask -- man` renders man pages into `target/man`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask", about = "pf-demo development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for pf-demo and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let cmd = pfdemo::cli::Cli::command();
    write_page(&cmd, &out.join("pf-demo.1"))?;
    for sub in cmd.get_subcommands() {
        let path = out.join(format!("pf-demo-{}.1", sub.get_name()));
        write_page(sub, &path)?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_page(cmd: &Command, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Man::new(cmd.clone())
        .render(&mut file)
        .with_context(|| format!("Failed to render {}", path.display()))
}
