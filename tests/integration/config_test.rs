//! Integration tests for the config subcommands

use predicates::prelude::*;

use pfdemo::Config;

use crate::helpers::{write_file, TestEnv};

#[test]
fn path_follows_env_override() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", env.config_path().display()));
}

#[test]
fn show_prints_defaults_without_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("min_char_ms = 30"))
        .stdout(predicate::str::contains("default_manager = \"pnpm\""));
    assert!(!env.config_path().exists());
}

#[test]
fn init_writes_defaults_once() {
    let env = TestEnv::new();
    env.cmd().args(["config", "init"]).assert().success();

    let content = std::fs::read_to_string(env.config_path()).unwrap();
    assert_eq!(Config::parse(&content).unwrap(), Config::default());

    env.cmd()
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    env.cmd().args(["config", "init", "--force"]).assert().success();
}

#[test]
fn migrate_adds_missing_fields_and_keeps_values() {
    let env = TestEnv::new();
    write_file(&env.config_path(), "# mine\n[player]\nspeed = 3.0\n");

    env.cmd()
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing field(s) in 2 new section(s)"))
        .stdout(predicate::str::contains("+ min_char_ms = 30"))
        .stdout(predicate::str::contains("Config updated successfully."));

    let content = std::fs::read_to_string(env.config_path()).unwrap();
    assert!(content.starts_with("# mine\n"));
    let config = Config::parse(&content).unwrap();
    assert_eq!(config.player.speed, 3.0);
    assert_eq!(config.ui.theme, "default");

    env.cmd()
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn migrate_without_tty_changes_nothing() {
    let env = TestEnv::new();
    write_file(&env.config_path(), "[ui]\ntheme = \"ocean\"\n");

    env.cmd()
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Non-interactive mode"))
        .stdout(predicate::str::contains("No changes made."));

    let content = std::fs::read_to_string(env.config_path()).unwrap();
    assert_eq!(content, "[ui]\ntheme = \"ocean\"\n");
}

#[test]
fn migrate_creates_missing_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Will create with default settings"));

    let content = std::fs::read_to_string(env.config_path()).unwrap();
    assert_eq!(Config::parse(&content).unwrap(), Config::default());
}

#[test]
fn config_speed_applies_to_play() {
    let env = TestEnv::new();
    write_file(
        &env.config_path(),
        "[player]\nspeed = 16.0\nmin_char_ms = 1\nmax_char_ms = 2\n",
    );
    let script = env.write(
        "demo.toml",
        "[[lines]]\nkind = \"output\"\ntext = \"fast\"\ndelay_ms = 50\n",
    );

    env.cmd()
        .args(["play", "--file"])
        .arg(&script)
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout("fast\n");
}
