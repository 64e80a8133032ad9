//! Integration tests for the command line

use predicates::prelude::*;

use pfdemo::catalog::{code_example, CONTRIBUTIONS, FEATURES, SITE};
use pfdemo::render::render_plain;
use pfdemo::theme::Theme;
use pfdemo::transcript::find_scenario;

use crate::helpers::TestEnv;

fn plain_transcript(id: &str) -> String {
    let scenario = find_scenario(id).expect("scenario exists");
    render_plain(&scenario.script.lines, &Theme::default(), false)
}

// ============================================================================
// play
// ============================================================================

#[test]
fn play_streams_whole_scenario() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["play", "basic", "--speed", "16", "--no-color", "--seed", "3"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), plain_transcript("basic"));
}

#[test]
fn play_looping_scenario_stops_after_cycles() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "hero", "--speed", "16", "--cycles", "1"])
        .assert()
        .success()
        .stdout(plain_transcript("hero"));
}

#[test]
fn play_two_cycles_are_separated_and_end_on_a_newline() {
    let env = TestEnv::new();
    let cycle = plain_transcript("hero");
    env.cmd()
        .args(["play", "hero", "--speed", "16", "--cycles", "2", "--no-color"])
        .assert()
        .success()
        .stdout(format!("{}\n{}", cycle, cycle));
}

#[test]
fn play_rejects_zero_cycles() {
    let env = TestEnv::new();
    for scenario in ["hero", "basic"] {
        env.cmd()
            .args(["play", scenario, "--cycles", "0"])
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("--cycles"));
    }
}

#[test]
fn play_file_script() {
    let env = TestEnv::new();
    let script = env.write(
        "demo.toml",
        r#"
title = "Custom"

[[lines]]
kind = "command"
text = "pf go api"

[[lines]]
kind = "error"
text = "alias not found: api"
delay_ms = 10
"#,
    );

    env.cmd()
        .args(["play", "--speed", "16", "--file"])
        .arg(&script)
        .assert()
        .success()
        .stdout("$ pf go api\nalias not found: api\n");
}

#[test]
fn play_json_script() {
    let env = TestEnv::new();
    let script = env.write(
        "demo.json",
        r##"{"lines": [{"kind": "comment", "text": "# hi"}, {"kind": "success", "text": "ok"}]}"##,
    );

    env.cmd()
        .args(["play", "-s", "16", "-f"])
        .arg(&script)
        .assert()
        .success()
        .stdout("# hi\nok\n");
}

#[test]
fn play_empty_script_prints_nothing() {
    let env = TestEnv::new();
    let script = env.write("empty.toml", "title = \"nothing\"\n");

    env.cmd()
        .args(["play", "--file"])
        .arg(&script)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Script has no lines"));
}

#[test]
fn play_unknown_scenario_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "intro"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Unknown scenario 'intro'"))
        .stderr(predicate::str::contains("hero, basic, advanced, workflow"));
}

#[test]
fn play_missing_file_fails_with_context() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "--file", "/nonexistent/script.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn play_invalid_script_fails() {
    let env = TestEnv::new();
    let script = env.write("bad.toml", "[[lines]]\nkind = \"shout\"\ntext = \"x\"\n");

    env.cmd()
        .args(["play", "--file"])
        .arg(&script)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid script"));
}

#[test]
fn play_rejects_scenario_with_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "hero", "--file", "x.toml"])
        .assert()
        .code(2);
}

// ============================================================================
// scenarios / examples / install / features / about
// ============================================================================

#[test]
fn scenarios_list() {
    let env = TestEnv::new();
    let output = env.cmd().arg("scenarios").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!("scenarios_list", stdout.trim_end());
}

#[test]
fn examples_prints_raw_snippet() {
    let env = TestEnv::new();
    let expected = format!("{}\n", code_example("workflow").unwrap());
    env.cmd()
        .args(["examples", "workflow"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn examples_lists_all_with_titles() {
    let env = TestEnv::new();
    env.cmd()
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic (basic)"))
        .stdout(predicate::str::contains("Advanced (advanced)"))
        .stdout(predicate::str::contains("Workflow (workflow)"))
        .stdout(predicate::str::contains("pf edit"));
}

#[test]
fn examples_unknown_id_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["examples", "expert"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("available: basic, advanced, workflow"));
}

#[test]
fn install_uses_configured_manager() {
    let env = TestEnv::new();
    crate::helpers::write_file(
        &env.config_path(),
        "[install]\ndefault_manager = \"npm\"\n",
    );

    env.cmd()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("$ npm install -g path-fast"))
        .stdout(predicate::str::contains("$ pf add . my-project"));
}

#[test]
fn install_manager_flag_overrides_config() {
    let env = TestEnv::new();
    env.cmd()
        .args(["install", "--manager", "yarn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> 🧶 yarn"))
        .stdout(predicate::str::contains("$ yarn global add path-fast"))
        .stdout(predicate::str::contains("pnpm (recommended)"));
}

#[test]
fn install_rejects_unknown_manager() {
    let env = TestEnv::new();
    env.cmd()
        .args(["install", "--manager", "bun"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bun"));
}

#[test]
fn features_lists_each_feature_with_command() {
    let env = TestEnv::new();
    let output = env.cmd().arg("features").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for feature in &FEATURES {
        assert!(stdout.contains(feature.title), "{}", feature.title);
        assert!(stdout.contains(&format!("   $ {}\n", feature.command)), "{}", feature.command);
    }
}

#[test]
fn about_shows_links_license_and_contributions() {
    let env = TestEnv::new();
    let output = env.cmd().arg("about").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("GitHub   {}", SITE.github)));
    assert!(stdout.contains(&format!("License  MIT ({}/blob/main/LICENSE)", SITE.github)));
    assert!(stdout.contains("Author   Eduardo Nicola Possani"));
    for contribution in &CONTRIBUTIONS {
        assert!(stdout.contains(contribution.description), "{}", contribution.title);
        assert!(stdout.contains(&format!("→ {}", contribution.link)), "{}", contribution.title);
    }
    assert!(stdout.contains("issues/new?template=bug_report.md"));
}

// ============================================================================
// misc
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replay scripted Path-Fast terminal transcripts"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("scenarios"))
        .stdout(predicate::str::contains("features"))
        .stdout(predicate::str::contains("about"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("PF_DEMO_LOG"));
}

#[test]
fn completions_for_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pf-demo"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let env = TestEnv::new();
    crate::helpers::write_file(&env.config_path(), "[install\n");

    env.cmd()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("$ pnpm add -g path-fast"))
        .stderr(predicate::str::contains("using default settings"));
}
