//! Integration tests for the transcript player through the public API

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use pfdemo::player::{
    play_blocking, Driver, Phase, PlaybackOutcome, PlayerOptions, Step, TranscriptPlayer,
    TypingCadence,
};
use pfdemo::render::StreamRenderer;
use pfdemo::theme::Theme;
use pfdemo::transcript::{builtin_scenarios, Script, TranscriptLine};

fn instant_options(looping: bool) -> PlayerOptions {
    PlayerOptions {
        looping,
        cadence: TypingCadence::fixed(Duration::ZERO),
        loop_pause: Duration::ZERO,
        ..Default::default()
    }
}

/// Tick until idle, summing the requested waits.
fn run_virtual(player: &mut TranscriptPlayer) -> Duration {
    let mut total = Duration::ZERO;
    let mut step = player.mount();
    while let Step::Wait(wait) = step {
        total += wait;
        step = player.tick();
    }
    total
}

#[test]
fn every_builtin_scenario_reveals_all_lines() {
    for scenario in builtin_scenarios() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let mut player = TranscriptPlayer::new(scenario.script.lines.clone(), instant_options(false))
            .on_finished(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            });

        run_virtual(&mut player);

        assert_eq!(player.state().revealed_lines, scenario.script.lines, "{}", scenario.id);
        assert_eq!(count.load(Ordering::SeqCst), 1, "{}", scenario.id);
        assert_eq!(player.phase(), Phase::Completed);
    }
}

#[test]
fn virtual_time_is_delays_plus_typing() {
    let lines = vec![
        TranscriptLine::command("pf add . x").with_delay(500),
        TranscriptLine::success("done").with_delay(200),
    ];
    let mut player = TranscriptPlayer::new(
        lines,
        PlayerOptions {
            cadence: TypingCadence::fixed(Duration::from_millis(10)),
            ..Default::default()
        },
    );

    // Pre-delays, then per line one empty-prefix wait plus one per character
    let expected = Duration::from_millis(500 + 200 + 10 * (11 + 5));
    assert_eq!(run_virtual(&mut player), expected);
}

#[test]
fn loop_cycles_render_identically() {
    let lines = vec![
        TranscriptLine::command("pf list"),
        TranscriptLine::output("api → ~/api"),
    ];
    let mut player = TranscriptPlayer::new(lines, instant_options(true));
    let mut renderer = StreamRenderer::new(Vec::new(), Theme::default(), false);

    let mut step = player.mount();
    renderer.update(&player).unwrap();
    while player.cycles() < 3 {
        assert!(step.wait().is_some());
        step = player.tick();
        renderer.update(&player).unwrap();
    }

    let out = String::from_utf8(renderer.into_inner()).unwrap();
    let cycles: Vec<&str> = out.split("\n\n").collect();
    assert_eq!(cycles.len(), 3);
    assert!(cycles.iter().all(|c| c.trim_end() == "$ pf list\napi → ~/api"));
}

#[test]
fn driver_replacement_discards_pending_deadline() {
    let start = Instant::now();
    let old = vec![TranscriptLine::output("old").with_delay(1000)];
    let mut driver = Driver::new(TranscriptPlayer::new(old, instant_options(false)));
    driver.mount(start);
    assert_eq!(driver.time_until_due(start), Some(Duration::from_secs(1)));

    let now = start + Duration::from_millis(10);
    driver.replace_script(vec![TranscriptLine::output("new")], now);
    assert_eq!(driver.time_until_due(now), Some(Duration::ZERO));

    while driver.poll(now) {}
    assert_eq!(driver.player().state().revealed_lines, vec![TranscriptLine::output("new")]);
}

#[test]
fn blocking_playback_of_loaded_script() {
    let script = Script::parse_toml(
        r#"
[[lines]]
kind = "command"
text = "pf go web"

[[lines]]
kind = "success"
text = "opened"
"#,
    )
    .unwrap();
    let mut player = TranscriptPlayer::new(script.lines, instant_options(false));
    let mut renderer = StreamRenderer::new(Vec::new(), Theme::default(), false);
    let cancel = AtomicBool::new(false);

    let outcome = play_blocking(&mut player, &cancel, None, |p| renderer.update(p)).unwrap();

    assert_eq!(outcome, PlaybackOutcome::Finished);
    assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "$ pf go web\nopened\n");
}

#[test]
fn blocking_playback_honours_cancellation() {
    let lines = vec![TranscriptLine::output("never").with_delay(60_000)];
    let mut player = TranscriptPlayer::new(lines, PlayerOptions::default());
    let cancel = AtomicBool::new(true);

    let outcome = play_blocking(&mut player, &cancel, None, |_| Ok(())).unwrap();
    assert_eq!(outcome, PlaybackOutcome::Cancelled);
    assert!(player.state().revealed_lines.is_empty());
}
