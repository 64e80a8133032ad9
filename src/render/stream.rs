//! Incremental ANSI output for stdout playback.
//!
//! The renderer is fed the player after every transition and writes only
//! what changed since the last call: the prompt when a line starts typing,
//! newly revealed characters, and the line break once a line completes.

use std::io::Write;

use anyhow::Result;

use super::line::{kind_ansi, PROMPT};
use crate::player::TranscriptPlayer;
use crate::theme::{Theme, ANSI_RESET};
use crate::transcript::TranscriptLine;

/// Writes a playback to any `Write` as it progresses.
pub struct StreamRenderer<W: Write> {
    out: W,
    theme: Theme,
    color: bool,
    /// Player generation the counters below belong to
    generation: Option<u64>,
    /// Revealed lines already written in full
    lines_done: usize,
    /// Bytes of the current line's text already written
    bytes_written: usize,
    /// Whether the current line's prefix (color, prompt) has been written
    line_open: bool,
}

impl<W: Write> StreamRenderer<W> {
    pub fn new(out: W, theme: Theme, color: bool) -> Self {
        Self {
            out,
            theme,
            color,
            generation: None,
            lines_done: 0,
            bytes_written: 0,
            line_open: false,
        }
    }

    /// Write whatever changed since the previous call.
    pub fn update(&mut self, player: &TranscriptPlayer) -> Result<()> {
        if self.generation != Some(player.generation()) {
            if self.generation.is_some() && (self.lines_done > 0 || self.line_open) {
                self.close_line()?;
                writeln!(self.out)?;
            }
            self.generation = Some(player.generation());
            self.lines_done = 0;
            self.bytes_written = 0;
        }

        let state = player.state();
        let lines = player.lines();

        while self.lines_done < state.revealed_lines.len() {
            let line = &state.revealed_lines[self.lines_done];
            self.open_line(line)?;
            let rest = &line.text[self.bytes_written.min(line.text.len())..];
            write!(self.out, "{}", rest)?;
            self.close_line()?;
            writeln!(self.out)?;
            self.lines_done += 1;
            self.bytes_written = 0;
        }

        if state.is_typing {
            if let Some(line) = lines.get(state.cursor_index) {
                self.open_line(line)?;
                let partial = &state.partial_text;
                if partial.len() > self.bytes_written {
                    write!(self.out, "{}", &partial[self.bytes_written..])?;
                    self.bytes_written = partial.len();
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// End a partially typed line so following output starts on its own line.
    pub fn finish(&mut self) -> Result<()> {
        if self.line_open {
            self.close_line()?;
            writeln!(self.out)?;
            self.line_open = false;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn open_line(&mut self, line: &TranscriptLine) -> Result<()> {
        if self.line_open {
            return Ok(());
        }
        if self.color {
            write!(self.out, "{}", kind_ansi(line.kind, &self.theme))?;
        }
        if line.kind.is_command() {
            write!(self.out, "{}", PROMPT)?;
        }
        self.line_open = true;
        Ok(())
    }

    fn close_line(&mut self) -> Result<()> {
        if self.line_open && self.color {
            write!(self.out, "{}", ANSI_RESET)?;
        }
        self.line_open = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlayerOptions, Step, TypingCadence};
    use std::time::Duration;

    fn player(lines: Vec<TranscriptLine>, looping: bool) -> TranscriptPlayer {
        TranscriptPlayer::new(
            lines,
            PlayerOptions {
                looping,
                cadence: TypingCadence::fixed(Duration::ZERO),
                ..Default::default()
            },
        )
    }

    fn render_all(player: &mut TranscriptPlayer, color: bool) -> String {
        let mut renderer = StreamRenderer::new(Vec::new(), Theme::default(), color);
        let mut step = player.mount();
        renderer.update(player).unwrap();
        while let Step::Wait(_) = step {
            step = player.tick();
            renderer.update(player).unwrap();
        }
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn streams_plain_transcript() {
        let mut p = player(
            vec![
                TranscriptLine::command("pf add . x").with_delay(500),
                TranscriptLine::success("done").with_delay(200),
            ],
            false,
        );
        assert_eq!(render_all(&mut p, false), "$ pf add . x\ndone\n");
    }

    #[test]
    fn streams_colored_transcript() {
        let mut p = player(vec![TranscriptLine::command("ls")], false);
        assert_eq!(render_all(&mut p, true), "\x1b[36m$ ls\x1b[0m\n");
    }

    #[test]
    fn writes_only_new_characters() {
        let mut p = player(vec![TranscriptLine::output("abc")], false);
        let mut renderer = StreamRenderer::new(Vec::new(), Theme::default(), false);
        p.mount();
        renderer.update(&p).unwrap();
        p.tick();
        renderer.update(&p).unwrap();
        renderer.update(&p).unwrap();
        p.tick();
        renderer.update(&p).unwrap();
        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "ab");
    }

    #[test]
    fn loop_restart_writes_a_blank_separator() {
        let mut p = player(vec![TranscriptLine::output("x")], true);
        let mut renderer = StreamRenderer::new(Vec::new(), Theme::default(), false);
        p.mount();
        renderer.update(&p).unwrap();
        while p.cycles() < 2 {
            p.tick();
            renderer.update(&p).unwrap();
        }
        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "x\n\nx\n");
    }

    #[test]
    fn replacement_mid_line_closes_old_line() {
        let mut p = player(vec![TranscriptLine::output("old")], false);
        let mut renderer = StreamRenderer::new(Vec::new(), Theme::default(), false);
        p.mount();
        p.tick();
        renderer.update(&p).unwrap();
        p.replace_script(vec![TranscriptLine::output("new")]);
        p.tick();
        renderer.update(&p).unwrap();
        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "o\nn");
    }

    #[test]
    fn finish_terminates_open_line() {
        let mut p = player(vec![TranscriptLine::output("abc")], false);
        let mut renderer = StreamRenderer::new(Vec::new(), Theme::default(), false);
        p.mount();
        p.tick();
        renderer.update(&p).unwrap();
        renderer.finish().unwrap();
        renderer.finish().unwrap();
        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "a\n");
    }
}
