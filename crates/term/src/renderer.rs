//! TerminalRenderer: writes frames to a terminal.
//!
//! Frames are encoded into a byte buffer with crossterm commands and written
//! in a single call. While the input poller holds the terminal in raw mode a
//! bare `\n` does not return the cursor, so lines end in `\r\n` there and in
//! plain `\n` everywhere else (pipes, files, cooked terminals).

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::Grid;
use crate::engine::FrameSink;
use crate::view::GenerationView;

/// How successive frames are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Clear the screen and draw each frame in place.
    Redraw,
    /// Append frames one after another, without the quit hint.
    Sequence,
}

impl RenderMode {
    pub fn from_sequence_flag(sequence: bool) -> Self {
        if sequence {
            RenderMode::Sequence
        } else {
            RenderMode::Redraw
        }
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    mode: RenderMode,
    /// Output is a terminal in raw mode.
    raw_terminal: bool,
    view: GenerationView,
    lines: Vec<String>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new(mode: RenderMode) -> Self {
        Self::with_writer(io::stdout(), mode)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, mode: RenderMode) -> Self {
        Self {
            out,
            mode,
            raw_terminal: false,
            view: GenerationView::for_sequence(mode == RenderMode::Sequence),
            lines: Vec::new(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Mark the output as a raw-mode terminal: `\r\n` line endings and a
    /// hidden cursor while redrawing.
    ///
    /// Only set this while something restores the terminal on every exit path;
    /// in raw mode Ctrl-C is read as a key instead of killing the process.
    pub fn with_raw_terminal(mut self, raw_terminal: bool) -> Self {
        self.raw_terminal = raw_terminal;
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn line_ending(&self) -> &'static str {
        if self.raw_terminal {
            "\r\n"
        } else {
            "\n"
        }
    }

    fn hides_cursor(&self) -> bool {
        self.raw_terminal && self.mode == RenderMode::Redraw
    }

    /// Hide the cursor while redrawing in place on a raw terminal.
    pub fn enter(&mut self) -> Result<()> {
        if self.hides_cursor() {
            self.buf.clear();
            self.buf.queue(cursor::Hide)?;
            self.flush_buf()?;
        }
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.hides_cursor() {
            self.buf.clear();
            self.buf.queue(cursor::Show)?;
            self.flush_buf()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> FrameSink for TerminalRenderer<W> {
    fn present(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        self.view.render_into(grid, generation, &mut self.lines)?;
        self.buf.clear();
        let line_ending = self.line_ending();
        encode_frame_into(&self.lines, self.mode, line_ending, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Encode one frame into `out` without writing anywhere.
pub fn encode_frame_into(
    lines: &[String],
    mode: RenderMode,
    line_ending: &str,
    out: &mut Vec<u8>,
) -> Result<()> {
    if mode == RenderMode::Redraw {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.queue(cursor::MoveTo(0, 0))?;
    }
    for line in lines {
        out.queue(Print(line))?;
        out.queue(Print(line_ending))?;
    }
    Ok(())
}
