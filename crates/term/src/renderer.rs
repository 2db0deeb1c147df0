//! TerminalRenderer: raw-mode session and frame flushing.
//!
//! The terminal is a scoped resource: `enter` puts it into raw mode on the
//! alternate screen, `exit` restores it. Callers must funnel every exit path
//! through `exit` (see the binary's `main`). Drawing is a full redraw per
//! frame; at one frame per clock fire that is plenty.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    /// Enable raw mode and switch to the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    /// Restore the terminal to cooperative mode.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame.
    ///
    /// Raw mode does not translate line feeds, so each frame line is emitted
    /// with an explicit carriage return.
    pub fn draw(&mut self, frame: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf
            .queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        for line in frame.lines() {
            self.buf.queue(Print(line))?;
            self.buf.queue(Print("\r\n"))?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
