//! TerminalRenderer: flushes styled lines to a real terminal.
//!
//! The drawing API is intentionally small: the views hand over a list of
//! styled lines and every frame is a full redraw. The panels here are a
//! couple dozen short lines, so diffing would buy nothing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::game_view::{Line, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame: clear, then print each line from the top.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in lines.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, y as u16))?;
            for span in &line.0 {
                apply_tone_into(&mut self.buf, span.tone)?;
                self.buf.queue(Print(span.text.as_str()))?;
            }
        }

        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
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

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match tone {
        Tone::Plain => {
            out.queue(SetForegroundColor(Color::Reset))?;
        }
        Tone::Dim => {
            out.queue(SetForegroundColor(Color::Reset))?;
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Tone::Title => {
            out.queue(SetForegroundColor(Color::Cyan))?;
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Tone::Good => {
            out.queue(SetForegroundColor(Color::Green))?;
        }
        Tone::Bad => {
            out.queue(SetForegroundColor(Color::Red))?;
        }
        Tone::Accent => {
            out.queue(SetForegroundColor(Color::Yellow))?;
            out.queue(SetAttribute(Attribute::Bold))?;
        }
    }
    Ok(())
}
