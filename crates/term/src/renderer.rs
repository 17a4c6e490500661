//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! Frames are compared row by row. Changed spans separated by no more than
//! one board cell of unchanged columns are merged, so a piece shifting by a
//! column repaints as one run instead of many cursor jumps. Glyphs sharing a
//! style are printed as a single string.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Unchanged columns tolerated inside a dirty span before it is split.
/// Equal to the width of one board cell in `GameView`.
pub const SPAN_GAP: u16 = 2;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    painter: Painter,
    prev: Option<FrameBuffer>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            painter: Painter::new(),
            prev: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            EnableMouseCapture
        )?;
        self.prev = None;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.stdout,
            DisableMouseCapture,
            SetAttribute(Attribute::Reset),
            ResetColor,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw (after a terminal resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw `fb` and keep it as the reference for the next diff.
    ///
    /// The caller gets the previous frame's allocation back in `fb`; the
    /// view resizes and clears it before drawing into it again.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        match self.prev.as_ref() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.painter.diff(prev, fb)?
            }
            _ => self.painter.full(fb)?,
        }

        if !self.painter.bytes().is_empty() {
            self.stdout.write_all(self.painter.bytes())?;
            self.stdout.flush()?;
        }

        match self.prev.as_mut() {
            Some(prev) => std::mem::swap(prev, fb),
            None => self.prev = Some(std::mem::replace(fb, FrameBuffer::new(0, 0))),
        }
        Ok(())
    }
}

/// Builds the command bytes for one frame without touching the terminal.
#[derive(Debug, Default)]
pub struct Painter {
    buf: Vec<u8>,
    text: String,
    style: Option<CellStyle>,
    spans: Vec<Range<u16>>,
}

impl Painter {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(16 * 1024),
            ..Self::default()
        }
    }

    /// Output of the last `full` or `diff` call. Empty when nothing changed.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Clear the screen and paint every row.
    pub fn full(&mut self, fb: &FrameBuffer) -> io::Result<()> {
        self.begin();
        queue!(self.buf, terminal::Clear(terminal::ClearType::All))?;
        for y in 0..fb.height() {
            self.span(0, y, fb.row(y))?;
        }
        self.finish()
    }

    /// Paint only the spans of `next` that differ from `prev` (same size).
    pub fn diff(&mut self, prev: &FrameBuffer, next: &FrameBuffer) -> io::Result<()> {
        self.begin();
        let mut spans = std::mem::take(&mut self.spans);
        for y in 0..next.height() {
            let row = next.row(y);
            dirty_spans_into(prev.row(y), row, SPAN_GAP, &mut spans);
            for span in &spans {
                self.span(span.start, y, &row[span.start as usize..span.end as usize])?;
            }
        }
        self.spans = spans;

        if self.buf.is_empty() {
            return Ok(());
        }
        self.finish()
    }

    fn begin(&mut self) {
        self.buf.clear();
        self.text.clear();
        self.style = None;
    }

    fn span(&mut self, x: u16, y: u16, cells: &[Cell]) -> io::Result<()> {
        queue!(self.buf, cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                self.flush_text()?;
                queue_style(&mut self.buf, cell.style)?;
                self.style = Some(cell.style);
            }
            self.text.push(cell.ch);
        }
        self.flush_text()
    }

    fn flush_text(&mut self) -> io::Result<()> {
        if !self.text.is_empty() {
            queue!(self.buf, Print(&self.text))?;
            self.text.clear();
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        queue!(self.buf, SetAttribute(Attribute::Reset), ResetColor)
    }
}

/// Collect the column ranges where `next` differs from `prev` into `out`.
///
/// Two changed runs are merged when at most `gap` unchanged columns separate
/// them. Rows of different length compare only their common prefix, plus
/// the tail of `next`.
pub fn dirty_spans_into(prev: &[Cell], next: &[Cell], gap: u16, out: &mut Vec<Range<u16>>) {
    out.clear();
    let mut open: Option<Range<u16>> = None;

    for (x, cell) in next.iter().enumerate() {
        if prev.get(x) == Some(cell) {
            continue;
        }
        let x = x as u16;
        match open.as_mut() {
            Some(span) if x - span.end <= gap => span.end = x + 1,
            _ => {
                if let Some(done) = open.replace(x..x + 1) {
                    out.push(done);
                }
            }
        }
    }
    out.extend(open);
}

fn queue_style(buf: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
    // Attribute reset also drops colors on some terminals, so it goes first.
    queue!(
        buf,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(color(style.fg)),
        SetBackgroundColor(color(style.bg))
    )?;
    if style.bold {
        queue!(buf, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(buf, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
