//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Raw mode plus alternate screen on `enter`, restored on `exit`. Frames
//! are diffed against the previously presented one so a cursor move only
//! rewrites the handful of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
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
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
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

    /// Force the next present to be a full redraw, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a frame, swapping it into internal state.
    ///
    /// The caller keeps one `FrameBuffer` and passes it in every frame;
    /// the previous frame comes back out through the same reference, so
    /// no frame is cloned.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut pen = StylePen::default();

        match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                diff_rows(&prev, fb, &mut self.buf, &mut pen)?;
                self.finish_frame(prev, fb)
            }
            _ => {
                self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
                full_frame(fb, &mut self.buf, &mut pen)?;
                let prev = FrameBuffer::new(fb.width(), fb.height());
                self.finish_frame(prev, fb)
            }
        }
    }

    fn finish_frame(&mut self, mut prev: FrameBuffer, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()?;
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the last style emitted so runs of same-styled cells share one
/// escape sequence.
#[derive(Default)]
struct StylePen {
    current: Option<CellStyle>,
}

impl StylePen {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn full_frame(fb: &FrameBuffer, out: &mut Vec<u8>, pen: &mut StylePen) -> Result<()> {
    for y in 0..fb.height() {
        emit_run(fb, 0, y, fb.width(), out, pen)?;
    }
    Ok(())
}

/// Emit only the changed runs of each row.
fn diff_rows(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
    pen: &mut StylePen,
) -> Result<()> {
    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            emit_run(next, start, y, x - start, out, pen)?;
        }
    }
    Ok(())
}

fn emit_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    out: &mut Vec<u8>,
    pen: &mut StylePen,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        pen.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    #[test]
    fn test_rgb_conversion() {
        let c = Rgb::new(10, 20, 30);
        assert_eq!(
            rgb_to_color(c),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }

    #[test]
    fn test_diff_emits_only_changed_cells() {
        let style = CellStyle::default();
        let prev = FrameBuffer::new(6, 1);
        let mut next = FrameBuffer::new(6, 1);
        for x in 2..=4 {
            next.set(x, 0, Cell { ch: 'X', style });
        }

        let mut out = Vec::new();
        let mut pen = StylePen::default();
        diff_rows(&prev, &next, &mut out, &mut pen).unwrap();

        // Exactly three printed cells, one cursor move.
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches('X').count(), 3);
    }

    #[test]
    fn test_pen_skips_repeated_style() {
        let mut out = Vec::new();
        let mut pen = StylePen::default();
        let style = CellStyle::default();
        pen.apply(&mut out, style).unwrap();
        let after_first = out.len();
        pen.apply(&mut out, style).unwrap();
        assert_eq!(out.len(), after_first);
    }
}
