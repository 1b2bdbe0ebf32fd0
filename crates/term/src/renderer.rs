//! TerminalRenderer: presents framebuffers on a real terminal.
//!
//! Frames are encoded into a reusable byte buffer and written with a single
//! flush. After the first frame only changed runs of cells are re-sent.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{
        DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use log::{debug, info};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last presented frame; `None` forces a full redraw.
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
    key_releases: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            buf: Vec::with_capacity(32 * 1024),
            key_releases: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    ///
    /// Also enables focus events and asks the terminal to report key releases
    /// when it supports the keyboard enhancement protocol. If setup fails
    /// after raw mode is on, the terminal is restored before returning.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.key_releases = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        let setup = encode_enter_into(&mut self.buf, self.key_releases)
            .and_then(|()| self.flush_buf());
        if let Err(err) = setup {
            let _ = self.exit();
            return Err(err);
        }
        info!("terminal entered (key release events: {})", self.key_releases);
        Ok(())
    }

    /// Restore the terminal to its normal state.
    ///
    /// Safe to call after a failed or partial [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_exit_into(&mut self.buf, self.key_releases)?;
        self.key_releases = false;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode()?;
        flushed?;
        info!("terminal restored");
        Ok(())
    }

    /// Force the next frame to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Present `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents the caller is expected to redraw
    /// completely; this avoids cloning a frame per tick.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.prev.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                debug!("full redraw at {}x{}", fb.width(), fb.height());
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        Ok(())
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

/// Keyboard protocol flags requested on enter.
///
/// Letter keys only report releases when every key is sent as an escape code.
pub const KEY_REPORTING_FLAGS: KeyboardEnhancementFlags =
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        .union(KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES)
        .union(KeyboardEnhancementFlags::REPORT_EVENT_TYPES);

/// Encode the terminal setup sequence into `out`.
pub fn encode_enter_into(out: &mut Vec<u8>, key_releases: bool) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    out.queue(EnableFocusChange)?;
    if key_releases {
        out.queue(PushKeyboardEnhancementFlags(KEY_REPORTING_FLAGS))?;
    }
    Ok(())
}

/// Encode the sequence that undoes [`encode_enter_into`].
pub fn encode_exit_into(out: &mut Vec<u8>, key_releases: bool) -> Result<()> {
    if key_releases {
        out.queue(PopKeyboardEnhancementFlags)?;
    }
    out.queue(DisableFocusChange)?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            put_cell(out, fb.get(x, y).unwrap_or_default(), &mut style)?;
        }
    }
    finish(out)
}

/// Encode only the cells of `next` that differ from `prev` into `out`.
///
/// Both framebuffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for (y, start, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(start, y))?;
        for x in start..start + len {
            put_cell(out, next.get(x, y).unwrap_or_default(), &mut style)?;
        }
    }
    finish(out)
}

fn put_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<CellStyle>) -> Result<()> {
    if *current != Some(cell.style) {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(cell.style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(cell.style.bg)))?;
        if cell.style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if cell.style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        *current = Some(cell.style);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Maximal runs of changed cells per row as `(y, start_x, len)`.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let width = next.width() as usize;
    let mut runs = Vec::new();
    if width == 0 {
        return runs;
    }

    let rows = prev.cells().chunks(width).zip(next.cells().chunks(width));
    for (y, (old, new)) in rows.enumerate() {
        let mut run_start: Option<usize> = None;
        for x in 0..=width {
            let differs = x < width && old[x] != new[x];
            match (run_start, differs) {
                (None, true) => run_start = Some(x),
                (Some(start), false) => {
                    runs.push((y as u16, start as u16, (x - start) as u16));
                    run_start = None;
                }
                _ => {}
            }
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.put_char(x, 0, 'X', style);
        }
        b.put_char(5, 1, 'Y', style);

        assert_eq!(changed_runs(&a, &b), vec![(0, 1, 3), (1, 5, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 4);
        let b = a.clone();
        assert!(changed_runs(&a, &b).is_empty());

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(' '), "no cell glyphs expected, got {text:?}");
    }

    #[test]
    fn enter_requests_release_events_for_every_key() {
        let mut out = Vec::new();
        encode_enter_into(&mut out, true).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[?1049h"));
        // CSI > 11 u: disambiguate (1) | event types (2) | all keys as escapes (8)
        assert_eq!(KEY_REPORTING_FLAGS.bits(), 11);
        assert!(text.contains("\x1b[>11u"));

        out.clear();
        encode_enter_into(&mut out, false).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains("\x1b[>"));
    }

    #[test]
    fn exit_undoes_enter() {
        let mut out = Vec::new();
        encode_exit_into(&mut out, true).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[<1u"));
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }

    #[test]
    fn full_encode_prints_every_glyph() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", style);
        fb.put_str(0, 1, "CD", style);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        for ch in ['A', 'B', 'C', 'D'] {
            assert!(text.contains(ch));
        }
    }
}
