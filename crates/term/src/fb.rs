//! Framebuffer and drawing primitives for terminal rendering.
//!
//! The framebuffer is the drawing surface: a grid of styled character cells.
//! Drawing calls clip silently at the edges.

pub use crate::types::Rgb;

/// Terminal cells are about twice as tall as they are wide; circle math
/// divides horizontal distances by this factor so markers look round.
pub const COLUMN_ASPECT: f32 = 2.0;

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Row `y` as a string of glyphs (empty when out of range).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Stroke a horizontal line of `len` cells starting at (x, y).
    ///
    /// The line is translucent: each cell keeps its background and the glyph
    /// color is that background darkened by `shade` percent. Crossing a
    /// vertical line produces a junction glyph.
    pub fn stroke_hline(&mut self, x: u16, y: u16, len: u16, shade: u8) {
        for dx in 0..len {
            self.stroke_cell(x.saturating_add(dx), y, '─', shade);
        }
    }

    /// Stroke a vertical line of `len` cells starting at (x, y).
    ///
    /// See [`FrameBuffer::stroke_hline`].
    pub fn stroke_vline(&mut self, x: u16, y: u16, len: u16, shade: u8) {
        for dy in 0..len {
            self.stroke_cell(x, y.saturating_add(dy), '│', shade);
        }
    }

    fn stroke_cell(&mut self, x: u16, y: u16, glyph: char, shade: u8) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        let cell = &mut self.cells[i];
        let crosses = matches!((cell.ch, glyph), ('│', '─') | ('─', '│') | ('┼', _));
        cell.ch = if crosses { '┼' } else { glyph };
        cell.style.fg = cell.style.bg.darken(shade);
        cell.style.bold = false;
        cell.style.dim = false;
    }

    /// Fill every cell whose center lies within `radius` rows of (cx, cy).
    ///
    /// Coordinates are in cell units (a cell spans [x, x+1)). Horizontal
    /// distances are scaled by [`COLUMN_ASPECT`].
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        let reach_x = radius * COLUMN_ASPECT;
        let x0 = (cx - reach_x).floor().max(0.0) as u16;
        let x1 = (cx + reach_x).ceil().max(0.0) as u16;
        let y0 = (cy - radius).floor().max(0.0) as u16;
        let y1 = (cy + radius).ceil().max(0.0) as u16;
        let style = CellStyle::new(Rgb::new(255, 255, 255), color);
        let r2 = radius * radius;

        for y in y0..=y1.min(self.height.saturating_sub(1)) {
            for x in x0..=x1.min(self.width.saturating_sub(1)) {
                let dx = (x as f32 + 0.5 - cx) / COLUMN_ASPECT;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put_char(x, y, ' ', style);
                }
            }
        }
    }

    /// Write `text` centered on column `cx`, keeping each cell's background.
    pub fn put_str_centered(&mut self, cx: u16, y: u16, text: &str, fg: Rgb, bold: bool) {
        let len = text.chars().count() as u16;
        let mut x = cx.saturating_sub(len / 2);
        for ch in text.chars() {
            if let Some(i) = self.idx(x, y) {
                let cell = &mut self.cells[i];
                cell.ch = ch;
                cell.style.fg = fg;
                cell.style.bold = bold;
                cell.style.dim = false;
            }
            x = x.saturating_add(1);
        }
    }

    /// Copy `src` into this framebuffer with its top-left corner at (x, y).
    pub fn blit(&mut self, src: &FrameBuffer, x: u16, y: u16) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                if let Some(cell) = src.get(sx, sy) {
                    self.set(x.saturating_add(sx), y.saturating_add(sy), cell);
                }
            }
        }
    }
}
