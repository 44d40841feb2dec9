//! Character framebuffer for headless runs
//!
//! Each cell covers a `scale`×`scale` block of screen pixels; the last
//! write to a cell wins.

use std::fmt;

use glam::IVec2;

use super::{Color, DrawSurface};
use crate::settings::{MAX_SCREEN_H, MAX_SCREEN_W};

#[derive(Debug, Clone)]
pub struct AsciiSurface {
    cols: usize,
    rows: usize,
    scale: i32,
    cells: Vec<char>,
    frames: u64,
}

impl AsciiSurface {
    /// Dimensions beyond the accepted screen maximum are clamped to it.
    pub fn new(screen_width: u32, screen_height: u32, scale: u32) -> Self {
        let scale = scale.clamp(1, MAX_SCREEN_W);
        let cols = screen_width.min(MAX_SCREEN_W).div_ceil(scale) as usize;
        let rows = screen_height.min(MAX_SCREEN_H).div_ceil(scale) as usize;
        Self {
            cols,
            rows,
            scale: scale as i32,
            cells: vec![' '; cols * rows],
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::Black => ' ',
            Color::White => '*',
            Color::Blue => '#',
            Color::Cyan => '+',
            Color::Yellow => '=',
        }
    }

    fn put_cell(&mut self, col: i32, row: i32, ch: char) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }

    fn put(&mut self, pos: IVec2, ch: char) {
        let cell = pos.div_euclid(IVec2::splat(self.scale));
        self.put_cell(cell.x, cell.y, ch);
    }
}

impl DrawSurface for AsciiSurface {
    fn clear(&mut self, color: Color) {
        self.cells.fill(Self::glyph(color));
    }

    fn draw_pixel(&mut self, pos: IVec2, color: Color) {
        self.put(pos, Self::glyph(color));
    }

    fn draw_rect(&mut self, pos: IVec2, size: IVec2, color: Color) {
        let ch = Self::glyph(color);
        for y in pos.y..pos.y + size.y {
            for x in pos.x..pos.x + size.x {
                self.put(IVec2::new(x, y), ch);
            }
        }
    }

    fn draw_text(&mut self, pos: IVec2, text: &str, _color: Color) {
        let start = pos.div_euclid(IVec2::splat(self.scale));
        for (i, ch) in text.chars().enumerate() {
            self.put_cell(start.x + i as i32, start.y, ch);
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

impl fmt::Display for AsciiSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
