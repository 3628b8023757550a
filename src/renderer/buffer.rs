//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be
//! displayed on the terminal. The shell and slide views draw into it; the
//! diff renderer compares it against the previous frame.
//!
//! Flat `Vec<Cell>` storage with row-major indexing. Wide characters (emoji)
//! occupy two cells, the second marked with a continuation cell (char = 0).

use crate::text::{char_width, string_width};
use crate::types::{Attr, BorderStyle, Cell, Rect, Rgba};

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let size = width as usize * height as usize;
        let cell = Cell {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg,
            attrs: Attr::NONE,
        };
        Self {
            width,
            height,
            cells: vec![cell; size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Full buffer bounds.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Collect the visible text of one row (for tests).
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            let cell = &self.cells[self.index(x, y)];
            if cell.char == 0 {
                continue; // continuation of a wide glyph
            }
            if let Some(c) = char::from_u32(cell.char) {
                out.push(c);
            }
        }
        out
    }

    /// Check whether the given text appears anywhere in the buffer (for tests).
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// Returns true if the cell was set.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if let Some(clip) = clip {
            if !clip.contains(x, y) {
                return false;
            }
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];

        // Alpha blend background if not opaque
        let blended_bg = if bg.is_opaque() || bg.is_terminal_default() || bg.is_ansi() {
            bg
        } else {
            Rgba::blend(bg, cell.bg)
        };

        cell.char = char;
        cell.fg = fg;
        cell.bg = blended_bg;
        cell.attrs = attrs;

        true
    }

    /// Fill a rectangle with a background color.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba) {
        let x2 = rect.x.saturating_add(rect.width).min(self.width);
        let y2 = rect.y.saturating_add(rect.height).min(self.height);
        if x2 <= rect.x || y2 <= rect.y {
            return;
        }

        let is_opaque = bg.is_opaque() || bg.is_terminal_default() || bg.is_ansi();

        for row in rect.y..y2 {
            let row_start = self.index(rect.x, row);
            let row_end = self.index(x2, row);
            for cell in &mut self.cells[row_start..row_end] {
                if is_opaque {
                    cell.bg = bg;
                } else {
                    cell.bg = Rgba::blend(bg, cell.bg);
                }
                cell.char = b' ' as u32;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw a single character.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        char: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);
        self.set_cell(x, y, char as u32, fg, bg, attrs, clip)
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells used (handles wide characters).
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let cw = char_width(ch);
            if cw == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, fg, bg, attrs, clip) {
                // Wide glyph: mark next cell as continuation
                if cw == 2 && col + 1 < self.width {
                    if let Some(next) = self.get_mut(col + 1, y) {
                        if clip.map_or(true, |c| c.contains(col + 1, y)) {
                            next.char = 0;
                            next.fg = fg;
                            if !bg.is_transparent() {
                                next.bg = Rgba::blend(bg, next.bg);
                            }
                            next.attrs = attrs;
                        }
                    }
                }
            }

            col += cw as u16;
        }

        col.saturating_sub(x)
    }

    /// Draw text centered within a width.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
    ) -> u16 {
        let text_width = string_width(text);
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, None);
        }
        let offset = ((width as usize - text_width) / 2) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, None)
    }

    /// Draw text right-aligned within a width.
    pub fn draw_text_right(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
    ) -> u16 {
        let text_width = string_width(text);
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, None);
        }
        let offset = (width as usize - text_width) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, None)
    }

    /// Draw a border around a rectangle.
    pub fn draw_border(&mut self, rect: Rect, style: BorderStyle, color: Rgba, bg: Option<Rgba>) {
        if rect.width < 2 || rect.height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let x2 = rect.x + rect.width - 1;
        let y2 = rect.y + rect.height - 1;

        self.draw_char(rect.x, rect.y, tl, color, bg, Attr::NONE, None);
        self.draw_char(x2, rect.y, tr, color, bg, Attr::NONE, None);
        self.draw_char(x2, y2, br, color, bg, Attr::NONE, None);
        self.draw_char(rect.x, y2, bl, color, bg, Attr::NONE, None);

        for col in (rect.x + 1)..x2 {
            self.draw_char(col, rect.y, horiz, color, bg, Attr::NONE, None);
            self.draw_char(col, y2, horiz, color, bg, Attr::NONE, None);
        }
        for row in (rect.y + 1)..y2 {
            self.draw_char(rect.x, row, vert, color, bg, Attr::NONE, None);
            self.draw_char(x2, row, vert, color, bg, Attr::NONE, None);
        }
    }

    /// Draw a horizontal line.
    pub fn draw_hline(&mut self, x: u16, y: u16, width: u16, char: char, color: Rgba) {
        for col in x..x.saturating_add(width).min(self.width) {
            self.draw_char(col, y, char, color, None, Attr::NONE, None);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_default_cells() {
        let buf = FrameBuffer::new(4, 3);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.get(3, 2).unwrap().char, b' ' as u32);
        assert!(buf.get(4, 0).is_none());
    }

    #[test]
    fn test_draw_text_and_row_text() {
        let mut buf = FrameBuffer::new(10, 2);
        buf.draw_text(1, 0, "hi", Rgba::WHITE, None, Attr::NONE, None);
        assert_eq!(buf.row_text(0).trim_end(), " hi");
        assert!(buf.contains_text("hi"));
    }

    #[test]
    fn test_draw_text_wide_glyph_continuation() {
        let mut buf = FrameBuffer::new(10, 1);
        let used = buf.draw_text(0, 0, "🧟x", Rgba::WHITE, None, Attr::NONE, None);
        assert_eq!(used, 3);
        assert_eq!(buf.get(1, 0).unwrap().char, 0, "continuation marker");
        assert_eq!(buf.get(2, 0).unwrap().char, 'x' as u32);
    }

    #[test]
    fn test_draw_text_clipped_at_edge() {
        let mut buf = FrameBuffer::new(4, 1);
        buf.draw_text(2, 0, "abcdef", Rgba::WHITE, None, Attr::NONE, None);
        assert_eq!(buf.row_text(0).trim_end(), "  ab");
    }

    #[test]
    fn test_draw_text_centered() {
        let mut buf = FrameBuffer::new(11, 1);
        buf.draw_text_centered(0, 0, 11, "abc", Rgba::WHITE, None, Attr::NONE);
        assert_eq!(buf.row_text(0).trim_end(), "    abc");
    }

    #[test]
    fn test_fill_rect_sets_bg() {
        let mut buf = FrameBuffer::new(6, 4);
        let bg = Rgba::rgb(1, 2, 3);
        buf.fill_rect(Rect::new(1, 1, 2, 2), bg);
        assert_eq!(buf.get(1, 1).unwrap().bg, bg);
        assert_eq!(buf.get(2, 2).unwrap().bg, bg);
        assert_ne!(buf.get(0, 0).unwrap().bg, bg);
    }

    #[test]
    fn test_draw_border_corners() {
        let mut buf = FrameBuffer::new(6, 4);
        buf.draw_border(Rect::new(0, 0, 6, 4), BorderStyle::Rounded, Rgba::WHITE, None);
        assert_eq!(buf.get(0, 0).unwrap().char, '╭' as u32);
        assert_eq!(buf.get(5, 0).unwrap().char, '╮' as u32);
        assert_eq!(buf.get(0, 3).unwrap().char, '╰' as u32);
        assert_eq!(buf.get(5, 3).unwrap().char, '╯' as u32);
    }

    #[test]
    fn test_set_cell_clip() {
        let mut buf = FrameBuffer::new(6, 4);
        let clip = Rect::new(0, 0, 2, 2);
        assert!(!buf.set_cell(3, 3, 'x' as u32, Rgba::WHITE, Rgba::TRANSPARENT, Attr::NONE, Some(&clip)));
        assert!(buf.set_cell(1, 1, 'x' as u32, Rgba::WHITE, Rgba::TRANSPARENT, Attr::NONE, Some(&clip)));
    }
}
