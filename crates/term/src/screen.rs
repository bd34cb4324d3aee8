//! The rendering seam used by dialogs and widgets.

use anyhow::Result;

use crate::fb::{CellStyle, FrameBuffer};

/// Drawing surface for one dialog at a time.
pub trait Screen {
    /// Current surface size as `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)` with blanks.
    fn clear_region(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, style: CellStyle);

    /// Draw `text` starting at `(x, y)`.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: CellStyle);

    /// Make everything drawn so far visible.
    fn flush(&mut self) -> Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn size(&self) -> (u16, u16) {
        (**self).size()
    }

    fn clear_region(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, style: CellStyle) {
        (**self).clear_region(x0, y0, x1, y1, style);
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        (**self).draw_text(x, y, text, style);
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

pub(crate) fn clear_fb_region(
    fb: &mut FrameBuffer,
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
    style: CellStyle,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let w = (x1 - x0).saturating_add(1);
    let h = (y1 - y0).saturating_add(1);
    fb.fill_rect(x0, y0, w, h, ' ', style);
}

/// A screen that renders into memory and counts flushes.
///
/// Used to drive dialogs without a live terminal.
#[derive(Debug, Clone)]
pub struct MemoryScreen {
    fb: FrameBuffer,
    flushes: usize,
}

impl MemoryScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            flushes: 0,
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn row_text(&self, y: u16) -> String {
        self.fb.row_text(y)
    }

    /// True if `needle` appears on any single row.
    pub fn contains(&self, needle: &str) -> bool {
        (0..self.fb.height()).any(|y| self.fb.row_text(y).contains(needle))
    }

    /// Position of the first occurrence of `needle`, scanning rows top-down.
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        (0..self.fb.height()).find_map(|y| {
            let row = self.fb.row_text(y);
            row.find(needle)
                .map(|byte_idx| (row[..byte_idx].chars().count() as u16, y))
        })
    }
}

impl Screen for MemoryScreen {
    fn size(&self) -> (u16, u16) {
        (self.fb.width(), self.fb.height())
    }

    fn clear_region(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, style: CellStyle) {
        clear_fb_region(&mut self.fb, x0, y0, x1, y1, style);
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        self.fb.put_str(x, y, text, style);
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Rgb;

    #[test]
    fn clear_region_is_inclusive() {
        let mut screen = MemoryScreen::new(5, 3);
        screen.draw_text(0, 0, "xxxxx", CellStyle::default());
        screen.draw_text(0, 1, "xxxxx", CellStyle::default());
        let style = CellStyle::new(Rgb::BLACK, Rgb::CYAN);
        screen.clear_region(1, 0, 3, 0, style);
        assert_eq!(screen.row_text(0), "x   x");
        assert_eq!(screen.row_text(1), "xxxxx");
        assert_eq!(screen.framebuffer().get(3, 0).unwrap().style, style);
    }

    #[test]
    fn inverted_region_draws_nothing() {
        let mut screen = MemoryScreen::new(3, 1);
        screen.draw_text(0, 0, "abc", CellStyle::default());
        screen.clear_region(2, 0, 1, 0, CellStyle::default());
        assert_eq!(screen.row_text(0), "abc");
    }

    #[test]
    fn find_reports_column_and_row() {
        let mut screen = MemoryScreen::new(10, 3);
        screen.draw_text(4, 2, "OK", CellStyle::default());
        assert_eq!(screen.find("OK"), Some((4, 2)));
        assert!(screen.contains("OK"));
        assert_eq!(screen.find("nope"), None);
    }

    #[test]
    fn flush_is_counted() {
        let mut screen = MemoryScreen::new(1, 1);
        screen.flush().unwrap();
        screen.flush().unwrap();
        assert_eq!(screen.flushes(), 2);
    }
}
