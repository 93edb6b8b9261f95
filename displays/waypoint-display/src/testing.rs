//! In-memory framebuffer for host tests

use crate::backend::{Bitmap, DisplayError, FrameBuffer, TextBounds, TextMetrics, TextSize};

/// Fixed-cell metrics: 6x8 px per character at scale 1
pub struct CellMetrics;

impl TextMetrics for CellMetrics {
    fn measure_text(&self, text: &str, size: TextSize) -> TextBounds {
        let scale = u16::from(size.scale());
        TextBounds {
            width: text.chars().count() as u16 * 6 * scale,
            height: 8 * scale,
        }
    }
}

/// Framebuffer that records what was drawn
#[derive(Default)]
pub struct RecordingBuffer {
    size: TextSize,
    cursor: (i16, i16),
    pub printed: Vec<(i16, i16, TextSize, String)>,
    pub bitmaps: Vec<(i16, i16, u16, u16)>,
    pub clears: u32,
    pub flushes: u32,
    pub fail_print: bool,
    pub fail_flush: bool,
}

impl RecordingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Printed strings in order
    pub fn texts(&self) -> Vec<&str> {
        self.printed.iter().map(|(_, _, _, t)| t.as_str()).collect()
    }
}

impl TextMetrics for RecordingBuffer {
    fn measure_text(&self, text: &str, size: TextSize) -> TextBounds {
        CellMetrics.measure_text(text, size)
    }
}

impl FrameBuffer for RecordingBuffer {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.printed.clear();
        self.bitmaps.clear();
        self.clears += 1;
        Ok(())
    }

    fn set_text_size(&mut self, size: TextSize) -> Result<(), DisplayError> {
        self.size = size;
        Ok(())
    }

    fn set_cursor(&mut self, x: i16, y: i16) -> Result<(), DisplayError> {
        self.cursor = (x, y);
        Ok(())
    }

    fn print_text(&mut self, text: &str) -> Result<(), DisplayError> {
        if self.fail_print {
            return Err(DisplayError::Communication);
        }
        let (x, y) = self.cursor;
        self.printed.push((x, y, self.size, text.to_string()));
        self.cursor.0 += self.measure_text(text, self.size).width as i16;
        Ok(())
    }

    fn draw_bitmap(&mut self, x: i16, y: i16, bitmap: &Bitmap<'_>) -> Result<(), DisplayError> {
        self.bitmaps.push((x, y, bitmap.width, bitmap.height));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Communication);
        }
        self.flushes += 1;
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (128, 64)
    }
}
