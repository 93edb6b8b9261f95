//! Framebuffer backend trait
//!
//! Defines the interface the renderers draw through. The firmware implements
//! it on top of an SSD1306 buffered driver; tests record the calls.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Draw list overflowed; some commands were dropped
    BufferOverflow,
}

/// Text scale, matching the 1x/2x/3x sizes of classic OLED libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// Body text, about 6x10 px per character
    #[default]
    Small,
    /// Headline text
    Medium,
    /// Clock digits
    Large,
}

impl TextSize {
    /// Integer scale factor relative to [`TextSize::Small`]
    pub const fn scale(self) -> u8 {
        match self {
            TextSize::Small => 1,
            TextSize::Medium => 2,
            TextSize::Large => 3,
        }
    }
}

/// Measured extent of a rendered string in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextBounds {
    pub width: u16,
    pub height: u16,
}

/// 1-bpp bitmap, row-major, MSB first, rows padded to whole bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bitmap<'a> {
    pub width: u16,
    pub height: u16,
    pub data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Wrap `data` as a bitmap if it is large enough for `width` x `height`
    pub fn new(width: u16, height: u16, data: &'a [u8]) -> Option<Self> {
        let stride = usize::from(width).div_ceil(8);
        if data.len() < stride * usize::from(height) {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }
}

/// Text measurement, used for right-aligned and centred layouts
pub trait TextMetrics {
    /// Pixel bounds of `text` drawn at `size`
    fn measure_text(&self, text: &str, size: TextSize) -> TextBounds;
}

/// Pixel framebuffer driver
///
/// Drawing calls only touch the local buffer; [`FrameBuffer::flush`] pushes
/// it to the panel.
pub trait FrameBuffer: TextMetrics {
    /// Clear the whole buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Select the font scale for subsequent text
    fn set_text_size(&mut self, size: TextSize) -> Result<(), DisplayError>;

    /// Move the text cursor (top-left of the next glyph)
    fn set_cursor(&mut self, x: i16, y: i16) -> Result<(), DisplayError>;

    /// Draw text at the cursor and advance it
    fn print_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Draw a bitmap with its top-left corner at (`x`, `y`)
    fn draw_bitmap(&mut self, x: i16, y: i16, bitmap: &Bitmap<'_>) -> Result<(), DisplayError>;

    /// Send the buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Panel size in pixels (width, height)
    fn dimensions(&self) -> (u16, u16);
}
