//! SSD1306 framebuffer
//!
//! Implements [`FrameBuffer`] on top of the ssd1306 buffered graphics mode.
//! Drawing goes to the RAM buffer; only `flush` touches the I2C bus.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_24_POINT;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use waypoint_display::{Bitmap, DisplayError, FrameBuffer, TextBounds, TextMetrics, TextSize};

/// Concrete panel driver
pub type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered 128x64 OLED with a text cursor
pub struct Oled<I2C> {
    panel: Panel<I2C>,
    size: TextSize,
    cursor: Point,
}

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the panel at `address` and blank it
    pub fn new(i2c: I2C, address: u8) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel.init().map_err(|_| DisplayError::NotInitialized)?;
        panel.clear_buffer();
        panel.flush().map_err(|_| DisplayError::Communication)?;

        Ok(Self {
            panel,
            size: TextSize::Small,
            cursor: Point::zero(),
        })
    }

    fn style(size: TextSize) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(font(size), BinaryColor::On)
    }
}

fn font(size: TextSize) -> &'static MonoFont<'static> {
    match size {
        TextSize::Small => &FONT_6X10,
        TextSize::Medium => &FONT_10X20,
        TextSize::Large => &PROFONT_24_POINT,
    }
}

fn to_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

impl<I2C> TextMetrics for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn measure_text(&self, text: &str, size: TextSize) -> TextBounds {
        let metrics = Self::style(size).measure_string(text, Point::zero(), Baseline::Top);
        let bounds = metrics.bounding_box.size;
        TextBounds {
            width: to_u16(bounds.width),
            height: to_u16(bounds.height),
        }
    }
}

impl<I2C> FrameBuffer for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.panel.clear_buffer();
        self.cursor = Point::zero();
        Ok(())
    }

    fn set_text_size(&mut self, size: TextSize) -> Result<(), DisplayError> {
        self.size = size;
        Ok(())
    }

    fn set_cursor(&mut self, x: i16, y: i16) -> Result<(), DisplayError> {
        self.cursor = Point::new(i32::from(x), i32::from(y));
        Ok(())
    }

    fn print_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let text = Text::with_baseline(text, self.cursor, Self::style(self.size), Baseline::Top);
        self.cursor = text
            .draw(&mut self.panel)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn draw_bitmap(&mut self, x: i16, y: i16, bitmap: &Bitmap<'_>) -> Result<(), DisplayError> {
        let raw = ImageRaw::<BinaryColor>::new(bitmap.data, u32::from(bitmap.width));
        Image::new(&raw, Point::new(i32::from(x), i32::from(y)))
            .draw(&mut self.panel)
            .map_err(|_| DisplayError::Communication)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.panel.flush().map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u16, u16) {
        let size = self.panel.bounding_box().size;
        (to_u16(size.width), to_u16(size.height))
    }
}
