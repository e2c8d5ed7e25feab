//! SSD1306 OLED display wrapper.

use crate::config::GLYPH_WIDTH;
use crate::error::Error;
use crate::ui::render::TextSurface;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

/// Opaque text: glyph cells are painted background first, so a write
/// replaces whatever was under it.
fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(BinaryColor::On)
        .background_color(BinaryColor::Off)
        .build()
}

/// The OLED seen as a positioned-text surface.
///
/// Writes go to the frame buffer; `flush` sends it over I²C.
pub struct OledSurface<I2C> {
    display: Display<I2C>,
    origin: Point,
}

impl<I2C> OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Display<I2C>) -> Self {
        Self {
            display,
            origin: Point::zero(),
        }
    }
}

impl<I2C> TextSurface for OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), Error> {
        self.display.clear_buffer();
        self.display.flush().map_err(|_| Error::Display)
    }

    fn move_to(&mut self, x: i32, y: i32) -> Result<(), Error> {
        self.origin = Point::new(x, y);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Error> {
        Text::with_baseline(text, self.origin, text_style(), Baseline::Top)
            .draw(&mut self.display)
            .map_err(|_| Error::Display)?;
        // Leave the origin after the text, like a terminal cursor.
        self.origin.x += text.len() as i32 * GLYPH_WIDTH;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.display.flush().map_err(|_| Error::Display)
    }
}
