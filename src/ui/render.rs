//! Text rendering of the equation line and the blink cursor.
//!
//! Rendering is written against [`TextSurface`], a minimal
//! positioned-text interface, so it runs unchanged on the OLED and on
//! a recording surface in host tests.

use crate::config::{
    CURSOR_Y, EQUATION_CAPACITY, EQUATION_WIDTH, EQUATION_X, EQUATION_Y, GLYPH_WIDTH,
};
use crate::error::Error;
use crate::state::{CalcState, Field};
use core::fmt::Write;
use heapless::String;

/// Underscore drawn beneath the selected field.
pub const CURSOR_GLYPH: &str = "_";
/// Written over cursor slots that should be empty.
pub const BLANK_GLYPH: &str = " ";

/// A display that can place text at pixel coordinates and overwrite in place.
pub trait TextSurface {
    /// Blank the whole screen.
    fn clear(&mut self) -> Result<(), Error>;

    /// Move the text origin (top-left of the next glyph).
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), Error>;

    /// Draw `text` at the current origin, replacing what was there.
    fn write_text(&mut self, text: &str) -> Result<(), Error>;

    /// Push buffered changes to the panel.
    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// Format `"<A> <op> <B> = <result> "` with two decimals.
pub fn equation_line(state: &CalcState) -> Result<String<EQUATION_CAPACITY>, Error> {
    let mut line = String::new();
    write!(
        line,
        "{} {} {} = {:.2} ",
        state.first(),
        state.operator().symbol(),
        state.second(),
        state.result()
    )?;
    Ok(line)
}

/// X coordinate of the cursor slot under `field`.
///
/// Fields sit every other glyph in the equation line.
pub const fn cursor_x(field: Field) -> i32 {
    EQUATION_X + field.index() as i32 * 2 * GLYPH_WIDTH
}

/// The equation line padded with spaces to `EQUATION_WIDTH` glyphs, so
/// drawing it replaces every glyph of whatever line was there before.
pub fn padded_equation_line(state: &CalcState) -> Result<String<EQUATION_CAPACITY>, Error> {
    let mut line = equation_line(state)?;
    while line.len() < EQUATION_WIDTH {
        line.push(' ').map_err(|_| Error::BufferOverflow)?;
    }
    Ok(line)
}

pub fn draw_equation<S: TextSurface>(surface: &mut S, state: &CalcState) -> Result<(), Error> {
    let line = padded_equation_line(state)?;
    surface.move_to(EQUATION_X, EQUATION_Y)?;
    surface.write_text(&line)
}

/// Redraw all three cursor slots; only the selected one may show the glyph.
pub fn draw_cursor<S: TextSurface>(surface: &mut S, state: &CalcState) -> Result<(), Error> {
    for field in Field::ALL {
        let glyph = if field == state.field() && state.cursor_visible() {
            CURSOR_GLYPH
        } else {
            BLANK_GLYPH
        };
        surface.move_to(cursor_x(field), CURSOR_Y)?;
        surface.write_text(glyph)?;
    }
    Ok(())
}
