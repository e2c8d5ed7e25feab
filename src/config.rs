//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and layout
//! constants live here so they can be tuned in one place.

use crate::state::Operator;
use crate::ui::input_logic::DebounceScope;

// Input

/// Minimum time between two accepted presses (ms).
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

/// Whether each button keeps its own debounce timestamp or all three
/// share one.  `Shared` lets a press on one button swallow a press on
/// another button that lands inside the window.
pub const DEBOUNCE_SCOPE: DebounceScope = DebounceScope::PerButton;

/// Cursor blink half-period (ms).
pub const BLINK_INTERVAL_MS: u64 = 500;

/// Depth of the input event queue between producer tasks and the dispatcher.
pub const EVENT_QUEUE_DEPTH: usize = 8;

// Startup state

pub const INITIAL_FIRST: u8 = 1;
pub const INITIAL_SECOND: u8 = 1;
pub const INITIAL_OPERATOR: Operator = Operator::Add;

// Display layout (pixels, top-left text origin)

/// Origin of the equation line.
pub const EQUATION_X: i32 = 20;
pub const EQUATION_Y: i32 = 10;

/// Row holding the blink cursor, just beneath the equation.
pub const CURSOR_Y: i32 = 18;

/// Horizontal advance of one glyph (FONT_5X8).
pub const GLYPH_WIDTH: i32 = 5;

/// Panel width of the SSD1306.
pub const DISPLAY_WIDTH: i32 = 128;

/// Glyphs drawn for every equation line; shorter lines are padded with
/// spaces so a redraw wipes the tail of a longer previous line.
/// Worst case is `9 ^ 9 = 387420480.00 ` (21 chars).
pub const EQUATION_WIDTH: usize = 21;

/// Capacity of the formatted equation line.
pub const EQUATION_CAPACITY: usize = 32;

const _: () = assert!(EQUATION_WIDTH <= EQUATION_CAPACITY);
const _: () = assert!(EQUATION_X + EQUATION_WIDTH as i32 * GLYPH_WIDTH <= DISPLAY_WIDTH);

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button SELECT  → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   LED red        → P0.03
//   LED green      → P0.04
//   LED blue       → P0.28
