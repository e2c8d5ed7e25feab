//! User interface subsystem - OLED display, physical buttons, RGB LED.
//!
//! A single dispatcher owns the calculator state and reacts to input
//! events one at a time, redrawing the equation line and the blink
//! cursor on the SSD1306 OLED.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 3 tactile switches (UP, DOWN, SELECT)
//! - **Blink**: periodic tick toggling the cursor

#[cfg(feature = "embedded")]
pub mod blink;
#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod dispatcher;
pub mod input_logic;
pub mod render;

/// Physical button events.
///
///   - UP/DOWN: change the selected field
///   - SELECT: move to the next field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Select,
}

impl ButtonEvent {
    pub const COUNT: usize = 3;

    pub const fn index(self) -> usize {
        match self {
            ButtonEvent::Up => 0,
            ButtonEvent::Down => 1,
            ButtonEvent::Select => 2,
        }
    }
}

/// Everything the dispatcher reacts to, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// A press edge, stamped with the uptime clock in milliseconds.
    Button(ButtonEvent, u64),
    /// Cursor blink period elapsed.
    BlinkTick,
}

/// What a handled event caused on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    /// Press swallowed by debounce; nothing changed.
    Ignored,
    /// Only the cursor line was redrawn.
    Cursor,
    /// Equation, indicator and cursor were redrawn.
    Full,
}
