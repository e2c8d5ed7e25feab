//! tricalc - a three-button calculator.
//!
//! Two single-digit operands and one of `+ - * / ^` are edited with
//! UP / DOWN / SELECT buttons; the equation and its result are shown on
//! an SSD1306 OLED, and an RGB LED tells which field is selected.
//!
//! Everything outside the hardware tasks is plain logic that runs on the
//! host: `cargo test` needs no target or probe.
//!
//! Note: The embedded binary (`src/main.rs`, feature `embedded`) builds
//! on this library and adds the GPIO, I²C and timer tasks.

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Calculator core
// ═══════════════════════════════════════════════════════════════════════════

pub mod calc;
pub mod config;
pub mod error;
pub mod state;

// ═══════════════════════════════════════════════════════════════════════════
// Peripherals seen by the core
// ═══════════════════════════════════════════════════════════════════════════

pub mod indicator;
pub mod ui;

pub use error::Error;
pub use indicator::{Color, RgbIndicator};
pub use state::{CalcState, Field, Operator};
pub use ui::dispatcher::Dispatcher;
pub use ui::render::TextSurface;
pub use ui::{ButtonEvent, InputEvent, Redraw};
