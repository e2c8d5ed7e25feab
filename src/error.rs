//! Unified error type for tricalc.
//!
//! We avoid `alloc` - all error variants are fieldless.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
///
/// Arithmetic never fails: division by zero and exponent overflow
/// surface as IEEE-754 `inf`/`NaN` on the display, not as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// I²C transaction or draw call to the display failed.
    Display,

    // Indicator
    /// Driving one of the RGB output lines failed.
    Indicator,

    // Generic
    /// Buffer too small for the formatted text.
    BufferOverflow,
}

// Convenience conversions

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::BufferOverflow
    }
}
