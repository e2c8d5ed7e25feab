//! RGB status LED on three GPIO lines.
//!
//! The LED is wired active-low: a line driven low lights its channel.
//! `intensity` works as a polarity flag rather than a brightness: with
//! `intensity = true` the color's channels are driven low (lit) and the
//! rest high; with `intensity = false` every line is inverted.

use crate::error::Error;
use crate::state::Field;
use embedded_hal::digital::{OutputPin, PinState};

/// Named colors the indicator can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Off,
}

impl Color {
    /// Channels making up this color, as `[red, green, blue]`.
    pub const fn channels(self) -> [bool; 3] {
        match self {
            Color::Red => [true, false, false],
            Color::Green => [false, true, false],
            Color::Blue => [false, false, true],
            Color::Yellow => [true, true, false],
            Color::Off => [false, false, false],
        }
    }

    /// Color that marks the selected field.
    pub const fn for_field(field: Field) -> Self {
        match field {
            Field::First => Color::Red,
            Field::Operator => Color::Blue,
            Field::Second => Color::Yellow,
        }
    }
}

/// Line levels, `[red, green, blue]`, for `color` at the given polarity.
pub fn line_levels(color: Color, intensity: bool) -> [PinState; 3] {
    color.channels().map(|on| {
        let high = if on { !intensity } else { intensity };
        PinState::from(high)
    })
}

/// Line levels for independent per-channel flags.
pub fn mixed_levels(red: bool, green: bool, blue: bool) -> [PinState; 3] {
    [red, green, blue].map(|on| PinState::from(!on))
}

/// All lines high: every channel dark.
pub const DARK: [PinState; 3] = [PinState::High; 3];

type RgbPins<P> = [P; 3];

pub struct RgbIndicator<P> {
    rgb: RgbPins<P>,
    // Shadow of what was last written to the lines.
    levels: [PinState; 3],
    color: Color,
    lit: bool,
}

impl<P: OutputPin> RgbIndicator<P> {
    /// Take the `[red, green, blue]` pins and switch the LED off.
    pub fn new(rgb: RgbPins<P>) -> Result<Self, Error> {
        let mut indicator = Self {
            rgb,
            levels: DARK,
            color: Color::Off,
            lit: false,
        };
        indicator.deactivate()?;
        Ok(indicator)
    }

    /// Show one of the named colors.
    pub fn activate(&mut self, color: Color, intensity: bool) -> Result<(), Error> {
        if color == Color::Off {
            return self.deactivate();
        }
        self.drive(line_levels(color, intensity))?;
        self.color = color;
        Ok(())
    }

    /// Set each channel on or off independently.
    pub fn set_color(&mut self, red: bool, green: bool, blue: bool) -> Result<(), Error> {
        self.drive(mixed_levels(red, green, blue))?;
        self.color = match (red, green, blue) {
            (true, false, false) => Color::Red,
            (false, true, false) => Color::Green,
            (false, false, true) => Color::Blue,
            (true, true, false) => Color::Yellow,
            (false, false, false) => Color::Off,
            _ => self.color,
        };
        self.lit = true;
        Ok(())
    }

    /// Drive all lines high.
    pub fn deactivate(&mut self) -> Result<(), Error> {
        self.drive(DARK)?;
        self.color = Color::Off;
        self.lit = false;
        Ok(())
    }

    /// Reflect the selected field: first operand red, operator blue,
    /// second operand yellow.
    pub fn show_field(&mut self, field: Field) -> Result<(), Error> {
        self.activate(Color::for_field(field), true)
    }

    /// Last color requested through `activate`, `set_color` or `deactivate`.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether `set_color` ran since the last `deactivate`.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn levels(&self) -> [PinState; 3] {
        self.levels
    }

    /// Give the pins back.
    pub fn release(self) -> RgbPins<P> {
        self.rgb
    }

    // The shadow follows each line as it lands, so a fault part-way
    // through leaves it matching the pins.
    fn drive(&mut self, levels: [PinState; 3]) -> Result<(), Error> {
        for ((pin, shadow), level) in self.rgb.iter_mut().zip(&mut self.levels).zip(levels) {
            pin.set_state(level).map_err(|_| Error::Indicator)?;
            *shadow = level;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::digital::PinState::{High, Low};

    #[derive(Debug, Default)]
    struct MockPin {
        level: Option<PinState>,
        writes: usize,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.level = Some(Low);
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.level = Some(High);
            self.writes += 1;
            Ok(())
        }
    }

    /// Pin whose driver always reports a fault.
    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = embedded_hal::digital::ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(embedded_hal::digital::ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(embedded_hal::digital::ErrorKind::Other)
        }
    }

    /// Pin that works for a number of writes, then faults.
    struct FlakyPin {
        level: Option<PinState>,
        writes_left: usize,
    }

    impl FlakyPin {
        fn failing_after(writes: usize) -> Self {
            Self {
                level: None,
                writes_left: writes,
            }
        }
    }

    impl ErrorType for FlakyPin {
        type Error = embedded_hal::digital::ErrorKind;
    }

    impl OutputPin for FlakyPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.set_state(Low)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.set_state(High)
        }

        fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
            if self.writes_left == 0 {
                return Err(embedded_hal::digital::ErrorKind::Other);
            }
            self.writes_left -= 1;
            self.level = Some(state);
            Ok(())
        }
    }

    fn indicator() -> RgbIndicator<MockPin> {
        RgbIndicator::new([MockPin::default(), MockPin::default(), MockPin::default()]).unwrap()
    }

    fn physical(ind: RgbIndicator<MockPin>) -> [Option<PinState>; 3] {
        ind.release().map(|p| p.level)
    }

    #[test]
    fn starts_dark() {
        let ind = indicator();
        assert_eq!(ind.color(), Color::Off);
        assert!(!ind.is_lit());
        assert_eq!(physical(ind), [Some(High); 3]);
    }

    #[test]
    fn named_colors_drive_expected_lines() {
        let cases = [
            (Color::Red, [Low, High, High]),
            (Color::Green, [High, Low, High]),
            (Color::Blue, [High, High, Low]),
            (Color::Yellow, [Low, Low, High]),
        ];
        for (color, expected) in cases {
            let mut ind = indicator();
            ind.activate(color, true).unwrap();
            assert_eq!(ind.color(), color);
            assert_eq!(ind.levels(), expected);
            assert_eq!(physical(ind), expected.map(Some));
        }
    }

    #[test]
    fn zero_intensity_inverts_every_line() {
        let cases = [
            (Color::Red, [High, Low, Low]),
            (Color::Green, [Low, High, Low]),
            (Color::Blue, [Low, Low, High]),
            (Color::Yellow, [High, High, Low]),
        ];
        for (color, expected) in cases {
            let mut ind = indicator();
            ind.activate(color, false).unwrap();
            assert_eq!(physical(ind), expected.map(Some));
        }
    }

    #[test]
    fn activate_off_is_deactivate() {
        let mut ind = indicator();
        ind.activate(Color::Red, true).unwrap();
        ind.activate(Color::Off, true).unwrap();
        assert_eq!(ind.color(), Color::Off);
        assert_eq!(ind.levels(), DARK);
    }

    #[test]
    fn set_color_is_active_low_per_channel() {
        let mut ind = indicator();
        ind.set_color(true, false, true).unwrap();
        assert!(ind.is_lit());
        assert_eq!(ind.levels(), [Low, High, Low]);

        ind.set_color(true, true, false).unwrap();
        assert_eq!(ind.color(), Color::Yellow);

        ind.deactivate().unwrap();
        assert!(!ind.is_lit());
        assert_eq!(physical(ind), [Some(High); 3]);
    }

    #[test]
    fn fields_map_to_colors() {
        let mut ind = indicator();
        ind.show_field(Field::First).unwrap();
        assert_eq!(ind.color(), Color::Red);
        ind.show_field(Field::Operator).unwrap();
        assert_eq!(ind.color(), Color::Blue);
        ind.show_field(Field::Second).unwrap();
        assert_eq!(ind.color(), Color::Yellow);
        assert_eq!(ind.levels(), [Low, Low, High]);
    }

    #[test]
    fn every_write_touches_all_three_lines() {
        let mut ind = indicator();
        ind.activate(Color::Blue, true).unwrap();
        let writes = ind.release().map(|p| p.writes);
        assert_eq!(writes, [2, 2, 2]);
    }

    #[test]
    fn pin_failure_is_reported() {
        assert_eq!(
            RgbIndicator::new([BrokenPin, BrokenPin, BrokenPin]).err(),
            Some(Error::Indicator)
        );
    }

    #[test]
    fn partial_write_keeps_shadow_in_step() {
        // Green takes the startup write, then faults on the next one.
        let pins = [
            FlakyPin::failing_after(usize::MAX),
            FlakyPin::failing_after(1),
            FlakyPin::failing_after(usize::MAX),
        ];
        let mut ind = RgbIndicator::new(pins).unwrap();
        assert_eq!(ind.activate(Color::Green, true), Err(Error::Indicator));
        // Red went high before green failed; blue was never reached.
        assert_eq!(ind.levels(), [High, High, High]);

        assert_eq!(ind.activate(Color::Red, true), Err(Error::Indicator));
        assert_eq!(ind.levels(), [Low, High, High]);
        let physical = ind.release().map(|p| p.level);
        assert_eq!(physical, [Some(Low), Some(High), Some(High)]);
    }
}
