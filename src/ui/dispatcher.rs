//! Input dispatcher - the single owner of the calculator state.
//!
//! Producer tasks (buttons, blink ticker) only send [`InputEvent`]s;
//! the dispatcher consumes them strictly in arrival order, so every
//! mutation runs to completion before the next one starts.

use crate::config::{DEBOUNCE_SCOPE, DEBOUNCE_WINDOW_MS};
use crate::error::Error;
use crate::indicator::{Color, RgbIndicator};
use crate::state::CalcState;
use crate::ui::input_logic::Debouncer;
use crate::ui::render::{draw_cursor, draw_equation, TextSurface};
use crate::ui::{ButtonEvent, InputEvent, Redraw};
use embedded_hal::digital::OutputPin;

pub struct Dispatcher<S, P> {
    state: CalcState,
    surface: S,
    indicator: RgbIndicator<P>,
    debouncer: Debouncer,
}

impl<S: TextSurface, P: OutputPin> Dispatcher<S, P> {
    /// Dispatcher with power-on state and the configured debounce.
    pub fn new(surface: S, indicator: RgbIndicator<P>) -> Self {
        Self::with_parts(
            CalcState::default(),
            surface,
            indicator,
            Debouncer::new(DEBOUNCE_SCOPE, DEBOUNCE_WINDOW_MS),
        )
    }

    pub fn with_parts(
        state: CalcState,
        surface: S,
        indicator: RgbIndicator<P>,
        debouncer: Debouncer,
    ) -> Self {
        Self {
            state,
            surface,
            indicator,
            debouncer,
        }
    }

    /// Clear the screen, light the indicator and draw the first frame.
    pub fn start(&mut self) -> Result<(), Error> {
        self.surface.clear()?;
        self.indicator.activate(Color::Red, true)?;
        self.redraw_full()
    }

    /// Apply one event and redraw what it changed.
    pub fn handle(&mut self, event: InputEvent) -> Result<Redraw, Error> {
        match event {
            InputEvent::Button(button, at_ms) => {
                if !self.debouncer.accept(button, at_ms) {
                    return Ok(Redraw::Ignored);
                }
                match button {
                    ButtonEvent::Up => self.state.increase(),
                    ButtonEvent::Down => self.state.decrease(),
                    ButtonEvent::Select => self.state.select_next(),
                }
                self.redraw_full()?;
                Ok(Redraw::Full)
            }
            InputEvent::BlinkTick => {
                self.state.toggle_cursor();
                self.redraw_cursor()?;
                Ok(Redraw::Cursor)
            }
        }
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn indicator(&self) -> &RgbIndicator<P> {
        &self.indicator
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    fn redraw_full(&mut self) -> Result<(), Error> {
        draw_equation(&mut self.surface, &self.state)?;
        self.indicator.show_field(self.state.field())?;
        draw_cursor(&mut self.surface, &self.state)?;
        self.surface.flush()
    }

    fn redraw_cursor(&mut self) -> Result<(), Error> {
        draw_cursor(&mut self.surface, &self.state)?;
        self.surface.flush()
    }
}
