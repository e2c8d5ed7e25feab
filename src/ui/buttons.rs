//! GPIO button input.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - UP     - increase the selected field
//!   - DOWN   - decrease the selected field
//!   - SELECT - move to the next field
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! stamps it with the uptime clock and sends an `InputEvent` to the
//! dispatcher.  Bounce filtering happens in the dispatcher against
//! those timestamps.

use crate::config::EVENT_QUEUE_DEPTH;
use crate::ui::{ButtonEvent, InputEvent};
use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::Instant;

pub type EventSender = Sender<'static, CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_DEPTH>;

/// Run a single button loop.
///
/// Waits for the pin to go low (pressed), sends the stamped event,
/// then waits for release before repeating.
pub async fn button_task(pin: AnyPin, button: ButtonEvent, tx: EventSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Falling edge = press (active-low).
        btn.wait_for_falling_edge().await;

        let at_ms = Instant::now().as_millis();
        debug!("Button: {} at {} ms", button, at_ms);
        tx.send(InputEvent::Button(button, at_ms)).await;

        btn.wait_for_rising_edge().await;
    }
}
