//! Cursor blink ticker.

use crate::config::BLINK_INTERVAL_MS;
use crate::ui::buttons::EventSender;
use crate::ui::InputEvent;
use defmt::info;
use embassy_time::{Duration, Ticker};

/// Send a `BlinkTick` every `BLINK_INTERVAL_MS`, forever.
pub async fn blink_task(tx: EventSender) -> ! {
    info!("Blink task started ({} ms)", BLINK_INTERVAL_MS);

    let mut ticker = Ticker::every(Duration::from_millis(BLINK_INTERVAL_MS));

    loop {
        ticker.next().await;
        tx.send(InputEvent::BlinkTick).await;
    }
}
