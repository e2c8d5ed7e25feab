//! tricalc firmware entry point (nRF52840).
//!
//! Button and blink tasks feed one event channel; the main task owns
//! the dispatcher and drains the channel forever.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use tricalc::config::EVENT_QUEUE_DEPTH;
use tricalc::ui::blink::blink_task;
use tricalc::ui::buttons::{button_task, EventSender};
use tricalc::ui::display::{self, OledSurface};
use tricalc::{ButtonEvent, Dispatcher, InputEvent, Redraw, RgbIndicator};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Presses and blink ticks, in arrival order.
static EVENTS: Channel<CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::task(pool_size = 3)]
async fn button_runner(pin: AnyPin, kind: ButtonEvent, tx: EventSender) -> ! {
    button_task(pin, kind, tx).await
}

#[embassy_executor::task]
async fn blink_runner(tx: EventSender) -> ! {
    blink_task(tx).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let p = embassy_nrf::init(Default::default());
    info!("tricalc starting");

    // RGB LED, active-low: start with every line high (dark).
    let led_pin = |pin: AnyPin| Output::new(pin, Level::High, OutputDrive::Standard);
    let rgb = [
        led_pin(p.P0_03.degrade()),
        led_pin(p.P0_04.degrade()),
        led_pin(p.P0_28.degrade()),
    ];
    let indicator = match RgbIndicator::new(rgb) {
        Ok(indicator) => indicator,
        Err(e) => defmt::panic!("indicator init failed: {}", e),
    };

    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = match display::init(i2c) {
        Ok(oled) => oled,
        Err(e) => defmt::panic!("display init failed: {}", e),
    };

    let mut dispatcher = Dispatcher::new(OledSurface::new(oled), indicator);
    if let Err(e) = dispatcher.start() {
        warn!("First frame failed: {}", e);
    }

    let tx = EVENTS.sender();
    let tasks = [
        spawner.spawn(button_runner(p.P0_11.degrade(), ButtonEvent::Up, tx)),
        spawner.spawn(button_runner(p.P0_12.degrade(), ButtonEvent::Down, tx)),
        spawner.spawn(button_runner(p.P0_24.degrade(), ButtonEvent::Select, tx)),
        spawner.spawn(blink_runner(tx)),
    ];
    for spawned in tasks {
        if spawned.is_err() {
            warn!("Task spawn failed");
        }
    }
    let debounce = dispatcher.debouncer();
    info!(
        "Ready: {} (debounce {} ms, {})",
        dispatcher.state(),
        debounce.window_ms(),
        debounce.scope()
    );

    loop {
        let event = EVENTS.receive().await;
        match dispatcher.handle(event) {
            Ok(Redraw::Full) => info!("{}", dispatcher.state()),
            Ok(_) => {}
            Err(e) => warn!("Redraw after {} failed: {}", event, e),
        }
    }
}
