//! Cycle tick task
//!
//! The 1 Hz heartbeat the cook cycle advances on. Every countdown
//! second, dwell tick, and completion-signal toggle derives from this
//! signal, so the engine never reads the clock itself.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

use magnetron_core::config::TICK_PERIOD_MS;

/// Tick signal carrying the running tick count.
///
/// A signal rather than a channel: if the controller falls behind,
/// missed ticks collapse into one rather than queueing a burst.
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));
    let mut count: u32 = 0;

    loop {
        ticker.next().await;
        count = count.wrapping_add(1);
        TICK_SIGNAL.signal(count);
    }
}
