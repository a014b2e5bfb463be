//! Completion tone task
//!
//! Pulses the sounder while the arm flag is set. The controller toggles
//! the flag once per second during the done signal, so each armed
//! window produces short beeps rather than a solid tone.

use defmt::*;
use embassy_rp::pwm::Pwm;
use embassy_time::{Duration, Ticker, Timer};
use portable_atomic::Ordering;

use magnetron_drivers::Sounder;

use crate::channels::TONE_ARMED;

/// Arm flag poll interval in milliseconds
const TONE_INTERVAL_MS: u64 = 500;

/// Length of one beep in milliseconds
const TONE_PULSE_MS: u64 = 120;

#[embassy_executor::task]
pub async fn tone_task(mut sounder: Sounder<Pwm<'static>>) {
    info!("Tone task started");

    let mut ticker = Ticker::every(Duration::from_millis(TONE_INTERVAL_MS));

    loop {
        ticker.next().await;

        if TONE_ARMED.load(Ordering::Relaxed) {
            sounder.on();
            Timer::after_millis(TONE_PULSE_MS).await;
            sounder.off();
        }
    }
}
