//! Ultrasonic ranging task
//!
//! Fires the rangefinder trigger once per second and times the echo
//! pulse. Only the raw pulse width lands in the observation cell; the
//! engine owns the distance conversion and the warning hysteresis.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{with_timeout, Duration, Instant, Ticker, Timer};
use portable_atomic::Ordering;

use magnetron_core::config::TICK_PERIOD_MS;

use crate::channels::{ECHO_PULSE_US, RANGE_REPRIME};

/// Longest credible wait for the echo to start
const ECHO_START_TIMEOUT_MS: u64 = 30;

/// Longest credible echo pulse (the no-object reading is ~38 ms)
const ECHO_PULSE_TIMEOUT_MS: u64 = 60;

#[embassy_executor::task]
pub async fn ranging_task(mut trigger: Output<'static>, mut echo: Input<'static>) {
    info!("Ranging task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    loop {
        ticker.next().await;

        // An abort can land mid-measurement; settle the trigger line
        // before trusting it again
        if RANGE_REPRIME.swap(false, Ordering::Relaxed) {
            trigger.set_low();
            Timer::after_micros(5).await;
        }

        // 10 µs trigger pulse
        trigger.set_low();
        Timer::after_micros(2).await;
        trigger.set_high();
        Timer::after_micros(10).await;
        trigger.set_low();

        let start_window = Duration::from_millis(ECHO_START_TIMEOUT_MS);
        if with_timeout(start_window, echo.wait_for_rising_edge())
            .await
            .is_err()
        {
            warn!("Echo never started, keeping previous reading");
            continue;
        }
        let rise = Instant::now();

        let pulse_window = Duration::from_millis(ECHO_PULSE_TIMEOUT_MS);
        if with_timeout(pulse_window, echo.wait_for_falling_edge())
            .await
            .is_err()
        {
            warn!("Echo never ended, keeping previous reading");
            continue;
        }

        let width_us = rise.elapsed().as_micros() as u32;
        trace!("Echo pulse: {} us", width_us);
        ECHO_PULSE_US.store(width_us, Ordering::Relaxed);
    }
}
