//! Cancel button task
//!
//! Watches the cancel button and raises the abort flag for the next
//! engine tick. The user-audible parts of an abort cannot wait up to a
//! full second, so the task also silences the tone, pushes the aborted
//! screen, and asks the ranging task to re-prime its trigger line
//! immediately.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;
use portable_atomic::Ordering;

use magnetron_panel::Screen;

use crate::channels::{ABORT_PENDING, RANGE_REPRIME, SCREEN_CHANNEL, TONE_ARMED};

/// Cancel button configuration
pub struct AbortConfig {
    /// Debounce settle time in milliseconds
    pub debounce_ms: u64,
}

impl Default for AbortConfig {
    fn default() -> Self {
        Self { debounce_ms: 30 }
    }
}

#[embassy_executor::task]
pub async fn abort_task(mut button: Input<'static>, config: AbortConfig) {
    info!("Abort task started");

    loop {
        // Active low with the pull-up
        button.wait_for_falling_edge().await;

        Timer::after_millis(config.debounce_ms).await;
        if button.is_high() {
            // Bounce, not a press
            continue;
        }

        info!("Cancel button pressed");
        ABORT_PENDING.store(true, Ordering::Relaxed);
        TONE_ARMED.store(false, Ordering::Relaxed);
        RANGE_REPRIME.store(true, Ordering::Relaxed);

        // Acknowledge on the panel ahead of the tick
        if SCREEN_CHANNEL.try_send(Screen::aborted()).is_err() {
            warn!("Screen channel full, dropping abort screen");
        }

        // One abort per press
        button.wait_for_high().await;
    }
}
