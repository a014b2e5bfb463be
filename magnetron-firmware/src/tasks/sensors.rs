//! Analog sensor task
//!
//! Polls the cook-power dial and the ambient light sensor at 4 Hz and
//! publishes 10-bit readings to the observation cells. The controller
//! samples the cells on its own tick, so burst noise between ticks
//! never reaches the engine.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use crate::channels::{BRIGHTNESS_RAW, POT_RAW};

/// Sample interval in milliseconds
const SAMPLE_INTERVAL_MS: u64 = 250;

#[embassy_executor::task]
pub async fn sensors_task(
    mut adc: Adc<'static, Async>,
    mut pot: Channel<'static>,
    mut light: Channel<'static>,
) {
    info!("Sensors task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        ticker.next().await;

        // The converter is 12-bit; the dial and lamp maps are scaled
        // for 10-bit readings
        match adc.read(&mut pot).await {
            Ok(raw) => POT_RAW.store(raw >> 2, Ordering::Relaxed),
            Err(e) => warn!("Power dial read failed: {:?}", e),
        }

        match adc.read(&mut light).await {
            Ok(raw) => BRIGHTNESS_RAW.store(raw >> 2, Ordering::Relaxed),
            Err(e) => warn!("Light sensor read failed: {:?}", e),
        }
    }
}
