//! Status stream task
//!
//! Writes one line per status event to the diagnostic UART. The stream
//! is append-only and human-readable; nothing listens back.

use defmt::*;
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{Async, UartTx};
use heapless::Vec;

use crate::channels::STATUS_CHANNEL;

/// Longest status line plus the terminator
const LINE_BUF_SIZE: usize = 32;

#[embassy_executor::task]
pub async fn status_tx_task(mut tx: UartTx<'static, UART1, Async>) {
    info!("Status TX task started");

    loop {
        let event = STATUS_CHANNEL.receive().await;

        let mut line: Vec<u8, LINE_BUF_SIZE> = Vec::new();
        let _ = line.extend_from_slice(event.as_str().as_bytes());
        let _ = line.push(b'\n');

        if let Err(e) = tx.write(&line).await {
            error!("Status write failed: {:?}", e);
        }
    }
}
