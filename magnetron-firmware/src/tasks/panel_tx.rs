//! Panel UART transmit task
//!
//! Drains queued screens and writes the changed ones to the panel as
//! clear+line frame sequences. Deduplication happens here rather than
//! in the controller because the abort task also queues a screen.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use magnetron_panel::frame::MAX_FRAME_SIZE;

use crate::channels::SCREEN_CHANNEL;
use crate::display::{encode_screen, Renderer};

#[embassy_executor::task]
pub async fn panel_tx_task(mut tx: BufferedUartTx<'static, UART0>) {
    info!("Panel TX task started");

    let mut renderer = Renderer::new();

    loop {
        let screen = SCREEN_CHANNEL.receive().await;
        if !renderer.needs_repaint(&screen) {
            continue;
        }

        for frame in encode_screen(&screen) {
            let mut buf = [0u8; MAX_FRAME_SIZE];
            match frame.encode(&mut buf) {
                Ok(len) => {
                    if let Err(e) = tx.write_all(&buf[..len]).await {
                        warn!("Panel write failed: {:?}", e);
                        break;
                    }
                }
                Err(e) => warn!("Frame encode failed: {:?}", e),
            }
        }
        trace!("Screen repainted");
    }
}
