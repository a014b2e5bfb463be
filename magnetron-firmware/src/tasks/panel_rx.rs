//! Panel UART receive task
//!
//! Feeds received bytes through the frame parser and forwards key
//! events to the controller. A corrupt frame costs only itself; the
//! parser resynchronizes on the next start byte.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use magnetron_panel::{FrameParser, PanelReport};

use crate::channels::INPUT_CHANNEL;

/// Read chunk size
const RX_BUF_SIZE: usize = 64;

#[embassy_executor::task]
pub async fn panel_rx_task(mut rx: BufferedUartRx<'static, UART0>) {
    info!("Panel RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match PanelReport::from_frame(&frame) {
                            Ok(PanelReport::Key(key)) => {
                                debug!("Key event: {:?}", key);
                                if INPUT_CHANNEL.try_send(key).is_err() {
                                    warn!("Input channel full, dropping key event");
                                }
                            }
                            Err(e) => warn!("Unknown panel frame: {:?}", e),
                        },
                        Ok(None) => {}
                        Err(e) => warn!("Frame error: {:?}", e),
                    }
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Panel UART read error: {:?}", e),
        }
    }
}
