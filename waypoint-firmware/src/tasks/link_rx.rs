//! Bridge UART receive task
//!
//! Parses frames from the BLE bridge and hands them to the tick task.
//! Payloads are decoded later, on the tick task, so this task never touches
//! UI state.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use waypoint_protocol::FrameParser;

use crate::channels::FRAME_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Link RX task - receives and parses frames from the bridge
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => {
                            trace!("Frame type {=u8:#x}, {} bytes", frame.msg_type, frame.payload.len());
                            // Never block the UART on a full channel
                            if FRAME_CHANNEL.try_send(frame).is_err() {
                                warn!("Frame channel full, dropping frame");
                            }
                        }
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
