//! Line echo task
//!
//! Echoes every received byte and logs complete lines.

use defmt::*;
use heapless::Vec;

use crate::channels::RX_CHANNEL;
use crate::console::write_bytes;

/// Longest line kept for logging
const LINE_MAX: usize = 64;

/// Echo task - mirrors input back to the terminal
#[embassy_executor::task]
pub async fn echo_task() {
    info!("Echo task started");

    let mut line: Vec<u8, LINE_MAX> = Vec::new();

    loop {
        let byte = RX_CHANNEL.receive().await;

        match byte {
            b'\r' | b'\n' => {
                write_bytes(b"\r\n");
                if !line.is_empty() {
                    info!("line: {=[u8]:a}", line.as_slice());
                    line.clear();
                }
            }
            // Backspace / DEL
            0x08 | 0x7F => {
                if line.pop().is_some() {
                    write_bytes(b"\x08 \x08");
                }
            }
            _ => {
                write_bytes(&[byte]);
                if line.push(byte).is_err() {
                    debug!("line longer than {} bytes, truncated", LINE_MAX);
                }
            }
        }
    }
}
