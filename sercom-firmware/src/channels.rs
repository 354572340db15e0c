//! Interrupt-to-task communication

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Receive queue depth
const RX_CHANNEL_SIZE: usize = 32;

/// Bytes received by the SERCOM interrupt
pub static RX_CHANNEL: Channel<CriticalSectionRawMutex, u8, RX_CHANNEL_SIZE> = Channel::new();
