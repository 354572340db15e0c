//! Receive dispatch
//!
//! Received bytes are pushed, one per receive-complete interrupt, to a
//! single registered callback. With nothing registered the byte is dropped.

use core::cell::Cell;

use sercom_hal::regs::intflag;
use sercom_hal::UsartRegisters;

/// Byte-received callback
///
/// Runs in interrupt context.
pub type RxCallback = fn(u8);

/// Single-slot callback registration
pub struct RxDispatch {
    callback: Cell<Option<RxCallback>>,
}

impl Default for RxDispatch {
    fn default() -> Self {
        Self::new()
    }
}

impl RxDispatch {
    /// Create an empty slot (bytes are discarded)
    pub const fn new() -> Self {
        Self {
            callback: Cell::new(None),
        }
    }

    /// Register the callback, replacing any previous one
    pub fn set(&self, callback: RxCallback) {
        self.callback.set(Some(callback));
    }

    /// Remove the callback
    pub fn clear(&self) {
        self.callback.set(None);
    }

    /// Hand one byte to the callback
    pub fn dispatch(&self, byte: u8) {
        if let Some(callback) = self.callback.get() {
            callback(byte);
        }
    }
}

/// Service a receive-complete condition
///
/// Reads DATA once if RXC is set, which also clears the flag, and forwards
/// the low byte. Returns the byte, or `None` for an entry without RXC.
pub fn service_rx<R: UsartRegisters>(regs: &R, rx: &RxDispatch) -> Option<u8> {
    if !regs.flag_set(intflag::RXC) {
        return None;
    }
    let byte = regs.read_data() as u8;
    rx.dispatch(byte);
    Some(byte)
}
