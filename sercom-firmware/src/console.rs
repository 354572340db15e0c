//! Console UART shared between tasks and the SERCOM1 interrupt

use core::cell::RefCell;

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use sercom_core::SercomUart;
use sercom_hal_samd21::clock::PowerClocks;
use sercom_hal_samd21::nvic::Nvic;
use sercom_hal_samd21::pac::interrupt;
use sercom_hal_samd21::port::PortMux;
use sercom_hal_samd21::usart::SercomUsart;

use crate::channels::RX_CHANNEL;

/// Concrete console driver
pub type Console = SercomUart<SercomUsart, PowerClocks, PortMux, Nvic>;

/// The console, once installed by `main`
pub static CONSOLE: Mutex<CriticalSectionRawMutex, RefCell<Option<Console>>> =
    Mutex::new(RefCell::new(None));

/// Run `f` with the console, if installed
pub fn with_console<T>(f: impl FnOnce(&mut Console) -> T) -> Option<T> {
    CONSOLE.lock(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Write bytes, one critical section per byte
pub fn write_bytes(data: &[u8]) {
    for &byte in data {
        with_console(|uart| uart.blocking_write(byte));
    }
}

/// Byte-received callback, runs inside the SERCOM1 handler
pub fn on_rx_byte(byte: u8) {
    if RX_CHANNEL.try_send(byte).is_err() {
        warn!("RX queue full, dropping 0x{:02x}", byte);
    }
}

#[interrupt]
fn SERCOM1() {
    CONSOLE.lock(|cell| {
        if let Some(uart) = cell.borrow().as_ref() {
            uart.on_interrupt();
        }
    });
}
