//! Board-agnostic SERCOM UART console driver
//!
//! This crate contains the driver logic; register access and the clock,
//! pin-mux and interrupt collaborators come in through `sercom-hal` traits:
//!
//! - Baud rate calculation without run-time division
//! - Busy-wait primitives (unbounded and bounded)
//! - Console pin routing and the "active" flag
//! - Reset/configure sequencing
//! - Transmit path and receive interrupt dispatch
//! - Configuration types
//!
//! # Example
//!
//! ```ignore
//! let mut uart = SercomUart::new(regs, clocks, pins, nvic, ClockConfig::default())?;
//! uart.set_rx_callback(on_byte);
//! uart.initialize(true, 115_200);
//! uart.blocking_write(b'>');
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod baud;
pub mod config;
pub mod driver;
pub mod pinmux;
pub mod rx;
pub mod wait;

#[cfg(test)]
mod sim;

pub use baud::compute_baud_register;
pub use config::{
    ClockConfig, ConfigError, UartSettings, DEFAULT_BAUD_RATE, DEFAULT_CLOCK_HZ,
    MAX_CLOCK_HZ,
};
pub use driver::{InitError, InitStage, SercomUart, CONSOLE_SERCOM};
pub use rx::{RxCallback, RxDispatch};
