//! SERCOM hardware abstraction layer
//!
//! This crate defines the seams between the UART console driver and the
//! hardware it runs on. Chip-specific crates implement these traits over
//! memory-mapped registers; tests implement them over simulated state.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (sercom-firmware)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sercom-core (driver logic)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sercom-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sercom-hal-samd21 (MMIO)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`regs::UsartRegisters`] - USART register block of one SERCOM instance
//! - [`clock::ClockControl`] - Bus and generic clock gating
//! - [`pinmux::PinFunctionMapper`] - Pin function multiplexer
//! - [`irq::InterruptController`] - Interrupt line enable
//! - [`uart::UartTx`] - Byte stream transmit

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod irq;
pub mod pinmux;
pub mod regs;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use clock::{ClockControl, ClockGenerator};
pub use irq::InterruptController;
pub use pinmux::{MuxFunction, PinFunction, PinFunctionMapper, PinId, Port};
pub use regs::UsartRegisters;
pub use uart::UartTx;

/// SERCOM peripheral instance identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SercomId {
    Sercom0 = 0,
    Sercom1 = 1,
    Sercom2 = 2,
    Sercom3 = 3,
    Sercom4 = 4,
    Sercom5 = 5,
}

impl SercomId {
    /// Instance index as used in clock masks and interrupt numbers
    pub fn index(self) -> u8 {
        self as u8
    }
}
