//! SAMD21-specific HAL for the SERCOM UART console
//!
//! Implements the `sercom-hal` traits on the SAMD21 PAC register blocks
//! re-exported by `atsamd-hal`:
//!
//! - [`usart::SercomUsart`] - SERCOM register block in USART mode
//! - [`port::PortMux`] - PORT pin multiplexer
//! - [`clock::PowerClocks`] - PM bus clock masks, GCLK routing via the
//!   HAL's `GenericClockController`
//! - [`nvic::Nvic`] - Cortex-M interrupt controller
//!
//! Clock sources (DFLL48M on GCLK0) are set up beforehand by the
//! `GenericClockController` handed to [`clock::PowerClocks`].

#![no_std]

pub mod clock;
pub mod nvic;
pub mod port;
pub mod usart;

pub use atsamd_hal::pac;

// Re-export shared types from sercom-hal
pub use sercom_hal::SercomId;
