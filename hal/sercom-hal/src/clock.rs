//! Clock gating abstractions
//!
//! A SERCOM needs two clocks before its registers respond: the bus clock
//! (register interface) and a generic clock channel (baud generator core).

use crate::SercomId;

/// Generic clock generator feeding a peripheral channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ClockGenerator {
    /// Generator 0, the main CPU clock
    #[default]
    Gclk0 = 0,
    Gclk1 = 1,
    Gclk2 = 2,
    Gclk3 = 3,
}

impl ClockGenerator {
    /// Generator index as written to the clock control register
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Clock subsystem
///
/// Both requests are fire-and-forget: implementations apply them
/// synchronously and cannot fail.
pub trait ClockControl {
    /// Enable the peripheral bus clock for a SERCOM instance
    fn enable_bus_clock(&mut self, sercom: SercomId);

    /// Route a generic clock generator to the SERCOM core clock channel
    fn enable_core_clock(&mut self, sercom: SercomId, generator: ClockGenerator);
}
