//! Cortex-M NVIC as the interrupt controller

use cortex_m::peripheral::NVIC;
use sercom_hal::{InterruptController, SercomId};

use crate::pac::Interrupt;

/// Interrupt number of a SERCOM instance
pub fn sercom_interrupt(sercom: SercomId) -> Interrupt {
    match sercom {
        SercomId::Sercom0 => Interrupt::SERCOM0,
        SercomId::Sercom1 => Interrupt::SERCOM1,
        SercomId::Sercom2 => Interrupt::SERCOM2,
        SercomId::Sercom3 => Interrupt::SERCOM3,
        SercomId::Sercom4 => Interrupt::SERCOM4,
        SercomId::Sercom5 => Interrupt::SERCOM5,
    }
}

/// NVIC line control
///
/// Holds no reference to the core peripheral, so the driver stays `Send`
/// and can live in a static mutex shared with the interrupt handler.
pub struct Nvic {
    _private: (),
}

impl Nvic {
    /// Create from the NVIC, proving the caller owns it
    pub fn new(_nvic: &mut NVIC) -> Self {
        Self { _private: () }
    }
}

impl InterruptController for Nvic {
    fn enable_interrupt(&mut self, sercom: SercomId) {
        // SAFETY: the handler for this line is installed by the firmware
        // and the driver is fully configured before it is enabled
        unsafe { NVIC::unmask(sercom_interrupt(sercom)) }
    }
}
