//! SERCOM register block in internal-clock USART mode

use sercom_hal::UsartRegisters;

use crate::pac;
use crate::pac::sercom0::USART;

/// SERCOM1 viewed through its USART register block
///
/// Owning the PAC singleton guarantees nothing else drives the instance.
pub struct SercomUsart {
    sercom: pac::SERCOM1,
}

impl SercomUsart {
    /// Take SERCOM1 for the console
    pub fn sercom1(sercom: pac::SERCOM1) -> Self {
        Self { sercom }
    }

    fn usart(&self) -> &USART {
        self.sercom.usart()
    }
}

// The driver programs whole register values, so every write goes through
// `bits`; the values come from the field constants in `sercom_hal::regs`.
impl UsartRegisters for SercomUsart {
    fn ctrla(&self) -> u32 {
        self.usart().ctrla.read().bits()
    }

    fn write_ctrla(&self, value: u32) {
        self.usart().ctrla.write(|w| unsafe { w.bits(value) });
    }

    fn write_ctrlb(&self, value: u32) {
        self.usart().ctrlb.write(|w| unsafe { w.bits(value) });
    }

    fn write_baud(&self, value: u16) {
        self.usart().baud().write(|w| unsafe { w.bits(value) });
    }

    fn write_intenset(&self, value: u8) {
        self.usart().intenset.write(|w| unsafe { w.bits(value) });
    }

    fn intflag(&self) -> u8 {
        self.usart().intflag.read().bits()
    }

    fn syncbusy(&self) -> u32 {
        self.usart().syncbusy.read().bits()
    }

    fn read_data(&self) -> u16 {
        self.usart().data.read().bits()
    }

    fn write_data(&self, value: u16) {
        self.usart().data.write(|w| unsafe { w.bits(value) });
    }
}
