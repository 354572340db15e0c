//! PORT pin multiplexer
//!
//! Each pin has a PINCFG byte (PMUXEN hands the pin to a peripheral) and
//! half of a PMUX byte: even pins use PMUXE, odd pins PMUXO.

use sercom_hal::{PinFunction, PinFunctionMapper, PinId, Port};

use crate::pac;

/// Program one pin through its group's PMUX/PINCFG arrays
///
/// The two port groups have distinct register types in the PAC.
macro_rules! route_pin {
    ($port:expr, $pmux:ident, $pincfg:ident, $pin:expr, $function:expr) => {{
        let number = $pin.number as usize;
        let pincfg = &$port.$pincfg[number];
        match $function {
            PinFunction::Mux(mux) => {
                let value = mux.pmux_value();
                let pmux = &$port.$pmux[number / 2];
                if number % 2 == 0 {
                    pmux.modify(|_, w| unsafe { w.pmuxe().bits(value) });
                } else {
                    pmux.modify(|_, w| unsafe { w.pmuxo().bits(value) });
                }
                pincfg.modify(|_, w| w.pmuxen().set_bit());
            }
            PinFunction::Off => {
                pincfg.modify(|_, w| w.pmuxen().clear_bit());
            }
        }
    }};
}

/// PORT-backed pin function mapper
pub struct PortMux {
    port: pac::PORT,
}

impl PortMux {
    /// Take the PORT peripheral
    pub fn new(port: pac::PORT) -> Self {
        Self { port }
    }
}

impl PinFunctionMapper for PortMux {
    fn set_pin_function(&mut self, pin: PinId, function: PinFunction) {
        match pin.port {
            Port::A => route_pin!(self.port, pmux0_, pincfg0_, pin, function),
            Port::B => route_pin!(self.port, pmux1_, pincfg1_, pin, function),
        }
    }
}
