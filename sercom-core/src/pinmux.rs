//! Console pin routing
//!
//! TX sits on PA00 (SERCOM1 pad 0) and RX on PA01 (SERCOM1 pad 1), both
//! reached through multiplexer function D. The controller owns the
//! "active" flag, which means "pins are routed to the UART" and nothing
//! else; it is independent of whether the SERCOM itself is enabled.

use sercom_hal::{MuxFunction, PinFunction, PinFunctionMapper, PinId};

/// Transmit pin (SERCOM pad 0)
pub const TX_PIN: PinId = PinId::PA00;

/// Receive pin (SERCOM pad 1)
pub const RX_PIN: PinId = PinId::PA01;

/// Multiplexer function connecting the console pins to the SERCOM
pub const SERCOM_FUNCTION: MuxFunction = MuxFunction::D;

/// Console pin-mux controller
pub struct PinMux<P> {
    mapper: P,
    active: bool,
}

impl<P: PinFunctionMapper> PinMux<P> {
    /// Create a controller; pins are assumed unrouted
    pub fn new(mapper: P) -> Self {
        Self {
            mapper,
            active: false,
        }
    }

    /// Route TX/RX to the SERCOM pads
    pub fn configure_for_uart(&mut self) {
        self.set_pin_mux(true);
    }

    /// Return TX/RX to unconfigured GPIO
    pub fn release_to_gpio(&mut self) {
        self.set_pin_mux(false);
    }

    /// Whether the pins are currently routed to the UART
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Access the underlying pin function mapper
    pub fn mapper(&self) -> &P {
        &self.mapper
    }

    fn set_pin_mux(&mut self, enable: bool) {
        if enable {
            let function = PinFunction::Mux(SERCOM_FUNCTION);
            self.mapper.set_pin_function(TX_PIN, function);
            self.mapper.set_pin_function(RX_PIN, function);
        } else {
            self.mapper.set_pin_function(TX_PIN, PinFunction::Off);
            self.mapper.set_pin_function(RX_PIN, PinFunction::Off);
        }
        self.active = enable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Mock mapper tracking the current role of each console pin
    struct MockMapper {
        tx: Option<PinFunction>,
        rx: Option<PinFunction>,
        calls: Vec<(PinId, PinFunction), 16>,
    }

    impl MockMapper {
        fn new() -> Self {
            Self {
                tx: None,
                rx: None,
                calls: Vec::new(),
            }
        }
    }

    impl PinFunctionMapper for MockMapper {
        fn set_pin_function(&mut self, pin: PinId, function: PinFunction) {
            if pin == TX_PIN {
                self.tx = Some(function);
            } else if pin == RX_PIN {
                self.rx = Some(function);
            }
            self.calls.push((pin, function)).unwrap();
        }
    }

    #[test]
    fn test_starts_inactive_without_touching_pins() {
        let mux = PinMux::new(MockMapper::new());
        assert!(!mux.is_active());
        assert!(mux.mapper().calls.is_empty());
    }

    #[test]
    fn test_configure_routes_both_pins() {
        let mut mux = PinMux::new(MockMapper::new());
        mux.configure_for_uart();

        assert!(mux.is_active());
        let sercom = PinFunction::Mux(MuxFunction::D);
        assert_eq!(mux.mapper().tx, Some(sercom));
        assert_eq!(mux.mapper().rx, Some(sercom));
        assert_eq!(
            mux.mapper().calls.as_slice(),
            &[(PinId::PA00, sercom), (PinId::PA01, sercom)]
        );
    }

    #[test]
    fn test_configure_then_release_restores_gpio() {
        let mut mux = PinMux::new(MockMapper::new());
        mux.configure_for_uart();
        mux.release_to_gpio();

        assert!(!mux.is_active());
        assert_eq!(mux.mapper().tx, Some(PinFunction::Off));
        assert_eq!(mux.mapper().rx, Some(PinFunction::Off));
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut once = PinMux::new(MockMapper::new());
        once.configure_for_uart();
        once.release_to_gpio();

        let mut twice = PinMux::new(MockMapper::new());
        twice.configure_for_uart();
        twice.release_to_gpio();
        twice.release_to_gpio();

        assert!(!twice.is_active());
        assert_eq!(twice.mapper().tx, once.mapper().tx);
        assert_eq!(twice.mapper().rx, once.mapper().rx);
    }
}
