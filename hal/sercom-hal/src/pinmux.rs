//! Pin function multiplexer abstractions
//!
//! Each port pin either follows the GPIO controller or is handed to one of
//! the peripheral functions A-H selected through the PMUX registers.

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
}

impl Port {
    /// Port group index
    pub fn index(self) -> usize {
        match self {
            Port::A => 0,
            Port::B => 1,
        }
    }
}

/// A single port pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    pub port: Port,
    /// Pin number within the port (0-31)
    pub number: u8,
}

impl PinId {
    pub const PA00: Self = Self::new(Port::A, 0);
    pub const PA01: Self = Self::new(Port::A, 1);

    /// Create a pin identifier
    pub const fn new(port: Port, number: u8) -> Self {
        Self { port, number }
    }
}

/// Peripheral multiplexer function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MuxFunction {
    /// External interrupt
    A = 0,
    /// Analog
    B = 1,
    /// SERCOM
    C = 2,
    /// SERCOM-ALT
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl MuxFunction {
    /// Value written to the PMUX nibble
    pub fn pmux_value(self) -> u8 {
        self as u8
    }
}

/// Role assigned to a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinFunction {
    /// Peripheral multiplexing disabled; pin is unconfigured GPIO
    Off,
    /// Pin driven by a peripheral function
    Mux(MuxFunction),
}

/// Pin function multiplexer
///
/// Implementations must accept every assignment; there is no failure path.
pub trait PinFunctionMapper {
    /// Assign a function to a pin
    fn set_pin_function(&mut self, pin: PinId, function: PinFunction);
}
