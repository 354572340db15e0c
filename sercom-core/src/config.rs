//! Console configuration types

use sercom_hal::uart::FrameFormat;
use sercom_hal::ClockGenerator;

/// Reference clock of the console SERCOM (GCLK0 at full CPU speed)
pub const DEFAULT_CLOCK_HZ: u32 = 48_000_000;

/// Highest supported reference clock (SAMD21 GCLK maximum)
///
/// Above this the baud fold overflows its 32-bit intermediates.
pub const MAX_CLOCK_HZ: u32 = 48_000_000;

/// Default console baud rate
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Baud rate of zero
    ZeroBaud,
    /// Reference clock of zero
    ZeroClock,
    /// Reference clock above [`MAX_CLOCK_HZ`]
    ClockTooHigh,
    /// Baud rate at or above clock / oversampling; BAUD would underflow
    BaudTooHigh,
}

/// Reference clock feeding the SERCOM core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Core clock frequency in Hz
    pub clock_hz: u32,
    /// Generator routed to the core clock channel
    pub generator: ClockGenerator,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            generator: ClockGenerator::Gclk0,
        }
    }
}

impl ClockConfig {
    /// Clock from generator 0 at the given frequency
    pub const fn gclk0(clock_hz: u32) -> Self {
        Self {
            clock_hz,
            generator: ClockGenerator::Gclk0,
        }
    }

    /// Check the frequency is one the baud calculator supports
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_clock(self.clock_hz)
    }
}

fn check_clock(clock_hz: u32) -> Result<(), ConfigError> {
    if clock_hz == 0 {
        return Err(ConfigError::ZeroClock);
    }
    if clock_hz > MAX_CLOCK_HZ {
        return Err(ConfigError::ClockTooHigh);
    }
    Ok(())
}

/// Console UART settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartSettings {
    /// Baud rate in bits per second
    pub baud_rate: u32,
    /// Route the TX/RX pins to the SERCOM during initialisation
    pub auto_configure_pins: bool,
}

impl Default for UartSettings {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            auto_configure_pins: true,
        }
    }
}

impl UartSettings {
    /// Settings with the given baud rate and pin routing enabled
    pub const fn new(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            auto_configure_pins: true,
        }
    }

    /// Leave pin routing to the caller
    pub const fn without_pin_config(mut self) -> Self {
        self.auto_configure_pins = false;
        self
    }

    /// Frame format programmed by the driver
    pub fn frame(&self) -> FrameFormat {
        FrameFormat::EIGHT_N_ONE
    }

    /// Check the settings against a reference clock
    pub fn validate(&self, clock_hz: u32) -> Result<(), ConfigError> {
        if self.baud_rate == 0 {
            return Err(ConfigError::ZeroBaud);
        }
        check_clock(clock_hz)?;
        let oversampling = self.frame().oversampling as u64;
        if self.baud_rate as u64 * oversampling >= clock_hz as u64 {
            return Err(ConfigError::BaudTooHigh);
        }
        Ok(())
    }
}
