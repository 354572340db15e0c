//! UART serial communication abstractions

/// UART transmitter
///
/// Blocking trait for sending data over a UART interface.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been handed to the hardware or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait until the transmit buffer can accept more data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Fixed console frame format
///
/// The console always runs 8 data bits, no parity and one stop bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameFormat {
    /// Number of data bits per frame
    pub data_bits: u8,
    /// Number of stop bits
    pub stop_bits: u8,
    /// Receiver oversampling factor
    pub oversampling: u8,
}

impl FrameFormat {
    /// 8N1 with 16x oversampling
    pub const EIGHT_N_ONE: Self = Self {
        data_bits: 8,
        stop_bits: 1,
        oversampling: 16,
    };
}

impl Default for FrameFormat {
    fn default() -> Self {
        Self::EIGHT_N_ONE
    }
}
