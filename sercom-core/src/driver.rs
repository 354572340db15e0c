//! SERCOM UART console driver
//!
//! Owns the console SERCOM's register block and the collaborators needed to
//! bring it up: clock gating, pin routing and the interrupt controller.
//!
//! # Initialisation sequence
//!
//! 1. Wait for any enable/disable to finish synchronising, then disable.
//! 2. Software reset and wait for it to complete. Most registers are
//!    write-protected while enabled or resetting.
//! 3. Optionally route the pins.
//! 4. Enable the bus clock and the core clock channel.
//! 5. Program mode and frame (CTRLA), BAUD, then CTRLB and wait for it to
//!    synchronise.
//! 6. Arm RXC at the peripheral, then unmask the line at the interrupt
//!    controller.
//! 7. Enable and wait for the enable to synchronise.
//!
//! The interrupt is armed before the peripheral is enabled, so no byte is
//! dispatched from a half-configured SERCOM.
//!
//! Every wait spins forever by default. [`SercomUart::try_initialize`] runs
//! the same sequence with bounded waits.

use core::convert::Infallible;

use sercom_hal::regs::{ctrla, ctrlb, intflag, syncbusy};
use sercom_hal::{
    ClockControl, InterruptController, PinFunctionMapper, SercomId, UartTx, UsartRegisters,
};

use crate::baud::compute_baud_register;
use crate::config::{ClockConfig, ConfigError, UartSettings};
use crate::pinmux::PinMux;
use crate::rx::{service_rx, RxCallback, RxDispatch};
use crate::wait::{wait_until, wait_until_bounded};

/// SERCOM instance wired to the console pins
pub const CONSOLE_SERCOM: SercomId = SercomId::Sercom1;

/// CTRLA value for the console: LSB first, TX on pad 0, RX on pad 1,
/// 16x arithmetic oversampling, running in standby, internal clock
pub const CONSOLE_CTRLA: u32 = ctrla::DORD
    | ctrla::txpo(0)
    | ctrla::rxpo(1)
    | ctrla::sampr(0)
    | ctrla::RUNSTDBY
    | ctrla::MODE_USART_INT_CLK;

/// CTRLB value for the console: 8-bit characters, TX and RX enabled
pub const CONSOLE_CTRLB: u32 = ctrlb::chsize(0) | ctrlb::TXEN | ctrlb::RXEN;

/// Synchronisation point in the initialisation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStage {
    /// Pending enable/disable before the peripheral is disabled
    EnableSync,
    /// Software reset (before request, completion, and full settle)
    ResetSync,
    /// CTRLB write applying
    CtrlbSync,
    /// Final enable applying
    EnableConfirm,
}

/// Initialisation errors (bounded variant only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// A synchronisation wait gave up
    Timeout(InitStage),
}

/// Strategy for the synchronisation waits of the init sequence
trait Waiter {
    type Error;

    fn wait<F: FnMut() -> bool>(&mut self, stage: InitStage, done: F) -> Result<(), Self::Error>;
}

/// Spin until done
struct Spin;

impl Waiter for Spin {
    type Error = Infallible;

    fn wait<F: FnMut() -> bool>(&mut self, _stage: InitStage, done: F) -> Result<(), Infallible> {
        wait_until(done);
        Ok(())
    }
}

/// Give up after a fixed number of checks per wait
struct Bounded {
    max_checks: u32,
}

impl Waiter for Bounded {
    type Error = InitError;

    fn wait<F: FnMut() -> bool>(&mut self, stage: InitStage, done: F) -> Result<(), InitError> {
        wait_until_bounded(done, self.max_checks)
            .map(|_| ())
            .map_err(|_| InitError::Timeout(stage))
    }
}

/// Console UART on a single SERCOM instance
///
/// Configuration methods take `&mut self`. The transfer path and the
/// interrupt entry take `&self`, so firmware can share the driver between
/// its main loop and the SERCOM interrupt behind a critical-section mutex.
pub struct SercomUart<R, C, P, I> {
    regs: R,
    clocks: C,
    pins: PinMux<P>,
    irq: I,
    clock: ClockConfig,
    rx: RxDispatch,
}

impl<R, C, P, I> SercomUart<R, C, P, I>
where
    R: UsartRegisters,
    C: ClockControl,
    P: PinFunctionMapper,
    I: InterruptController,
{
    /// Create the driver; the hardware is not touched until [`initialize`]
    ///
    /// Fails if the reference clock is zero or above
    /// [`MAX_CLOCK_HZ`](crate::config::MAX_CLOCK_HZ).
    ///
    /// [`initialize`]: Self::initialize
    pub fn new(
        regs: R,
        clocks: C,
        pins: P,
        irq: I,
        clock: ClockConfig,
    ) -> Result<Self, ConfigError> {
        clock.validate()?;
        Ok(Self {
            regs,
            clocks,
            pins: PinMux::new(pins),
            irq,
            clock,
            rx: RxDispatch::new(),
        })
    }

    /// Reset and configure the SERCOM as an 8N1 UART
    ///
    /// `baud_rate` must be non-zero and below `clock_hz / 16`. Must not run
    /// while the SERCOM interrupt can fire. Hangs if the hardware never
    /// acknowledges a synchronisation.
    pub fn initialize(&mut self, auto_configure_pins: bool, baud_rate: u32) {
        match self.run_init(&mut Spin, auto_configure_pins, baud_rate) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// [`initialize`](Self::initialize) with each wait limited to
    /// `max_checks` polls
    ///
    /// On timeout the sequence stops where it was; the peripheral is left
    /// disabled or partially configured.
    pub fn try_initialize(
        &mut self,
        auto_configure_pins: bool,
        baud_rate: u32,
        max_checks: u32,
    ) -> Result<(), InitError> {
        self.run_init(&mut Bounded { max_checks }, auto_configure_pins, baud_rate)
    }

    /// Validate settings against the reference clock, then initialise
    pub fn apply(&mut self, settings: &UartSettings) -> Result<(), ConfigError> {
        settings.validate(self.clock.clock_hz)?;
        self.initialize(settings.auto_configure_pins, settings.baud_rate);
        Ok(())
    }

    fn run_init<W: Waiter>(
        &mut self,
        waiter: &mut W,
        auto_configure_pins: bool,
        baud_rate: u32,
    ) -> Result<(), W::Error> {
        let sercom = CONSOLE_SERCOM;

        // Disable; registers are read-only while enabled
        waiter.wait(InitStage::EnableSync, || {
            !self.regs.is_syncing(syncbusy::ENABLE)
        })?;
        self.regs.modify_ctrla(|v| v & !ctrla::ENABLE);

        // SWRST reads back once the reset has completed
        waiter.wait(InitStage::ResetSync, || {
            !self.regs.is_syncing(syncbusy::SWRST)
        })?;
        self.regs.modify_ctrla(|v| v | ctrla::SWRST);
        waiter.wait(InitStage::ResetSync, || {
            !self.regs.is_syncing(syncbusy::SWRST)
        })?;
        waiter.wait(InitStage::ResetSync, || {
            !self.regs.is_syncing(syncbusy::SWRST | syncbusy::ENABLE)
        })?;

        #[cfg(feature = "defmt")]
        defmt::trace!("{}: reset complete", sercom);

        if auto_configure_pins {
            self.pins.configure_for_uart();
        }

        self.clocks.enable_bus_clock(sercom);
        self.clocks.enable_core_clock(sercom, self.clock.generator);

        self.regs.write_ctrla(CONSOLE_CTRLA);

        let baud = compute_baud_register(baud_rate, self.clock.clock_hz);
        self.regs.write_baud(baud);

        self.regs.write_ctrlb(CONSOLE_CTRLB);
        waiter.wait(InitStage::CtrlbSync, || {
            !self.regs.is_syncing(syncbusy::CTRLB)
        })?;

        self.regs.write_intenset(intflag::RXC);
        self.irq.enable_interrupt(sercom);

        self.regs.modify_ctrla(|v| v | ctrla::ENABLE);
        waiter.wait(InitStage::EnableConfirm, || {
            !self.regs.is_syncing(syncbusy::ENABLE)
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: UART enabled at {} Bd (BAUD={})", sercom, baud_rate, baud);

        Ok(())
    }

    /// Route the console pins to the SERCOM
    pub fn configure_pins(&mut self) {
        self.pins.configure_for_uart();
    }

    /// Return the console pins to GPIO
    pub fn release_pins(&mut self) {
        self.pins.release_to_gpio();
    }

    /// Whether the console pins are routed to the UART
    ///
    /// Tracks pin routing only; it says nothing about whether the SERCOM is
    /// enabled.
    pub fn is_active(&self) -> bool {
        self.pins.is_active()
    }

    /// Register the byte-received callback (runs in interrupt context)
    pub fn set_rx_callback(&self, callback: RxCallback) {
        self.rx.set(callback);
    }

    /// Drop the byte-received callback; received bytes are discarded
    pub fn clear_rx_callback(&self) {
        self.rx.clear();
    }

    /// True if the transmit buffer can take a byte
    pub fn ready_for_write(&self) -> bool {
        self.regs.flag_set(intflag::DRE)
    }

    /// Load a byte into the transmit buffer without checking readiness
    ///
    /// The caller must have seen [`ready_for_write`](Self::ready_for_write)
    /// return true.
    pub fn nonblocking_write(&self, byte: u8) {
        self.regs.write_data(byte as u16);
    }

    /// Wait for the transmit buffer, then write a byte
    pub fn blocking_write(&self, byte: u8) {
        wait_until(|| self.ready_for_write());
        self.nonblocking_write(byte);
    }

    /// SERCOM interrupt entry
    ///
    /// Reads at most one byte per call and hands it to the registered
    /// callback.
    pub fn on_interrupt(&self) -> Option<u8> {
        service_rx(&self.regs, &self.rx)
    }

    /// Reference clock this driver programs BAUD against
    pub fn clock(&self) -> ClockConfig {
        self.clock
    }
}

impl<R, C, P, I> UartTx for SercomUart<R, C, P, I>
where
    R: UsartRegisters,
    C: ClockControl,
    P: PinFunctionMapper,
    I: InterruptController,
{
    type Error = Infallible;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Infallible> {
        for &byte in data {
            self.blocking_write(byte);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        wait_until(|| self.ready_for_write());
        Ok(())
    }
}

impl<R, C, P, I> embedded_io::ErrorType for SercomUart<R, C, P, I> {
    type Error = Infallible;
}

impl<R, C, P, I> embedded_io::Write for SercomUart<R, C, P, I>
where
    R: UsartRegisters,
    C: ClockControl,
    P: PinFunctionMapper,
    I: InterruptController,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize, Infallible> {
        UartTx::write_blocking(self, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        UartTx::flush(self)
    }
}

impl<R, C, P, I> core::fmt::Write for SercomUart<R, C, P, I>
where
    R: UsartRegisters,
    C: ClockControl,
    P: PinFunctionMapper,
    I: InterruptController,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for &byte in s.as_bytes() {
            self.blocking_write(byte);
        }
        Ok(())
    }
}
