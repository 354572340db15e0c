//! Simulated SERCOM and collaborators for host tests
//!
//! Every write made through the mocks lands in one shared [`Log`], so tests
//! can check the relative order of register, clock, pin and interrupt
//! operations.

use core::cell::{Cell, RefCell};

use heapless::Vec;
use sercom_hal::regs::{ctrla, intflag, syncbusy};
use sercom_hal::{
    ClockControl, ClockGenerator, InterruptController, PinFunction, PinFunctionMapper, PinId,
    SercomId, UsartRegisters,
};

/// Recorded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Ctrla(u32),
    Ctrlb(u32),
    Baud(u16),
    IntEnSet(u8),
    DataWrite(u16),
    DataRead,
    BusClock(SercomId),
    CoreClock(SercomId, ClockGenerator),
    Pin(PinId, PinFunction),
    IrqEnable(SercomId),
}

pub type Log = RefCell<Vec<Op, 128>>;

pub fn new_log() -> Log {
    RefCell::new(Vec::new())
}

fn record(log: &Log, op: Op) {
    log.borrow_mut().push(op).unwrap();
}

/// Position of the first matching operation
pub fn position<F: Fn(&Op) -> bool>(log: &Log, f: F) -> Option<usize> {
    log.borrow().iter().position(f)
}

/// SERCOM USART register block model
///
/// Synchronisation bits stay busy for `sync_latency` SYNCBUSY reads. The
/// transmit buffer holds one byte which moves to the wire after
/// `tx_latency` INTFLAG reads; writes to a full buffer are ignored, as are
/// writes to enable-protected registers while ENABLE is set.
pub struct SimRegs<'a> {
    log: &'a Log,
    pub ctrla: Cell<u32>,
    pub ctrlb: Cell<u32>,
    pub baud: Cell<u16>,
    pub intenset: Cell<u8>,
    /// SYNCBUSY bits that never clear
    pub stuck: Cell<u32>,
    /// Setting ENABLE leaves SYNCBUSY.ENABLE stuck
    pub enable_never_syncs: Cell<bool>,
    pub sync_latency: Cell<u32>,
    pub tx_latency: Cell<u32>,
    pub syncbusy_reads: Cell<u32>,
    pub data_reads: Cell<u32>,
    pub dropped_writes: Cell<u32>,
    pub protected_writes: Cell<u32>,
    pub transmitted: RefCell<Vec<u8, 64>>,
    swrst_busy: Cell<u32>,
    enable_busy: Cell<u32>,
    ctrlb_busy: Cell<u32>,
    rx_data: Cell<Option<u16>>,
    tx_pending: Cell<Option<u16>>,
    tx_countdown: Cell<u32>,
}

impl<'a> SimRegs<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            ctrla: Cell::new(0),
            ctrlb: Cell::new(0),
            baud: Cell::new(0),
            intenset: Cell::new(0),
            stuck: Cell::new(0),
            enable_never_syncs: Cell::new(false),
            sync_latency: Cell::new(3),
            tx_latency: Cell::new(0),
            syncbusy_reads: Cell::new(0),
            data_reads: Cell::new(0),
            dropped_writes: Cell::new(0),
            protected_writes: Cell::new(0),
            transmitted: RefCell::new(Vec::new()),
            swrst_busy: Cell::new(0),
            enable_busy: Cell::new(0),
            ctrlb_busy: Cell::new(0),
            rx_data: Cell::new(None),
            tx_pending: Cell::new(None),
            tx_countdown: Cell::new(0),
        }
    }

    /// A byte arrives on RX
    pub fn inject_rx(&self, byte: u8) {
        self.rx_data.set(Some(byte as u16));
    }

    /// Byte waiting in the transmit buffer
    pub fn tx_pending(&self) -> Option<u8> {
        self.tx_pending.get().map(|v| v as u8)
    }

    /// Move the pending byte to the wire immediately
    pub fn complete_tx(&self) {
        if let Some(value) = self.tx_pending.take() {
            self.transmitted.borrow_mut().push(value as u8).unwrap();
        }
    }

    fn enabled(&self) -> bool {
        self.ctrla.get() & ctrla::ENABLE != 0
    }

    fn tick_sync(counter: &Cell<u32>, bit: u32, bits: &mut u32) {
        let remaining = counter.get();
        if remaining > 0 {
            *bits |= bit;
            counter.set(remaining - 1);
        }
    }
}

impl UsartRegisters for SimRegs<'_> {
    fn ctrla(&self) -> u32 {
        self.ctrla.get()
    }

    fn write_ctrla(&self, value: u32) {
        record(self.log, Op::Ctrla(value));

        if value & ctrla::SWRST != 0 {
            self.ctrla.set(0);
            self.ctrlb.set(0);
            self.baud.set(0);
            self.intenset.set(0);
            self.swrst_busy.set(self.sync_latency.get());
            return;
        }

        let old = self.ctrla.get();
        if (old ^ value) & ctrla::ENABLE != 0 {
            self.enable_busy.set(self.sync_latency.get());
            if value & ctrla::ENABLE != 0 && self.enable_never_syncs.get() {
                self.stuck.set(self.stuck.get() | syncbusy::ENABLE);
            }
        } else if self.enabled() && value != old {
            // Only ENABLE and SWRST are writable while enabled
            self.protected_writes.set(self.protected_writes.get() + 1);
            return;
        }
        self.ctrla.set(value);
    }

    fn write_ctrlb(&self, value: u32) {
        record(self.log, Op::Ctrlb(value));
        if self.enabled() {
            self.protected_writes.set(self.protected_writes.get() + 1);
            return;
        }
        self.ctrlb.set(value);
        self.ctrlb_busy.set(self.sync_latency.get());
    }

    fn write_baud(&self, value: u16) {
        record(self.log, Op::Baud(value));
        if self.enabled() {
            self.protected_writes.set(self.protected_writes.get() + 1);
            return;
        }
        self.baud.set(value);
    }

    fn write_intenset(&self, value: u8) {
        record(self.log, Op::IntEnSet(value));
        self.intenset.set(self.intenset.get() | value);
    }

    fn intflag(&self) -> u8 {
        if self.tx_pending.get().is_some() {
            let remaining = self.tx_countdown.get();
            if remaining == 0 {
                self.complete_tx();
            } else {
                self.tx_countdown.set(remaining - 1);
            }
        }

        let mut flags = 0;
        if self.tx_pending.get().is_none() {
            flags |= intflag::DRE;
        }
        if self.rx_data.get().is_some() {
            flags |= intflag::RXC;
        }
        flags
    }

    fn syncbusy(&self) -> u32 {
        self.syncbusy_reads.set(self.syncbusy_reads.get() + 1);
        let mut bits = self.stuck.get();
        Self::tick_sync(&self.swrst_busy, syncbusy::SWRST, &mut bits);
        Self::tick_sync(&self.enable_busy, syncbusy::ENABLE, &mut bits);
        Self::tick_sync(&self.ctrlb_busy, syncbusy::CTRLB, &mut bits);
        bits
    }

    fn read_data(&self) -> u16 {
        record(self.log, Op::DataRead);
        self.data_reads.set(self.data_reads.get() + 1);
        self.rx_data.take().unwrap_or(0)
    }

    fn write_data(&self, value: u16) {
        record(self.log, Op::DataWrite(value));
        if self.tx_pending.get().is_some() {
            self.dropped_writes.set(self.dropped_writes.get() + 1);
            return;
        }
        self.tx_pending.set(Some(value));
        self.tx_countdown.set(self.tx_latency.get());
    }
}

/// Clock subsystem recorder
pub struct SimClocks<'a> {
    log: &'a Log,
}

impl<'a> SimClocks<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl ClockControl for SimClocks<'_> {
    fn enable_bus_clock(&mut self, sercom: SercomId) {
        record(self.log, Op::BusClock(sercom));
    }

    fn enable_core_clock(&mut self, sercom: SercomId, generator: ClockGenerator) {
        record(self.log, Op::CoreClock(sercom, generator));
    }
}

/// Pin function mapper recorder tracking current roles
pub struct SimPins<'a> {
    log: &'a Log,
    pub tx: Option<PinFunction>,
    pub rx: Option<PinFunction>,
}

impl<'a> SimPins<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            tx: None,
            rx: None,
        }
    }
}

impl PinFunctionMapper for SimPins<'_> {
    fn set_pin_function(&mut self, pin: PinId, function: PinFunction) {
        record(self.log, Op::Pin(pin, function));
        if pin == PinId::PA00 {
            self.tx = Some(function);
        } else if pin == PinId::PA01 {
            self.rx = Some(function);
        }
    }
}

/// Interrupt controller recorder
pub struct SimIrq<'a> {
    log: &'a Log,
}

impl<'a> SimIrq<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl InterruptController for SimIrq<'_> {
    fn enable_interrupt(&mut self, sercom: SercomId) {
        record(self.log, Op::IrqEnable(sercom));
    }
}
