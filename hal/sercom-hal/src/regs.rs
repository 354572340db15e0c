//! SERCOM USART register interface
//!
//! Register access goes through [`UsartRegisters`] so the driver can run
//! against the real memory-mapped block on target and a simulated block on
//! the host. Methods take `&self`: hardware registers are shared between the
//! main context and the interrupt handler.
//!
//! Bit positions follow the SAMD21 internal-clock USART layout.

/// CTRLA register fields
pub mod ctrla {
    /// Software reset
    pub const SWRST: u32 = 1 << 0;
    /// Peripheral enable
    pub const ENABLE: u32 = 1 << 1;
    /// USART with internal clock
    pub const MODE_USART_INT_CLK: u32 = 0x1 << 2;
    /// Keep running in standby sleep
    pub const RUNSTDBY: u32 = 1 << 7;
    /// Data order: LSB first
    pub const DORD: u32 = 1 << 30;

    /// Sample rate selection (0 = 16x arithmetic oversampling)
    pub const fn sampr(value: u32) -> u32 {
        (value & 0x7) << 13
    }

    /// Transmit data pinout
    pub const fn txpo(value: u32) -> u32 {
        (value & 0x3) << 16
    }

    /// Receive data pinout
    pub const fn rxpo(value: u32) -> u32 {
        (value & 0x3) << 20
    }
}

/// CTRLB register fields
pub mod ctrlb {
    /// Transmitter enable
    pub const TXEN: u32 = 1 << 16;
    /// Receiver enable
    pub const RXEN: u32 = 1 << 17;

    /// Character size (0 = 8 bits)
    pub const fn chsize(value: u32) -> u32 {
        value & 0x7
    }
}

/// SYNCBUSY register fields
pub mod syncbusy {
    /// Software reset synchronisation busy
    pub const SWRST: u32 = 1 << 0;
    /// Enable synchronisation busy
    pub const ENABLE: u32 = 1 << 1;
    /// CTRLB synchronisation busy
    pub const CTRLB: u32 = 1 << 2;
}

/// INTFLAG / INTENSET / INTENCLR fields (shared layout)
pub mod intflag {
    /// Data register empty
    pub const DRE: u8 = 1 << 0;
    /// Transmit complete
    pub const TXC: u8 = 1 << 1;
    /// Receive complete
    pub const RXC: u8 = 1 << 2;
}

/// USART register block of a single SERCOM instance
pub trait UsartRegisters {
    /// Read CTRLA
    fn ctrla(&self) -> u32;

    /// Write CTRLA
    fn write_ctrla(&self, value: u32);

    /// Write CTRLB
    fn write_ctrlb(&self, value: u32);

    /// Write the 16-bit BAUD register
    fn write_baud(&self, value: u16);

    /// Write INTENSET (set bits unmask interrupt sources)
    fn write_intenset(&self, value: u8);

    /// Read INTFLAG
    fn intflag(&self) -> u8;

    /// Read SYNCBUSY
    fn syncbusy(&self) -> u32;

    /// Read DATA
    ///
    /// On hardware this pops the receive buffer and clears RXC.
    fn read_data(&self) -> u16;

    /// Write DATA
    ///
    /// On hardware this loads the transmit buffer and clears DRE.
    fn write_data(&self, value: u16);

    /// Read-modify-write CTRLA
    fn modify_ctrla<F: FnOnce(u32) -> u32>(&self, f: F) {
        let value = self.ctrla();
        self.write_ctrla(f(value));
    }

    /// Check whether any of the given SYNCBUSY bits are set
    fn is_syncing(&self, mask: u32) -> bool {
        self.syncbusy() & mask != 0
    }

    /// Check whether any of the given INTFLAG bits are set
    fn flag_set(&self, mask: u8) -> bool {
        self.intflag() & mask != 0
    }
}

impl<R: UsartRegisters + ?Sized> UsartRegisters for &R {
    fn ctrla(&self) -> u32 {
        (**self).ctrla()
    }

    fn write_ctrla(&self, value: u32) {
        (**self).write_ctrla(value)
    }

    fn write_ctrlb(&self, value: u32) {
        (**self).write_ctrlb(value)
    }

    fn write_baud(&self, value: u16) {
        (**self).write_baud(value)
    }

    fn write_intenset(&self, value: u8) {
        (**self).write_intenset(value)
    }

    fn intflag(&self) -> u8 {
        (**self).intflag()
    }

    fn syncbusy(&self) -> u32 {
        (**self).syncbusy()
    }

    fn read_data(&self) -> u16 {
        (**self).read_data()
    }

    fn write_data(&self, value: u16) {
        (**self).write_data(value)
    }
}
