//! Interrupt controller abstraction

use crate::SercomId;

/// Interrupt controller
///
/// Only line enable is needed; dispatch to the handler is done by the
/// vector table.
pub trait InterruptController {
    /// Unmask the interrupt line of a SERCOM instance
    fn enable_interrupt(&mut self, sercom: SercomId);
}
