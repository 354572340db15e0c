//! Busy-wait primitives
//!
//! Register synchronisation is polled, never awaited. [`wait_until`] spins
//! forever, which is the contract the configuration sequence relies on: a
//! peripheral that never acknowledges hangs the system instead of leaving it
//! half-configured. [`wait_until_bounded`] exists for callers that opt in to
//! giving up.

use core::hint::spin_loop;

/// Bounded wait gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaitTimeout {
    /// Number of condition checks performed
    pub checks: u32,
}

/// Spin until `done` returns true
pub fn wait_until<F: FnMut() -> bool>(mut done: F) {
    while !done() {
        spin_loop();
    }
}

/// Spin until `done` returns true, checking at most `max_checks` times
///
/// Returns the number of checks it took.
pub fn wait_until_bounded<F: FnMut() -> bool>(
    mut done: F,
    max_checks: u32,
) -> Result<u32, WaitTimeout> {
    for check in 1..=max_checks {
        if done() {
            return Ok(check);
        }
        spin_loop();
    }
    Err(WaitTimeout { checks: max_checks })
}
