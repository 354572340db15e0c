//! Fractional baud rate generator value
//!
//! The SERCOM baud generator in 16x arithmetic mode expects
//!
//! ```text
//! BAUD = 65536 * (1 - 16 * f_baud / f_ref)
//! ```
//!
//! Computing that directly needs a 64-bit division, which pulls a soft
//! division routine into the image on cores without a divider. Instead the
//! reciprocal of the reference clock is expanded into four fixed-point
//! digits (scaled by 2^32, 2^42, 2^52 and 2^62, the last three keeping only
//! their low 10 bits) and the baud rate is folded through them with
//! multiply-add-shift steps. Only the clock is ever divided, so for a
//! constant clock the compiler evaluates every division at build time.
//!
//! The result is always within one LSB of both
//! `65535 - floor(2^20 * f_baud / f_ref)` (the floor form) and the vendor
//! integer formula `((f_ref << 16) - (f_baud << 20)) / f_ref`; they only
//! differ when `2^20 * f_baud / f_ref` is an integer. For power-of-two
//! clocks the reciprocal is exact, the low digits are zero and the result
//! equals the floor form. For the other clocks exercised below (common
//! crystal and PLL frequencies up to [`MAX_CLOCK_HZ`]) it equals the vendor
//! formula.
//!
//! [`MAX_CLOCK_HZ`]: crate::config::MAX_CLOCK_HZ

/// Mask applied to the three low-order reciprocal digits
const DIGIT_MASK: u32 = 0x3FF;

/// Compute the BAUD register value for a target baud rate
///
/// `target_baud` must be non-zero and below `clock_hz / 16`, and
/// `clock_hz` non-zero and at most 48 MHz; see
/// [`crate::config::UartSettings::validate`].
pub const fn compute_baud_register(target_baud: u32, clock_hz: u32) -> u16 {
    let clk = clock_hz as u64;

    let m1 = ((1u64 << 32) / clk) as u32;
    let m2 = ((1u64 << 42) / clk) as u32 & DIGIT_MASK;
    let m3 = ((1u64 << 52) / clk) as u32 & DIGIT_MASK;
    let m4 = ((1u64 << 62) / clk) as u32 & DIGIT_MASK;

    let op4 = target_baud.wrapping_mul(m4).wrapping_sub(1) >> 10;
    let op3 = target_baud.wrapping_mul(m3).wrapping_add(op4) >> 10;
    let op2 = target_baud.wrapping_mul(m2).wrapping_add(op3) >> 10;
    let op1 = target_baud.wrapping_mul(m1).wrapping_add(op2) >> 12;

    65535u32.wrapping_sub(op1) as u16
}

/// Actual baud rate produced by a BAUD register value
///
/// Uses integer division; intended for diagnostics and tests, not the
/// configuration path.
pub fn effective_baud(register: u16, clock_hz: u32) -> u32 {
    let numerator = (65536 - register as u64) * clock_hz as u64;
    (numerator / (65536 * 16)) as u32
}
