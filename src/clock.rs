//! Millisecond clock arithmetic.
//!
//! The core is driven by a monotonic 32-bit millisecond counter supplied by
//! the caller. The counter wraps roughly every 49.7 days, so every elapsed
//! time comparison must use wrapping subtraction. Deadlines built from
//! `now > deadline` comparisons would misfire at the wrap.

/// Timestamp from the caller-supplied millisecond clock.
pub type Millis = u32;

/// Milliseconds elapsed between two timestamps from the wrapping clock.
///
/// Correct across the `u32` boundary as long as the real elapsed time is
/// below the counter period.
#[inline]
pub const fn elapsed_ms(now_ms: Millis, since_ms: Millis) -> u32 {
    now_ms.wrapping_sub(since_ms)
}
