//! Monotonic time source

/// Monotonic millisecond clock
///
/// The counter is 32 bits wide and wraps roughly every 49.7 days. Never
/// compare two readings directly; use [`ticks_diff`].
pub trait Clock {
    /// Milliseconds since an arbitrary fixed point
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `earlier`
    fn elapsed_since(&self, earlier: u32) -> u32 {
        ticks_diff(self.now_ms(), earlier)
    }
}

/// Wraparound-safe difference between two clock readings
///
/// Correct as long as the real interval is shorter than one full wrap.
pub const fn ticks_diff(later: u32, earlier: u32) -> u32 {
    later.wrapping_sub(earlier)
}

/// [`Clock`] backed by the embassy time driver
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation is intended: the counter wraps like a hardware tick
        embassy_time::Instant::now().as_millis() as u32
    }
}
