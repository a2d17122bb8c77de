//! Hardware timer wrapper for digit-matrix time traits.
//!
//! This module provides wrappers around the RP2040 hardware timer (using fugit types)
//! to implement the digit-matrix time traits. The timer counts microseconds in 64 bits,
//! so it never wraps within the lifetime of the device.

use digit_matrix::{TimeDuration, TimeInstant, TimeSource};
use fugit::{MicrosDurationU64, TimerInstantU64};

/// Duration type backed by fugit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl TimeDuration for Duration {
    fn as_millis(&self) -> u64 {
        self.0.to_millis()
    }
}

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let ticks = self.0.ticks().saturating_sub(earlier.0.ticks());
        Duration(MicrosDurationU64::from_ticks(ticks))
    }
}

impl From<TimerInstantU64<1_000_000>> for Instant {
    fn from(instant: TimerInstantU64<1_000_000>) -> Self {
        Instant(instant)
    }
}

/// Time source wrapper around RP2040 Timer
///
/// The timer is a read-only view of the hardware counter, so copies can be
/// handed to interrupt handlers freely.
#[derive(Clone, Copy)]
pub struct HardwareTimer {
    timer: rp_pico::hal::Timer,
}

impl HardwareTimer {
    /// Create a new hardware timer wrapper
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}
