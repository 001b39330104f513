//! Hardware timer wrapper for noise-alert time traits.
//!
//! This module provides wrappers around the RP2040 hardware timer (using fugit types)
//! to implement the noise-alert time traits.

use fugit::TimerInstantU64;
use noise_alert::{Clock, TimeInstant};

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    fn micros_since(&self, earlier: Self) -> u64 {
        self.0.ticks().saturating_sub(earlier.0.ticks())
    }
}

impl From<TimerInstantU64<1_000_000>> for Instant {
    fn from(instant: TimerInstantU64<1_000_000>) -> Self {
        Instant(instant)
    }
}

/// Clock wrapper around RP2040 Timer
pub struct HardwareTimer {
    timer: rp_pico::hal::Timer,
}

impl HardwareTimer {
    /// Create a new hardware timer wrapper
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self { timer }
    }
}

impl Clock<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}
