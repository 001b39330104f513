//! Time abstraction traits for platform-agnostic timing.
//!
//! Every timing decision in this crate (alert duty cycle, debounce window)
//! is an elapsed-microseconds comparison against a monotonic clock, so the
//! seam is deliberately narrow: an instant knows how many microseconds have
//! passed since an earlier instant, and a clock produces instants. Tests
//! inject a fake clock; firmware wraps its hardware timer.

/// Trait abstraction for monotonic instant types.
pub trait TimeInstant: Copy {
    /// Microseconds elapsed since an earlier instant.
    ///
    /// `earlier` is always a value previously captured from the same clock,
    /// so implementations may saturate instead of panicking if the
    /// arguments are ever reversed.
    fn micros_since(&self, earlier: Self) -> u64;
}

/// Trait for abstracting time sources.
pub trait Clock<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}
