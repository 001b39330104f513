//! Core value types shared across the control loop.

/// An integer percentage clamped to the range 0–100.
///
/// Used for both the measured sound level and the alert volume. Construction
/// saturates at 100, which is what keeps the loop's "always in range"
/// invariant free of runtime checks everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percent(u8);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Percent(0);

    /// One hundred percent.
    pub const MAX: Self = Percent(100);

    /// Creates a percentage, saturating values above 100.
    #[inline]
    pub const fn new(value: u8) -> Self {
        if value > 100 { Percent(100) } else { Percent(value) }
    }

    /// Returns the raw value (0–100).
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns true if the value is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds one percentage point, saturating at 100.
    #[inline]
    pub const fn step_up(self) -> Self {
        Percent::new(self.0.saturating_add(1))
    }

    /// Subtracts one percentage point, saturating at 0.
    #[inline]
    pub const fn step_down(self) -> Self {
        Percent(self.0.saturating_sub(1))
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl core::fmt::Display for Percent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Diagnostic summary of one completed alert cycle.
///
/// Emitted when the tone switches back off, carrying the percentages the
/// cycle ran with. The library returns it as data; firmware decides whether
/// and how to log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Sound level the estimator last derived from the ambient channel.
    pub sound: Percent,
    /// Alert volume at the moment the tone fell silent.
    pub volume: Percent,
}
