//! Tuning constants for the control loop.
//!
//! All thresholds, scale factors and timing windows live in a single
//! [`Tuning`] value with public fields, so firmware can override individual
//! knobs with struct-update syntax. Defaults reproduce the reference
//! hardware: a 12-bit ADC with the microphone biased near mid-scale, a
//! 1 kHz alert tone running a 200 ms on / 1 s off duty cycle.

use crate::types::Percent;

/// Tuning validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TuningError {
    /// The joystick dead zone is inverted (raise threshold at or below
    /// the lower threshold).
    InvertedDeadZone,

    /// The chase lead exceeds 100 percentage points.
    ExcessiveLead,

    /// A tone phase duration is zero.
    ZeroPhaseDuration,

    /// The ADC full-scale divisor is zero.
    ZeroFullScale,
}

impl core::fmt::Display for TuningError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TuningError::InvertedDeadZone => {
                write!(f, "joystick raise threshold must be above the lower threshold")
            }
            TuningError::ExcessiveLead => {
                write!(f, "chase lead must be at most 100 percentage points")
            }
            TuningError::ZeroPhaseDuration => {
                write!(f, "tone on/off durations must be non-zero")
            }
            TuningError::ZeroFullScale => {
                write!(f, "ADC full scale must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TuningError {}

/// Control-loop tuning knobs.
///
/// Construct with struct-update syntax over [`Tuning::default`] and pass to
/// [`AlertController::new`](crate::AlertController::new), which validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    /// Raw reading subtracted (as absolute distance) before scaling the
    /// ambient channel to a percentage.
    pub quiescent_offset: u16,

    /// ADC full-scale value used as the percentage divisor.
    pub full_scale: u16,

    /// ADC midpoint used when scaling the status-LED brightness.
    pub adc_center: u16,

    /// Ambient readings at or above this level drive the status LED;
    /// below it the LED is forced dark.
    pub noise_gate: u16,

    /// PWM range of the status LED (brightness values are scaled into
    /// `0..=status_range`).
    pub status_range: u16,

    /// Percentage points the alert volume stays above the measured sound
    /// level.
    pub lead: u8,

    /// Volume cap applied while the sound level is rising past the current
    /// volume. The falling branch is deliberately uncapped; see
    /// `VolumeEstimator`.
    pub ceiling: Percent,

    /// Alert volume at power-on.
    pub initial_volume: Percent,

    /// Joystick readings above this raise the volume in manual mode.
    pub raise_threshold: u16,

    /// Joystick readings below this lower the volume in manual mode.
    pub lower_threshold: u16,

    /// Silent-phase length in microseconds.
    pub off_micros: u64,

    /// Sounding-phase length in microseconds.
    pub on_micros: u64,

    /// Mode-button debounce window in microseconds.
    pub debounce_micros: u32,

    /// Alert tone frequency in hertz.
    pub tone_hz: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            quiescent_offset: 2_000,
            full_scale: 4_095,
            adc_center: 2_048,
            noise_gate: 2_080,
            status_range: 4_096,
            lead: 15,
            ceiling: Percent::new(70),
            initial_volume: Percent::new(5),
            raise_threshold: 2_500,
            lower_threshold: 1_500,
            off_micros: 1_000_000,
            on_micros: 200_000,
            debounce_micros: 500_000,
            tone_hz: 1_000,
        }
    }
}

impl Tuning {
    /// Checks the tuning for internally inconsistent values.
    ///
    /// # Errors
    /// * `InvertedDeadZone` - raise threshold at or below lower threshold
    /// * `ExcessiveLead` - chase lead above 100
    /// * `ZeroPhaseDuration` - either tone phase has zero length
    /// * `ZeroFullScale` - ADC full scale of zero
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.raise_threshold <= self.lower_threshold {
            return Err(TuningError::InvertedDeadZone);
        }
        if self.lead > 100 {
            return Err(TuningError::ExcessiveLead);
        }
        if self.off_micros == 0 || self.on_micros == 0 {
            return Err(TuningError::ZeroPhaseDuration);
        }
        if self.full_scale == 0 {
            return Err(TuningError::ZeroFullScale);
        }
        Ok(())
    }
}
