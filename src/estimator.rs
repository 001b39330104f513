//! Volume estimation from the ambient channel or the joystick.
//!
//! One estimator, two branches, selected by [`Mode`](crate::Mode) each loop
//! iteration. The automatic branch derives a sound percentage from the
//! ambient reading and keeps the alert volume a fixed lead above it; the
//! manual branch is a rate-limited fader driven by joystick deflection.
//! Both leave the volume inside 0–100 by construction.

use crate::tuning::Tuning;
use crate::types::Percent;

/// Computes the target alert volume.
#[derive(Debug, Clone)]
pub struct VolumeEstimator {
    tuning: Tuning,
    volume: Percent,
    sound: Percent,
}

impl VolumeEstimator {
    /// Creates an estimator with the tuning's initial volume and no sound
    /// measured yet.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            tuning: *tuning,
            volume: tuning.initial_volume,
            sound: Percent::ZERO,
        }
    }

    /// Runs the automatic branch for one iteration.
    ///
    /// `reading` carries a fresh ambient sample only while the alert tone
    /// is silent; pass `None` during the sounding phase so the tone's own
    /// output cannot feed back into the measurement. Without a fresh
    /// sample the previous sound percentage is reused and only the chase
    /// update runs.
    ///
    /// # Returns
    /// * `Some(level)` - status-LED brightness derived from the fresh
    ///   sample, scaled into `0..=status_range`
    /// * `None` - no sample this iteration; the LED holds its last level
    pub fn update_automatic(&mut self, reading: Option<u16>) -> Option<u16> {
        let status = reading.map(|raw| {
            self.sound = self.sound_percent(raw);
            self.status_level(raw)
        });
        self.chase();
        status
    }

    /// Runs the manual branch for one iteration: at most one percentage
    /// point of change per call, none inside the dead zone.
    pub fn update_manual(&mut self, reading: u16) {
        if reading > self.tuning.raise_threshold {
            self.volume = self.volume.step_up();
        } else if reading < self.tuning.lower_threshold {
            self.volume = self.volume.step_down();
        }
    }

    /// Current alert volume.
    pub fn volume(&self) -> Percent {
        self.volume
    }

    /// Sound level derived from the most recent ambient sample.
    pub fn sound(&self) -> Percent {
        self.sound
    }

    /// Scales a raw ambient reading to a percentage of full scale,
    /// measured as absolute distance from the quiescent offset.
    fn sound_percent(&self, raw: u16) -> Percent {
        let deviation = (raw as i32 - self.tuning.quiescent_offset as i32).unsigned_abs();
        let percent = (deviation * 100 / self.tuning.full_scale as u32).min(100);
        Percent::new(percent as u8)
    }

    /// Brightness for the status LED: proportional to the reading's
    /// distance above the ADC midpoint, dark below the noise gate.
    fn status_level(&self, raw: u16) -> u16 {
        if raw < self.tuning.noise_gate {
            return 0;
        }
        let span = raw as i32 - self.tuning.adc_center as i32;
        let level = span * self.tuning.status_range as i32 / self.tuning.full_scale as i32;
        level.clamp(0, self.tuning.status_range as i32) as u16
    }

    /// Keeps the volume a fixed lead above the sound level. The ceiling
    /// only applies while the sound level is overtaking the volume; the
    /// settling branch tracks `sound + lead` directly.
    fn chase(&mut self) {
        let target = self.sound.get().saturating_add(self.tuning.lead);
        if self.sound > self.volume {
            self.volume = Percent::new(target.min(self.tuning.ceiling.get()));
        } else {
            self.volume = Percent::new(target);
        }
    }
}
