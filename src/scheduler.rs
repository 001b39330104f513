//! Duty-cycle state machine for the alert tone.
//!
//! The tone runs a fixed cadence: silent for a long window, sounding for a
//! short one, repeating forever. [`AlertScheduler`] holds the phase and the
//! instant the phase began; [`AlertScheduler::tick`] compares elapsed time
//! against the configured windows and reports any transition. All side
//! effects (driving the tone, repainting the indicator) belong to the
//! caller, which keeps the timing logic testable with a fake clock.

use crate::time::TimeInstant;
use crate::tuning::Tuning;
use crate::types::Percent;

/// The current phase of the alert tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertPhase {
    /// Tone output disabled. Initial phase.
    Off,
    /// Tone output enabled at the loudness captured on entry.
    On,
}

/// A phase transition reported by [`AlertScheduler::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertTransition {
    /// The silent window elapsed; start the tone at this loudness.
    Started {
        /// Volume captured at the moment of entry; later volume changes do
        /// not retune a sounding tone.
        loudness: Percent,
    },
    /// The sounding window elapsed; silence the tone and clear the
    /// indicator.
    Silenced,
}

/// Two-phase timer state machine for the alert cadence.
pub struct AlertScheduler<I: TimeInstant> {
    phase: AlertPhase,
    phase_start: I,
    off_micros: u64,
    on_micros: u64,
}

impl<I: TimeInstant> AlertScheduler<I> {
    /// Creates a scheduler in the silent phase, with the window measured
    /// from `now`.
    pub fn new(now: I, tuning: &Tuning) -> Self {
        Self {
            phase: AlertPhase::Off,
            phase_start: now,
            off_micros: tuning.off_micros,
            on_micros: tuning.on_micros,
        }
    }

    /// Evaluates elapsed time and performs at most one phase transition.
    ///
    /// `volume` is the loudness a starting tone would use; it is captured
    /// into the returned transition, not stored. Transitions fire on a
    /// strict `>` comparison, so a tick landing exactly on the window
    /// boundary does not switch yet. A transition restarts the window from
    /// `now`, so even after a long stall the opposite edge cannot fire in
    /// the same call.
    pub fn tick(&mut self, now: I, volume: Percent) -> Option<AlertTransition> {
        let elapsed = now.micros_since(self.phase_start);
        match self.phase {
            AlertPhase::Off if elapsed > self.off_micros => {
                self.phase = AlertPhase::On;
                self.phase_start = now;
                Some(AlertTransition::Started { loudness: volume })
            }
            AlertPhase::On if elapsed > self.on_micros => {
                self.phase = AlertPhase::Off;
                self.phase_start = now;
                Some(AlertTransition::Silenced)
            }
            _ => None,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> AlertPhase {
        self.phase
    }

    /// Returns true while the tone is sounding.
    pub fn is_on(&self) -> bool {
        self.phase == AlertPhase::On
    }
}
