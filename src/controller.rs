//! Top-level control loop for the noise alert.
//!
//! Provides [`AlertController`] which wires the estimator, scheduler,
//! indicator and presenter to the hardware seams. One call to
//! [`AlertController::poll`] performs one loop iteration: sample the active
//! input, update the volume estimate, refresh the status display, and run
//! the alert cadence, driving the tone and indicator panel on phase
//! changes.

use crate::estimator::VolumeEstimator;
use crate::hardware::{
    AnalogChannel, AnalogSampler, IndicatorPanel, StatusLed, StatusScreen, ToneOutput,
};
use crate::indicator::LevelIndicator;
use crate::mode::{Mode, ModeToggle};
use crate::presenter::DisplayPresenter;
use crate::scheduler::{AlertPhase, AlertScheduler, AlertTransition};
use crate::time::{Clock, TimeInstant};
use crate::tuning::{Tuning, TuningError};
use crate::types::{CycleReport, Percent};

/// Runs the control loop over injected hardware.
///
/// The controller owns its peripherals and borrows the clock and the
/// mode toggle, which are shared with the rest of the firmware (the
/// toggle is also written from the button interrupt).
///
/// # Type Parameters
/// * `'a` - Lifetime of the clock and mode toggle references
/// * `I` - Time instant type
/// * `C` - Clock implementation type
/// * `A` - Analog sampler implementation type
/// * `T` - Tone output implementation type
/// * `L` - Status LED implementation type
/// * `P` - Indicator panel implementation type
/// * `D` - Status screen implementation type
pub struct AlertController<
    'a,
    I: TimeInstant,
    C: Clock<I>,
    A: AnalogSampler,
    T: ToneOutput,
    L: StatusLed,
    P: IndicatorPanel,
    D: StatusScreen,
> {
    clock: &'a C,
    mode: &'a ModeToggle,
    sampler: A,
    tone: T,
    status_led: L,
    panel: P,
    screen: D,
    tuning: Tuning,
    estimator: VolumeEstimator,
    scheduler: AlertScheduler<I>,
    indicator: LevelIndicator,
}

impl<
    'a,
    I: TimeInstant,
    C: Clock<I>,
    A: AnalogSampler,
    T: ToneOutput,
    L: StatusLed,
    P: IndicatorPanel,
    D: StatusScreen,
> AlertController<'a, I, C, A, T, L, P, D>
{
    /// Creates a controller with all outputs forced to their quiet state.
    ///
    /// The alert cadence starts in the silent phase, measured from the
    /// clock's current instant.
    ///
    /// # Errors
    /// Returns the first [`TuningError`] found if `tuning` is inconsistent.
    pub fn new(
        sampler: A,
        mut tone: T,
        mut status_led: L,
        mut panel: P,
        screen: D,
        clock: &'a C,
        mode: &'a ModeToggle,
        tuning: Tuning,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;

        let mut indicator = LevelIndicator::new();
        tone.set_tone(0, Percent::ZERO);
        status_led.set_level(0);
        panel.write(indicator.clear());

        let estimator = VolumeEstimator::new(&tuning);
        let scheduler = AlertScheduler::new(clock.now(), &tuning);

        Ok(Self {
            clock,
            mode,
            sampler,
            tone,
            status_led,
            panel,
            screen,
            tuning,
            estimator,
            scheduler,
            indicator,
        })
    }

    /// Performs one control loop iteration.
    ///
    /// The mode is read exactly once per call, so a toggle interrupt
    /// landing mid-iteration takes effect on the next call. In automatic
    /// mode the sound channel is sampled only while the tone is silent;
    /// while it sounds, the estimator keeps chasing the last measured
    /// level and the status LED holds its brightness.
    ///
    /// # Returns
    /// A [`CycleReport`] when this call ended a sounding phase, `None`
    /// otherwise.
    pub fn poll(&mut self) -> Option<CycleReport> {
        let mode = self.mode.current();

        match mode {
            Mode::Automatic => {
                let reading = if self.scheduler.is_on() {
                    None
                } else {
                    Some(self.sampler.sample(AnalogChannel::Sound))
                };
                if let Some(level) = self.estimator.update_automatic(reading) {
                    self.status_led.set_level(level);
                }
            }
            Mode::Manual => {
                let reading = self.sampler.sample(AnalogChannel::Joystick);
                self.estimator.update_manual(reading);
            }
        }

        let frame = DisplayPresenter::frame(mode, self.estimator.sound(), self.estimator.volume());
        self.screen.render(&frame);

        let now = self.clock.now();
        match self.scheduler.tick(now, self.estimator.volume()) {
            Some(AlertTransition::Started { loudness }) => {
                self.tone.set_tone(self.tuning.tone_hz, loudness);
                self.panel.write(self.indicator.repaint(loudness));
                None
            }
            Some(AlertTransition::Silenced) => {
                self.tone.set_tone(0, Percent::ZERO);
                self.panel.write(self.indicator.clear());
                Some(CycleReport {
                    sound: self.estimator.sound(),
                    volume: self.estimator.volume(),
                })
            }
            None => None,
        }
    }

    /// Returns the mode the next poll will run in.
    pub fn mode(&self) -> Mode {
        self.mode.current()
    }

    /// Returns the current alert volume estimate.
    pub fn volume(&self) -> Percent {
        self.estimator.volume()
    }

    /// Returns the most recent ambient sound level.
    pub fn sound(&self) -> Percent {
        self.estimator.sound()
    }

    /// Returns the current phase of the alert cadence.
    pub fn phase(&self) -> AlertPhase {
        self.scheduler.phase()
    }

    /// Returns true while the tone is sounding.
    pub fn is_alerting(&self) -> bool {
        self.scheduler.is_on()
    }
}
