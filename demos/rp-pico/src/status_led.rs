use embedded_hal::pwm::SetDutyCycle;

use noise_alert::StatusLed;

/// Status LED implementation for a PWM-controlled LED
///
/// This wrapper implements the StatusLed trait required by the controller,
/// mapping the reported brightness level directly onto the PWM duty cycle.
/// The slice top must match the controller's status range so the full ADC
/// swing covers the full brightness range.
pub struct PwmStatusLed<C: SetDutyCycle> {
    channel: C,
    max_duty: u16,
}

impl<C: SetDutyCycle> PwmStatusLed<C> {
    /// Create a new status LED over a PWM channel
    pub fn new(channel: C) -> Self {
        let max_duty = channel.max_duty_cycle();
        Self { channel, max_duty }
    }
}

// Implement the StatusLed trait required by the controller
impl<C: SetDutyCycle> StatusLed for PwmStatusLed<C> {
    fn set_level(&mut self, level: u16) {
        let _ = self.channel.set_duty_cycle(level.min(self.max_duty));
    }
}
