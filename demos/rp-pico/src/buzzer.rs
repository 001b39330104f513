use embedded_hal::pwm::SetDutyCycle;
use rp_pico::hal::pwm::{FreeRunning, Slice, SliceId};

use noise_alert::{Percent, ToneOutput};

/// PWM counting rate with the clock divider at 125 (125 MHz / 125)
const TICK_HZ: u32 = 1_000_000;

/// Buzzer implementation for a PWM-driven piezo
///
/// This wrapper implements the ToneOutput trait required by the controller.
/// The frequency selects the slice wrap value and the volume scales the
/// duty cycle, so pitch and loudness are controlled independently.
pub struct PwmTone<S: SliceId> {
    slice: Slice<S, FreeRunning>,
}

impl<S: SliceId> PwmTone<S> {
    /// Create a new tone output over a PWM slice
    ///
    /// The buzzer pin must already be bound to channel A of the slice.
    /// The slice starts disabled; it only runs while a tone is sounding.
    pub fn new(mut slice: Slice<S, FreeRunning>) -> Self {
        slice.set_div_int(125u8); // 125 MHz / 125 = 1 MHz
        Self { slice }
    }
}

// Implement the ToneOutput trait required by the controller
impl<S: SliceId> ToneOutput for PwmTone<S> {
    fn set_tone(&mut self, frequency_hz: u32, volume: Percent) {
        if frequency_hz == 0 || volume.is_zero() {
            let _ = self.slice.channel_a.set_duty_cycle(0);
            self.slice.disable();
            return;
        }

        let top = (TICK_HZ / frequency_hz).min(u16::MAX as u32) as u16;
        let duty = (top as u32 * volume.get() as u32 / 100) as u16;

        self.slice.set_top(top);
        let _ = self.slice.channel_a.set_duty_cycle(duty);
        self.slice.enable();
    }
}
