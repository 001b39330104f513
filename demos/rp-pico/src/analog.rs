use rp_pico::hal::adc::{Adc, AdcPin};
use rp_pico::hal::gpio::bank0::{Gpio26, Gpio28};
use rp_pico::hal::gpio::{FunctionSioInput, Pin, PullNone};

use noise_alert::{AnalogChannel, AnalogSampler};

/// Microphone input on ADC2 (GPIO28)
pub type MicrophonePin = AdcPin<Pin<Gpio28, FunctionSioInput, PullNone>>;

/// Joystick vertical axis on ADC0 (GPIO26)
pub type JoystickPin = AdcPin<Pin<Gpio26, FunctionSioInput, PullNone>>;

/// Analog front end for the microphone and the joystick axis
///
/// This wrapper implements the AnalogSampler trait required by the
/// controller, running a single-shot conversion on whichever input the
/// loop asks for.
pub struct AdcSampler {
    adc: Adc,
    microphone: MicrophonePin,
    joystick: JoystickPin,
}

impl AdcSampler {
    /// Create a new sampler over the two analog inputs
    pub fn new(adc: Adc, microphone: MicrophonePin, joystick: JoystickPin) -> Self {
        Self {
            adc,
            microphone,
            joystick,
        }
    }
}

// Implement the AnalogSampler trait required by the controller
impl AnalogSampler for AdcSampler {
    fn sample(&mut self, channel: AnalogChannel) -> u16 {
        match channel {
            AnalogChannel::Sound => self.adc.read_single(&self.microphone),
            AnalogChannel::Joystick => self.adc.read_single(&self.joystick),
        }
    }
}
