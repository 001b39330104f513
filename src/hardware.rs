//! Hardware abstraction traits for the loop's external collaborators.
//!
//! The control core never touches registers: analog sampling, the alert
//! tone, the status LED, the indicator matrix and the status screen are all
//! consumed through these traits. Implement them for your hardware (ADC,
//! PWM, bit-banged or PIO LED protocols, I2C displays) and handle any bus
//! errors internally. From the loop's point of view these calls cannot
//! fail, and a misbehaving peripheral must never stall the timing decisions.

use crate::indicator::IndicatorPattern;
use crate::presenter::StatusFrame;
use crate::types::Percent;

/// The two analog inputs the loop reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogChannel {
    /// Ambient sound level (microphone).
    Sound,
    /// Manual volume control axis (joystick).
    Joystick,
}

/// Trait for abstracting raw analog sampling.
///
/// Readings are 12-bit (0..=4095) with both channels biased near mid-scale
/// on the reference hardware. Implementations that cannot read should
/// return a mid-scale value rather than panic.
pub trait AnalogSampler {
    /// Samples one channel and returns the raw reading.
    fn sample(&mut self, channel: AnalogChannel) -> u16;
}

/// Trait for abstracting the alert tone output.
pub trait ToneOutput {
    /// Drives the tone at the given frequency and loudness.
    ///
    /// A zero frequency or zero volume must disable the output entirely
    /// (no zero-duty carrier left running). Volume modulates duty cycle,
    /// not pitch.
    fn set_tone(&mut self, frequency_hz: u32, volume: Percent);
}

/// Trait for abstracting the auxiliary status LED.
///
/// This LED is independent of the alert volume: it shadows the raw ambient
/// reading while the tone is silent so loud environments are visible at a
/// glance.
pub trait StatusLed {
    /// Sets the LED brightness in PWM counts (`0..=Tuning::status_range`).
    fn set_level(&mut self, level: u16);
}

/// Trait for abstracting the indicator matrix.
pub trait IndicatorPanel {
    /// Pushes a full pattern, one color per cell, in cell order.
    fn write(&mut self, pattern: &IndicatorPattern);
}

/// Trait for abstracting the status screen.
pub trait StatusScreen {
    /// Redraws the screen from a formatted frame.
    fn render(&mut self, frame: &StatusFrame);
}
