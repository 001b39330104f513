#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AlertController`**: Runs one control loop iteration per poll over injected hardware
//! - **`VolumeEstimator`**: Derives the alert volume from ambient sound or joystick input
//! - **`AlertScheduler`**: Duty-cycle state machine deciding when the tone starts and stops
//! - **`LevelIndicator`**: Maps the volume onto a tiered 25-cell bar-graph pattern
//! - **`DisplayPresenter`**: Formats the status text shown on the operator display
//! - **`ModeToggle`**: Debounced automatic/manual flip, safe to drive from a button interrupt
//! - **`Tuning`**: All thresholds, scale factors and window durations in one validated struct
//! - **`AnalogSampler`/`ToneOutput`/`StatusLed`/`IndicatorPanel`/`StatusScreen`**: Traits to implement for your hardware
//! - **`Clock`**: Trait to implement for your timing system
//!
//! Indicator patterns use `Srgb<f32>` (0.0-1.0 range) cells. When implementing
//! [`IndicatorPanel`] for your hardware, convert these values to your device's
//! native format (e.g., 8-bit GRB for addressable LED strips). [`ModeToggle`]
//! is the only type meant to be shared with interrupt context; everything else
//! runs on the main loop.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod types;
pub mod tuning;
pub mod hardware;
pub mod mode;
pub mod estimator;
pub mod scheduler;
pub mod indicator;
pub mod presenter;
pub mod controller;

pub use time::{Clock, TimeInstant};
pub use types::{CycleReport, Percent};
pub use tuning::{Tuning, TuningError};
pub use hardware::{
    AnalogChannel, AnalogSampler, IndicatorPanel, StatusLed, StatusScreen, ToneOutput,
};
pub use mode::{Mode, ModeToggle};
pub use estimator::VolumeEstimator;
pub use scheduler::{AlertPhase, AlertScheduler, AlertTransition};
pub use indicator::{INDICATOR_CELLS, IndicatorPattern, LevelIndicator};
pub use presenter::{DisplayPresenter, LINE_CAPACITY, StatusFrame};
pub use controller::AlertController;

/// All channels off. The color of every unlit indicator cell.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
