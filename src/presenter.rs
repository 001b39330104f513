//! Status text for the operator display.
//!
//! [`DisplayPresenter`] turns the current mode and percentages into a
//! [`StatusFrame`], a small value type the display driver renders without
//! knowing anything about modes or volumes. Automatic mode shows both the
//! measured noise and the alert volume; manual mode shows only the volume
//! and swaps the border style so the active mode is visible at a glance.

use core::fmt::Write;

use heapless::String;

use crate::mode::Mode;
use crate::types::Percent;

/// Maximum characters per display line.
pub const LINE_CAPACITY: usize = 16;

/// One fully formatted display refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFrame {
    /// Top status line.
    pub line1: String<LINE_CAPACITY>,
    /// Optional second line, used in automatic mode.
    pub line2: Option<String<LINE_CAPACITY>>,
    /// Draw an inner border inside the outer one. Manual-mode cue.
    pub double_border: bool,
}

/// Stateless formatter from control state to [`StatusFrame`].
pub struct DisplayPresenter;

impl DisplayPresenter {
    /// Builds the frame for one loop iteration.
    pub fn frame(mode: Mode, sound: Percent, volume: Percent) -> StatusFrame {
        match mode {
            Mode::Automatic => StatusFrame {
                line1: Self::line("Noise: ", sound),
                line2: Some(Self::line("Alert: ", volume)),
                double_border: false,
            },
            Mode::Manual => StatusFrame {
                line1: Self::line("Alert: ", volume),
                line2: None,
                double_border: true,
            },
        }
    }

    fn line(label: &str, value: Percent) -> String<LINE_CAPACITY> {
        let mut line = String::new();
        // Longest rendering is "Noise: 100%", 11 chars, so the write
        // cannot overflow the capacity.
        let _ = write!(line, "{label}{value}");
        line
    }
}
