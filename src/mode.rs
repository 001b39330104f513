//! Debounced mode toggle shared between an interrupt handler and the loop.
//!
//! [`ModeToggle`] owns the single bit of mode state. The edge interrupt is
//! the only writer; the main loop only reads. Both sides go through
//! single-word atomics, so no critical section is needed and the handler
//! stays non-blocking: one load, one store, done.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Which input drives the alert volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Volume chases the ambient sound level.
    Automatic,
    /// Volume follows the joystick.
    Manual,
}

/// Edge-triggered, debounced mode flip.
///
/// `new` is `const`, so the toggle can live in a `static` reachable from
/// both the interrupt handler and the main loop:
///
/// ```
/// use noise_alert::ModeToggle;
///
/// static MODE: ModeToggle = ModeToggle::new(500_000);
///
/// // interrupt context:
/// let _ = MODE.on_edge(600_000);
/// // main loop:
/// let mode = MODE.current();
/// assert_eq!(mode, noise_alert::Mode::Manual);
/// ```
///
/// Timestamps are raw microseconds from the platform's monotonic counter;
/// `u32` wrap-around (about 71 minutes) is handled by wrapping arithmetic.
#[derive(Debug)]
pub struct ModeToggle {
    manual: AtomicBool,
    last_accepted: AtomicU32,
    debounce_micros: u32,
}

impl ModeToggle {
    /// Creates a toggle starting in [`Mode::Automatic`].
    ///
    /// The last-accepted stamp starts at zero, so an edge landing inside
    /// the first debounce window after boot is rejected.
    pub const fn new(debounce_micros: u32) -> Self {
        Self {
            manual: AtomicBool::new(false),
            last_accepted: AtomicU32::new(0),
            debounce_micros,
        }
    }

    /// Handles one falling edge of the mode button.
    ///
    /// Call from the edge interrupt with the current microsecond count.
    /// Edges closer than the debounce window to the last accepted edge are
    /// bounces and ignored.
    ///
    /// # Returns
    /// * `Some(mode)` - the edge was accepted and the mode flipped
    /// * `None` - bounce, nothing changed
    pub fn on_edge(&self, now_micros: u32) -> Option<Mode> {
        let last = self.last_accepted.load(Ordering::Relaxed);
        if now_micros.wrapping_sub(last) <= self.debounce_micros {
            return None;
        }

        // Load-then-store is fine: the interrupt handler is the only
        // writer, and it cannot preempt itself.
        let manual = !self.manual.load(Ordering::Relaxed);
        self.manual.store(manual, Ordering::Relaxed);
        self.last_accepted.store(now_micros, Ordering::Relaxed);

        Some(if manual { Mode::Manual } else { Mode::Automatic })
    }

    /// Returns the current mode. Safe to call from the main loop at any
    /// time; a single atomic load, so reads never tear.
    pub fn current(&self) -> Mode {
        if self.manual.load(Ordering::Relaxed) {
            Mode::Manual
        } else {
            Mode::Automatic
        }
    }
}
