//! Shared test infrastructure for noise-alert integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};

use noise_alert::{
    AnalogChannel, AnalogSampler, Clock, IndicatorPanel, IndicatorPattern, Percent, StatusFrame,
    StatusLed, StatusScreen, TimeInstant, ToneOutput,
};
use palette::Srgb;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock instant counting microseconds since test start
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    fn micros_since(&self, earlier: Self) -> u64 {
        self.0 - earlier.0
    }
}

/// Mock clock with controllable time advancement
pub struct MockClock {
    current: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current: Cell::new(0),
        }
    }

    /// Advance time by the given number of microseconds
    pub fn advance(&self, micros: u64) {
        self.current.set(self.current.get() + micros);
    }

    /// Jump straight to an absolute microsecond timestamp
    pub fn set_micros(&self, micros: u64) {
        self.current.set(micros);
    }
}

impl Clock<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        TestInstant(self.current.get())
    }
}

// ============================================================================
// Mock Analog Sampler
// ============================================================================

/// Channel levels and call log shared between the test body and the
/// sampler handed to the controller.
///
/// Defaults to a quiet room: sound at the quiescent offset, joystick at
/// center.
pub struct SamplerProbe {
    sound: Cell<u16>,
    joystick: Cell<u16>,
    calls: RefCell<heapless::Vec<AnalogChannel, 128>>,
}

impl SamplerProbe {
    pub fn new() -> Self {
        Self {
            sound: Cell::new(2_000),
            joystick: Cell::new(2_048),
            calls: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn set_sound(&self, raw: u16) {
        self.sound.set(raw);
    }

    pub fn set_joystick(&self, raw: u16) {
        self.joystick.set(raw);
    }

    /// Number of samples taken from the given channel so far
    pub fn samples_of(&self, channel: AnalogChannel) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|taken| **taken == channel)
            .count()
    }
}

pub struct MockSampler<'a> {
    probe: &'a SamplerProbe,
}

impl<'a> MockSampler<'a> {
    pub fn new(probe: &'a SamplerProbe) -> Self {
        Self { probe }
    }
}

impl AnalogSampler for MockSampler<'_> {
    fn sample(&mut self, channel: AnalogChannel) -> u16 {
        let _ = self.probe.calls.borrow_mut().push(channel);
        match channel {
            AnalogChannel::Sound => self.probe.sound.get(),
            AnalogChannel::Joystick => self.probe.joystick.get(),
        }
    }
}

// ============================================================================
// Mock Tone Output
// ============================================================================

/// Records every frequency/volume pair sent to the tone output
pub struct ToneProbe {
    calls: RefCell<heapless::Vec<(u32, Percent), 64>>,
}

impl ToneProbe {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn calls(&self) -> heapless::Vec<(u32, Percent), 64> {
        self.calls.borrow().clone()
    }

    pub fn last(&self) -> Option<(u32, Percent)> {
        self.calls.borrow().last().copied()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

pub struct MockTone<'a> {
    probe: &'a ToneProbe,
}

impl<'a> MockTone<'a> {
    pub fn new(probe: &'a ToneProbe) -> Self {
        Self { probe }
    }
}

impl ToneOutput for MockTone<'_> {
    fn set_tone(&mut self, frequency_hz: u32, volume: Percent) {
        let _ = self.probe.calls.borrow_mut().push((frequency_hz, volume));
    }
}

// ============================================================================
// Mock Status LED
// ============================================================================

/// Tracks the latest PWM level written to the status LED
pub struct StatusLedProbe {
    last: Cell<Option<u16>>,
    writes: Cell<usize>,
}

impl StatusLedProbe {
    pub fn new() -> Self {
        Self {
            last: Cell::new(None),
            writes: Cell::new(0),
        }
    }

    pub fn last_level(&self) -> Option<u16> {
        self.last.get()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

pub struct MockStatusLed<'a> {
    probe: &'a StatusLedProbe,
}

impl<'a> MockStatusLed<'a> {
    pub fn new(probe: &'a StatusLedProbe) -> Self {
        Self { probe }
    }
}

impl StatusLed for MockStatusLed<'_> {
    fn set_level(&mut self, level: u16) {
        self.probe.last.set(Some(level));
        self.probe.writes.set(self.probe.writes.get() + 1);
    }
}

// ============================================================================
// Mock Indicator Panel
// ============================================================================

/// Keeps the most recent pattern pushed to the panel
pub struct PanelProbe {
    last: RefCell<Option<IndicatorPattern>>,
    writes: Cell<usize>,
}

impl PanelProbe {
    pub fn new() -> Self {
        Self {
            last: RefCell::new(None),
            writes: Cell::new(0),
        }
    }

    pub fn last_pattern(&self) -> Option<IndicatorPattern> {
        *self.last.borrow()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Number of leading cells in the last pattern that are lit
    pub fn lit_prefix(&self) -> usize {
        self.last_pattern().map_or(0, |pattern| {
            pattern
                .iter()
                .take_while(|cell| **cell != Srgb::new(0.0, 0.0, 0.0))
                .count()
        })
    }
}

pub struct MockPanel<'a> {
    probe: &'a PanelProbe,
}

impl<'a> MockPanel<'a> {
    pub fn new(probe: &'a PanelProbe) -> Self {
        Self { probe }
    }
}

impl IndicatorPanel for MockPanel<'_> {
    fn write(&mut self, pattern: &IndicatorPattern) {
        *self.probe.last.borrow_mut() = Some(*pattern);
        self.probe.writes.set(self.probe.writes.get() + 1);
    }
}

// ============================================================================
// Mock Status Screen
// ============================================================================

/// Keeps the most recent frame rendered to the status screen
pub struct ScreenProbe {
    last: RefCell<Option<StatusFrame>>,
    renders: Cell<usize>,
}

impl ScreenProbe {
    pub fn new() -> Self {
        Self {
            last: RefCell::new(None),
            renders: Cell::new(0),
        }
    }

    pub fn last_frame(&self) -> Option<StatusFrame> {
        self.last.borrow().clone()
    }

    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

pub struct MockScreen<'a> {
    probe: &'a ScreenProbe,
}

impl<'a> MockScreen<'a> {
    pub fn new(probe: &'a ScreenProbe) -> Self {
        Self { probe }
    }
}

impl StatusScreen for MockScreen<'_> {
    fn render(&mut self, frame: &StatusFrame) {
        *self.probe.last.borrow_mut() = Some(frame.clone());
        self.probe.renders.set(self.probe.renders.get() + 1);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
