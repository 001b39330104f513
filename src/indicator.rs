//! Tiered bar-graph pattern for the level indicator panel.
//!
//! The panel is a fixed run of 25 RGB cells. [`LevelIndicator`] maps a
//! volume percentage onto a prefix of lit cells: louder volume lights a
//! longer prefix, and the cell color shifts from green through yellow to
//! red as the volume climbs. The mapping is a pure function of the volume,
//! recomputed from scratch on every repaint, so the pattern can never hold
//! stale cells from an earlier, louder reading.

use palette::Srgb;

use crate::COLOR_OFF;
use crate::types::Percent;

/// Number of cells in the indicator panel.
pub const INDICATOR_CELLS: usize = 25;

/// One color per indicator cell, in panel order.
pub type IndicatorPattern = [Srgb; INDICATOR_CELLS];

const GREENISH: Srgb = Srgb::new(0.0, 0.1, 0.0);
const YELLOWISH: Srgb = Srgb::new(0.1, 0.1, 0.0);
const REDDISH: Srgb = Srgb::new(0.1, 0.0, 0.0);

struct Tier {
    /// Inclusive upper bound of the volume band.
    bound: u8,
    /// Length of the lit prefix while the volume sits in this band.
    cells: usize,
    /// Cell color for this band.
    color: Srgb,
}

/// Five bands of 20 percentage points each. Intensities stay low so the
/// panel reads as a bar graph rather than a floodlight.
const TIERS: [Tier; 5] = [
    Tier { bound: 20, cells: 5, color: GREENISH },
    Tier { bound: 40, cells: 10, color: GREENISH },
    Tier { bound: 60, cells: 15, color: YELLOWISH },
    Tier { bound: 80, cells: 20, color: YELLOWISH },
    Tier { bound: 100, cells: 25, color: REDDISH },
];

/// Owns the pattern buffer and recomputes it from the current volume.
pub struct LevelIndicator {
    pattern: IndicatorPattern,
}

impl LevelIndicator {
    /// Creates an indicator with every cell off.
    pub fn new() -> Self {
        Self {
            pattern: [COLOR_OFF; INDICATOR_CELLS],
        }
    }

    /// Recomputes the pattern for `volume` and returns it for pushing.
    ///
    /// Zero volume lights nothing. Every cell beyond the active prefix is
    /// zeroed.
    pub fn repaint(&mut self, volume: Percent) -> &IndicatorPattern {
        self.pattern = [COLOR_OFF; INDICATOR_CELLS];
        if !volume.is_zero() {
            for tier in &TIERS {
                if volume.get() <= tier.bound {
                    self.pattern[..tier.cells].fill(tier.color);
                    break;
                }
            }
        }
        &self.pattern
    }

    /// Zeroes every cell and returns the cleared pattern.
    pub fn clear(&mut self) -> &IndicatorPattern {
        self.pattern = [COLOR_OFF; INDICATOR_CELLS];
        &self.pattern
    }

    /// Returns the most recently computed pattern.
    pub fn pattern(&self) -> &IndicatorPattern {
        &self.pattern
    }
}

impl Default for LevelIndicator {
    fn default() -> Self {
        Self::new()
    }
}
