//! Power dial scaling and change tracking

use crate::config::PowerDialConfig;

/// Map a raw dial reading onto the commanded power level
///
/// `(raw + offset) / divisor`, clamped to `max_level`. With the default
/// tuning a 10-bit reading maps onto levels 1 through 10.
pub fn power_level_from_raw(raw: u16, config: &PowerDialConfig) -> u8 {
    let level = (raw as u32 + config.offset as u32) / config.divisor as u32;
    level.min(config.max_level as u32) as u8
}

/// Tick-to-tick power level comparison
///
/// Reports a change exactly once per level move. The baseline is rebased
/// at digit-entry completion so a dial move between entry and the first
/// cooking tick is still reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerTracker {
    level: u8,
}

impl PowerTracker {
    /// Create a tracker with no meaningful baseline
    pub const fn new() -> Self {
        Self { level: 0 }
    }

    /// Reset the comparison baseline without reporting a change
    pub fn rebase(&mut self, level: u8) {
        self.level = level;
    }

    /// Record this tick's level; returns true when it differs from the
    /// previous tick's
    pub fn observe(&mut self, level: u8) -> bool {
        let changed = level != self.level;
        self.level = level;
        changed
    }

    /// Last recorded level
    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Default for PowerTracker {
    fn default() -> Self {
        Self::new()
    }
}
