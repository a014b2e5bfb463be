//! Proximity classification
//!
//! Classifies distance samples against the valid window and the alarm
//! threshold. The alarm report is edge-triggered: one report when an
//! object crosses inside the alarm distance, silence while it stays
//! there and when it leaves.

use crate::config::RangingConfig;

/// Outcome of classifying one distance sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeUpdate {
    /// Warning lamp level, or `None` when the sample was out of window
    /// and the previous level holds
    pub warn_lamp: Option<bool>,
    /// The alarm turned on with this sample
    pub alarm_raised: bool,
}

/// Proximity monitor with an edge-triggered alarm
///
/// Samples outside the valid window are discarded; the alarm keeps its
/// previous state across them.
#[derive(Debug, Clone)]
pub struct RangeMonitor {
    config: RangingConfig,
    /// Object currently inside the alarm distance
    alarm: bool,
}

impl RangeMonitor {
    /// Create a monitor with the alarm clear
    pub fn new(config: RangingConfig) -> Self {
        Self {
            config,
            alarm: false,
        }
    }

    /// Current alarm level
    pub fn alarm(&self) -> bool {
        self.alarm
    }

    /// Classify one distance sample
    pub fn observe(&mut self, distance_mm: u32) -> RangeUpdate {
        let valid =
            distance_mm > self.config.min_valid_mm && distance_mm < self.config.max_valid_mm;
        if !valid {
            return RangeUpdate {
                warn_lamp: None,
                alarm_raised: false,
            };
        }

        let near = distance_mm < self.config.alarm_mm;
        let raised = near && !self.alarm;
        self.alarm = near;

        RangeUpdate {
            warn_lamp: Some(near),
            alarm_raised: raised,
        }
    }
}

impl Default for RangeMonitor {
    fn default() -> Self {
        Self::new(RangingConfig::default())
    }
}
