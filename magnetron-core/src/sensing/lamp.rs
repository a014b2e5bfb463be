//! Cabinet lamp threshold monitoring

use crate::config::LampConfig;

/// Ambient-light classifier for the cabinet lamp
///
/// Bright surroundings turn the lamp off, dark surroundings turn it on.
/// The level change is reported exactly once per threshold crossing, in
/// either direction. The lamp starts off, so a first dark reading counts
/// as a crossing.
#[derive(Debug, Clone)]
pub struct LampMonitor {
    config: LampConfig,
    lamp_on: bool,
}

impl LampMonitor {
    /// Create a monitor with the lamp off
    pub fn new(config: LampConfig) -> Self {
        Self {
            config,
            lamp_on: false,
        }
    }

    /// Current lamp level
    pub fn lamp_on(&self) -> bool {
        self.lamp_on
    }

    /// Classify one brightness sample; returns true when the lamp level
    /// changed
    pub fn observe(&mut self, brightness_raw: u16) -> bool {
        let on = brightness_raw < self.config.lamp_off_raw;
        let changed = on != self.lamp_on;
        self.lamp_on = on;
        changed
    }
}

impl Default for LampMonitor {
    fn default() -> Self {
        Self::new(LampConfig::default())
    }
}
