//! Configuration type definitions
//!
//! Tuning values for the sensing subsystems and actuators. Raw analog
//! values are on the 10-bit scale of the sampling layer.

/// Engine tick period (nominal 1 Hz loop)
pub const TICK_PERIOD_MS: u64 = 1000;

/// Ticks spent in `Aborted` before returning to `AwaitingInput`
pub const ABORT_DWELL_TICKS: u8 = 2;

/// Ranging subsystem tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangingConfig {
    /// Shortest distance accepted as a real echo (mm, exclusive)
    pub min_valid_mm: u32,
    /// Longest distance accepted as a real echo (mm, exclusive)
    pub max_valid_mm: u32,
    /// Distances below this raise the proximity alarm (mm)
    pub alarm_mm: u32,
}

impl Default for RangingConfig {
    fn default() -> Self {
        Self {
            min_valid_mm: 20,
            max_valid_mm: 2000,
            alarm_mm: 200,
        }
    }
}

/// Power dial scaling
///
/// Maps a raw reading onto the commanded power level:
/// `(raw + offset) / divisor`, clamped to `max_level`. With the defaults a
/// 10-bit reading lands on levels 1 through 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerDialConfig {
    /// Offset added to the raw reading before scaling
    pub offset: u16,
    /// Divisor mapping the offset reading onto levels
    pub divisor: u16,
    /// Highest commanded level
    pub max_level: u8,
}

impl Default for PowerDialConfig {
    fn default() -> Self {
        Self {
            offset: 100,
            divisor: 100,
            max_level: 10,
        }
    }
}

/// Cabinet lamp threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampConfig {
    /// Raw ambient brightness at or above which the lamp turns off
    pub lamp_off_raw: u16,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self { lamp_off_raw: 30 }
    }
}

/// Door latch servo pulse compares (servo counter ticks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LatchPulses {
    /// Latched (cooking) angle
    pub latched: u16,
    /// Unlatched angle
    pub unlatched: u16,
}

impl Default for LatchPulses {
    fn default() -> Self {
        Self {
            latched: 5500,
            unlatched: 3300,
        }
    }
}

/// Completion tone carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneConfig {
    /// PWM counter top for the tone carrier (~439 Hz at a 1 MHz count)
    pub pitch: u16,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self { pitch: 2276 }
    }
}

/// Aggregate oven configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OvenConfig {
    pub ranging: RangingConfig,
    pub power: PowerDialConfig,
    pub lamp: LampConfig,
    pub latch: LatchPulses,
    pub tone: ToneConfig,
}
