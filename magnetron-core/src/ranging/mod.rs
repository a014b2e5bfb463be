//! Ultrasonic ranging
//!
//! Distance conversion and proximity classification for the door-area
//! ultrasonic sensor. The firmware owns the trigger and echo pins; this
//! module is pure arithmetic over the captured pulse width.

pub mod distance;
pub mod monitor;

pub use distance::distance_from_pulse;
pub use monitor::{RangeMonitor, RangeUpdate};
