//! Analog sensing
//!
//! Turns raw dial and light readings into semantic values: the commanded
//! power level and the cabinet lamp state, each with edge-triggered
//! change reporting.

pub mod lamp;
pub mod power;

pub use lamp::LampMonitor;
pub use power::{power_level_from_raw, PowerTracker};
