//! Cook-cycle execution
//!
//! Turns digit input and per-tick observations into stage transitions and
//! hardware-neutral effect commands.

pub mod countdown;
pub mod engine;

pub use countdown::{Countdown, CountdownState};
pub use engine::{CookEngine, LatchPosition, Observations, TickEffects, MAX_TICK_EVENTS};
