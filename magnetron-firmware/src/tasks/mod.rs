//! Embassy async tasks
//!
//! Each task runs independently and communicates through the channels
//! and observation cells in [`crate::channels`]. The controller task
//! holds all cook-cycle state; every other task is a dumb pipe between
//! one peripheral and the cells or queues.

pub mod abort;
pub mod controller;
pub mod latch;
pub mod panel_rx;
pub mod panel_tx;
pub mod ranging;
pub mod sensors;
pub mod status_tx;
pub mod tick;
pub mod tone;

pub use abort::{abort_task, AbortConfig};
pub use controller::{controller_task, ControllerPins};
pub use latch::latch_task;
pub use panel_rx::panel_rx_task;
pub use panel_tx::panel_tx_task;
pub use ranging::ranging_task;
pub use sensors::sensors_task;
pub use status_tx::status_tx_task;
pub use tick::tick_task;
pub use tone::tone_task;
