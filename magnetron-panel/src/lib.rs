//! Front Panel Communication Protocol
//!
//! This crate defines the UART-based protocol between the oven controller and
//! the front panel (a 16x2 character LCD plus a numeric keypad on a shared
//! serial link). The protocol is designed for simplicity, low latency, and
//! robustness against line noise.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–18B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! The panel acts as a "dumb terminal": it reports key presses and releases
//! and paints whole rows of text. All cook-cycle logic stays on the
//! controller.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod keys;
pub mod messages;
pub mod screen;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use keys::KeyEvent;
pub use messages::{PanelCommand, PanelReport};
pub use screen::{Screen, PANEL_COLS, PANEL_ROWS};
