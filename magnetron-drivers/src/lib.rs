//! Hardware driver wrappers
//!
//! This crate pairs each actuator with its logical state behind
//! `embedded-hal` 1.0 traits, so the firmware tasks command intent and
//! the tests run against mock pins and PWM channels:
//!
//! - Door latch servo (PWM compare positions)
//! - Completion tone sounder (PWM carrier gate)
//! - Turntable motor (GPIO level)

#![no_std]
#![deny(unsafe_code)]

pub mod latch;
pub mod sounder;
pub mod turntable;

pub use latch::LatchServo;
pub use sounder::Sounder;
pub use turntable::Turntable;
