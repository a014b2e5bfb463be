//! Board-agnostic core logic for the microwave oven controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Cook-cycle state machine (stage transitions)
//! - Borrow-chain countdown for the two-digit cook time
//! - Tick engine producing hardware-neutral effect commands
//! - Ranging conversion and proximity monitoring
//! - Power-dial and ambient-light sensing
//! - Status event definitions
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod ranging;
pub mod sensing;
pub mod state;
pub mod status;
