//! Configuration types
//!
//! Compile-time tuning for the cook cycle. Nothing here is persisted; the
//! board build runs on the defaults and tests override individual fields.

pub mod types;

pub use types::*;
