//! Front panel rendering
//!
//! The panel is a dumb terminal: it paints rows of text and reports
//! key edges. This module decides when a screen actually needs to go
//! over the wire and how it breaks down into frames.

pub mod renderer;

pub use renderer::{encode_screen, Renderer};
