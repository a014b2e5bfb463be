//! Screen change tracking and frame encoding
//!
//! The controller emits a full screen every tick. Most of them repeat
//! the previous one, so the renderer remembers what the panel already
//! shows and only changed screens get encoded. A screen goes over the
//! wire as a clear frame followed by one line frame per non-empty row.

use magnetron_panel::{Frame, PanelCommand, Screen, PANEL_ROWS};

/// Tracks the screen the panel currently shows.
pub struct Renderer {
    shown: Option<Screen>,
}

impl Renderer {
    /// Create a renderer with nothing shown yet.
    ///
    /// The first screen after power-on always paints.
    pub const fn new() -> Self {
        Self { shown: None }
    }

    /// Record `screen` as shown and report whether it differs from the
    /// previous one.
    pub fn needs_repaint(&mut self, screen: &Screen) -> bool {
        if self.shown.as_ref() == Some(screen) {
            return false;
        }
        self.shown = Some(screen.clone());
        true
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a screen as a clear frame followed by its non-empty rows.
pub fn encode_screen(screen: &Screen) -> impl Iterator<Item = Frame> + '_ {
    ScreenEncoder {
        screen,
        state: EncoderState::Clear,
        current_row: 0,
    }
}

struct ScreenEncoder<'a> {
    screen: &'a Screen,
    state: EncoderState,
    current_row: u8,
}

#[derive(Clone, Copy)]
enum EncoderState {
    Clear,
    Lines,
    Done,
}

impl<'a> Iterator for ScreenEncoder<'a> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                EncoderState::Clear => {
                    self.state = EncoderState::Lines;
                    return PanelCommand::Clear.to_frame().ok();
                }
                EncoderState::Lines => {
                    while (self.current_row as usize) < PANEL_ROWS {
                        let row = self.current_row;
                        self.current_row += 1;

                        let text = self.screen.get_line(row);
                        if !text.is_empty() {
                            return PanelCommand::Line { row, text }.to_frame().ok();
                        }
                    }
                    self.state = EncoderState::Done;
                }
                EncoderState::Done => return None,
            }
        }
    }
}
