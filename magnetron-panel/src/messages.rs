//! Message types for the front panel link
//!
//! Message types are divided into two categories:
//! - Panel → Controller: keypad events
//! - Controller → Panel: screen commands

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use crate::keys::KeyEvent;
use crate::screen::PANEL_COLS;
use heapless::Vec;

// Message type IDs: Panel → Controller
pub const MSG_KEY: u8 = 0x01;

// Message type IDs: Controller → Panel
pub const MSG_CLEAR: u8 = 0x10;
pub const MSG_LINE: u8 = 0x11;

/// Commands from the controller to the panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelCommand<'a> {
    /// Blank the LCD
    Clear,
    /// Write one row of text
    Line { row: u8, text: &'a str },
}

impl<'a> PanelCommand<'a> {
    /// Encode this command into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PanelCommand::Clear => Ok(Frame::empty(MSG_CLEAR)),
            PanelCommand::Line { row, text } => {
                // Payload: [row][len][chars...]
                let text_bytes = text.as_bytes();
                let len = text_bytes.len().min(PANEL_COLS);

                let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
                payload.push(*row).map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .push(len as u8)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(&text_bytes[..len])
                    .map_err(|_| FrameError::PayloadTooLarge)?;

                Frame::new(MSG_LINE, &payload)
            }
        }
    }
}

/// Reports parsed from panel-originated frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelReport {
    /// Keypad event
    Key(KeyEvent),
}

impl PanelReport {
    /// Parse a report from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_KEY => {
                let event =
                    KeyEvent::from_payload(&frame.payload).ok_or(FrameError::InvalidFrame)?;
                Ok(PanelReport::Key(event))
            }
            _ => Err(FrameError::InvalidFrame),
        }
    }

    /// Encode this report into a frame (for testing or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PanelReport::Key(event) => Frame::new(MSG_KEY, &event.to_payload()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_command_clear() {
        let cmd = PanelCommand::Clear;
        let frame = cmd.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_CLEAR);
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_panel_command_line() {
        let cmd = PanelCommand::Line {
            row: 1,
            text: "Returning...",
        };
        let frame = cmd.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_LINE);
        assert_eq!(frame.payload[0], 1); // row
        assert_eq!(frame.payload[1], 12); // len
        assert_eq!(&frame.payload[2..14], b"Returning...");
    }

    #[test]
    fn test_panel_command_line_truncates_to_width() {
        let cmd = PanelCommand::Line {
            row: 0,
            text: "This line is wider than the panel",
        };
        let frame = cmd.to_frame().unwrap();
        assert_eq!(frame.payload[1] as usize, PANEL_COLS);
        assert_eq!(frame.payload.len(), 2 + PANEL_COLS);
    }

    #[test]
    fn test_panel_report_key() {
        let frame = Frame::new(MSG_KEY, &[0x05, 0x01]).unwrap();
        let report = PanelReport::from_frame(&frame).unwrap();
        assert_eq!(report, PanelReport::Key(KeyEvent::Down(5)));
    }

    #[test]
    fn test_panel_report_rejects_unknown_type() {
        let frame = Frame::empty(0x7F);
        assert_eq!(
            PanelReport::from_frame(&frame),
            Err(FrameError::InvalidFrame)
        );
    }

    #[test]
    fn test_panel_report_roundtrip() {
        let original = PanelReport::Key(KeyEvent::Up(9));
        let frame = original.to_frame().unwrap();
        let parsed = PanelReport::from_frame(&frame).unwrap();
        assert_eq!(original, parsed);
    }
}
