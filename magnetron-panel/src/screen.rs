//! Screen contents for the front panel LCD
//!
//! The panel carries a 16x2 character LCD. A [`Screen`] models one full
//! frame of it; the builders produce the frame for each cook-cycle stage.
//! Screens are sent whole (clear + both rows), so the panel never shows a
//! half-painted state.

use heapless::String;

/// LCD rows
pub const PANEL_ROWS: usize = 2;

/// LCD columns
pub const PANEL_COLS: usize = 16;

/// A screen buffer that can be sent to the panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    /// Lines of text (2 rows)
    lines: [String<PANEL_COLS>; PANEL_ROWS],
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [String::new(), String::new()],
        }
    }

    /// Set text at a specific row
    pub fn set_line(&mut self, row: u8, text: &str) {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].clear();
            let _ = self.lines[row as usize].push_str(&text[..text.len().min(PANEL_COLS)]);
        }
    }

    /// Get a line of text
    pub fn get_line(&self, row: u8) -> &str {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].as_str()
        } else {
            ""
        }
    }

    /// Time-entry prompt, echoing digits as they are accepted
    pub fn time_prompt(tens: Option<u8>, units: Option<u8>) -> Self {
        let mut screen = Self::new();
        screen.set_line(0, "  Enter Time");

        let mut line: String<PANEL_COLS> = String::new();
        let _ = write_to_string(
            &mut line,
            format_args!("Time: {}{} sec", digit_char(tens), digit_char(units)),
        );
        screen.set_line(1, &line);
        screen
    }

    /// Cooking screen: remaining time and current power level
    pub fn cooking(tens: u8, units: u8, power: u8) -> Self {
        let mut screen = Self::new();

        let mut time_line: String<PANEL_COLS> = String::new();
        let _ = write_to_string(
            &mut time_line,
            format_args!("Cooking: {}{} sec", tens, units),
        );
        screen.set_line(0, &time_line);

        let mut power_line: String<PANEL_COLS> = String::new();
        let _ = write_to_string(&mut power_line, format_args!("Power: {}", power));
        screen.set_line(1, &power_line);
        screen
    }

    /// Completion screen
    pub fn done() -> Self {
        let mut screen = Self::new();
        screen.set_line(0, "   ENJOY");
        screen.set_line(1, "Cooking Complete");
        screen
    }

    /// Abort screen, shown for the two-tick dwell
    pub fn aborted() -> Self {
        let mut screen = Self::new();
        screen.set_line(0, "  ABORTED");
        screen.set_line(1, "Returning...");
        screen
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Digit echo: entered digits render, empty slots stay blank
fn digit_char(digit: Option<u8>) -> char {
    match digit {
        Some(d) => (b'0' + d) as char,
        None => ' ',
    }
}

/// Helper to write formatted output to a heapless String
fn write_to_string(s: &mut String<PANEL_COLS>, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}
