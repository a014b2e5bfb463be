//! Key events from the front panel keypad

/// Highest digit key code on the wire
pub const MAX_DIGIT: u8 = 9;

// Wire format state values
const STATE_UP: u8 = 0x00;
const STATE_DOWN: u8 = 0x01;

/// A keypad event reported by the front panel
///
/// The panel reports both edges of every press. Cook-time entry accepts a
/// digit only on its `Up` edge, which is the release acknowledgment the
/// controller waits for between the two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// Digit key pressed (0-9)
    Down(u8),
    /// Digit key released (0-9)
    Up(u8),
}

impl KeyEvent {
    /// Parse an event from its two-byte wire payload `[code, state]`
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() != 2 {
            return None;
        }
        let code = payload[0];
        if code > MAX_DIGIT {
            return None;
        }
        match payload[1] {
            STATE_DOWN => Some(KeyEvent::Down(code)),
            STATE_UP => Some(KeyEvent::Up(code)),
            _ => None,
        }
    }

    /// Convert to the two-byte wire payload
    pub fn to_payload(self) -> [u8; 2] {
        match self {
            KeyEvent::Down(code) => [code, STATE_DOWN],
            KeyEvent::Up(code) => [code, STATE_UP],
        }
    }

    /// The digit carried by this event
    pub fn digit(&self) -> u8 {
        match self {
            KeyEvent::Down(code) | KeyEvent::Up(code) => *code,
        }
    }

    /// Returns true if this is a release edge
    pub fn is_release(&self) -> bool {
        matches!(self, KeyEvent::Up(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for digit in 0..=MAX_DIGIT {
            for event in [KeyEvent::Down(digit), KeyEvent::Up(digit)] {
                let payload = event.to_payload();
                let parsed = KeyEvent::from_payload(&payload).unwrap();
                assert_eq!(event, parsed);
            }
        }
    }

    #[test]
    fn test_digit_accessor() {
        assert_eq!(KeyEvent::Down(7).digit(), 7);
        assert_eq!(KeyEvent::Up(0).digit(), 0);
    }

    #[test]
    fn test_is_release() {
        assert!(KeyEvent::Up(3).is_release());
        assert!(!KeyEvent::Down(3).is_release());
    }

    #[test]
    fn test_rejects_non_digit_code() {
        assert!(KeyEvent::from_payload(&[10, 1]).is_none());
        assert!(KeyEvent::from_payload(&[0xFF, 0]).is_none());
    }

    #[test]
    fn test_rejects_bad_state_and_length() {
        assert!(KeyEvent::from_payload(&[5, 2]).is_none());
        assert!(KeyEvent::from_payload(&[5]).is_none());
        assert!(KeyEvent::from_payload(&[5, 1, 0]).is_none());
    }
}
