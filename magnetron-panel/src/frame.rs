//! Frame encoding and decoding for the front panel link.
//!
//! Frame format:
//! - START (1 byte): 0xA5 synchronization byte
//! - LENGTH (1 byte): payload length (0-18)
//! - TYPE (1 byte): message type identifier
//! - PAYLOAD (0-18 bytes): type-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, TYPE, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xA5;

/// Maximum payload size in bytes (row + length + one full LCD row)
pub const MAX_PAYLOAD_SIZE: usize = 18;

/// Maximum complete frame size (START + LENGTH + TYPE + MAX_PAYLOAD + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 1 + 1 + 1 + MAX_PAYLOAD_SIZE + 1;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// Invalid frame structure
    InvalidFrame,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub msg_type: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a new frame with the given message type and payload
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            msg_type,
            payload: payload_vec,
        })
    }

    /// Create a frame with no payload
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    /// Calculate checksum over frame data
    fn calculate_checksum(length: u8, msg_type: u8, payload: &[u8]) -> u8 {
        let mut checksum = length ^ msg_type;
        for &byte in payload {
            checksum ^= byte;
        }
        checksum
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = 4 + self.payload.len(); // START + LENGTH + TYPE + payload + CHECKSUM
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        let checksum = Self::calculate_checksum(length, self.msg_type, &self.payload);

        buffer[0] = FRAME_START;
        buffer[1] = length;
        buffer[2] = self.msg_type;
        buffer[3..3 + self.payload.len()].copy_from_slice(&self.payload);
        buffer[3 + self.payload.len()] = checksum;

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}

/// State machine for parsing incoming frames
///
/// Fed one byte at a time; resynchronizes on the START byte after garbage
/// or a failed checksum, so a corrupted frame costs at most itself.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    buffer: Vec<u8, MAX_PAYLOAD_SIZE>,
    expected_length: u8,
    msg_type: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for START byte
    WaitingForStart,
    /// Got START, waiting for LENGTH
    WaitingForLength,
    /// Got LENGTH, waiting for TYPE
    WaitingForType,
    /// Reading payload bytes
    ReadingPayload,
    /// Waiting for CHECKSUM
    WaitingForChecksum,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForStart,
            buffer: Vec::new(),
            expected_length: 0,
            msg_type: 0,
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForStart;
        self.buffer.clear();
        self.expected_length = 0;
        self.msg_type = 0;
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on parse error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::WaitingForStart => {
                if byte == FRAME_START {
                    self.state = ParseState::WaitingForLength;
                }
                // Silently ignore non-START bytes while waiting
                Ok(None)
            }
            ParseState::WaitingForLength => {
                if byte > MAX_PAYLOAD_SIZE as u8 {
                    self.reset();
                    return Err(FrameError::InvalidFrame);
                }
                self.expected_length = byte;
                self.state = ParseState::WaitingForType;
                Ok(None)
            }
            ParseState::WaitingForType => {
                self.msg_type = byte;
                if self.expected_length == 0 {
                    self.state = ParseState::WaitingForChecksum;
                } else {
                    self.buffer.clear();
                    self.state = ParseState::ReadingPayload;
                }
                Ok(None)
            }
            ParseState::ReadingPayload => {
                // Cannot overflow: expected_length was bounds-checked
                let _ = self.buffer.push(byte);
                if self.buffer.len() == self.expected_length as usize {
                    self.state = ParseState::WaitingForChecksum;
                }
                Ok(None)
            }
            ParseState::WaitingForChecksum => {
                let expected_checksum =
                    Frame::calculate_checksum(self.expected_length, self.msg_type, &self.buffer);

                if byte != expected_checksum {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }

                let frame = Frame {
                    msg_type: self.msg_type,
                    payload: self.buffer.clone(),
                };

                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_frame_survives_the_wire(
            msg_type in any::<u8>(),
            payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
        ) {
            let frame = Frame::new(msg_type, &payload).unwrap();
            let encoded = frame.encode_to_vec().unwrap();

            let mut parser = FrameParser::new();
            let parsed = parser.feed_bytes(&encoded).unwrap().unwrap();
            prop_assert_eq!(parsed.msg_type, msg_type);
            prop_assert_eq!(parsed.payload.as_slice(), payload.as_slice());
        }

        #[test]
        fn noise_never_yields_a_frame_without_valid_checksum(
            noise in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let mut parser = FrameParser::new();
            for byte in noise {
                if let Ok(Some(frame)) = parser.feed(byte) {
                    // Whatever noise produced must at least be internally
                    // consistent
                    let reencoded = frame.encode_to_vec().unwrap();
                    let mut reparser = FrameParser::new();
                    prop_assert!(reparser.feed_bytes(&reencoded).unwrap().is_some());
                }
            }

            // The parser must come back for a clean frame after any noise
            parser.reset();
            let clean = Frame::new(0x01, &[5, 1]).unwrap().encode_to_vec().unwrap();
            prop_assert!(parser.feed_bytes(&clean).unwrap().is_some());
        }
    }
}
