//! Escaped-codepoint notation, as used in the keys of the properties file.
//!
//! An operator is spelled as a run of groups like `\u2264`: a backslash, a `u` or `U` marker and
//! exactly four hexadecimal digits. Every group is one UTF-16 code unit.
use std::fmt::{self, Write};

/// Length of one `\uNNNN` group.
pub const GROUP_LEN: usize = 6;

/// The character that could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// Byte offset of the character in the escaped text.
    pub offset: usize,
    pub found: char,
    expected: Expected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    Backslash,
    Marker,
    HexDigit,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = match self.expected {
            Expected::Backslash => r"'\'",
            Expected::Marker => "'u' or 'U'",
            Expected::HexDigit => "a hexadecimal digit",
        };
        write!(
            f,
            "expected {} at offset {}, got {:?}",
            expected, self.offset, self.found
        )
    }
}

impl std::error::Error for DecodeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Backslash,
    Marker,
    /// Number of hex digits already consumed for the current group.
    Hex(u8),
}

/// Decode a run of `\uNNNN` groups into UTF-16 code units.
///
/// Input that stops in the middle of a group is not an error: the complete groups are returned
/// and the partial one is dropped.
pub fn decode(escaped: &str) -> Result<Vec<u16>, DecodeError> {
    let mut codepoints = Vec::with_capacity(escaped.len() / GROUP_LEN);
    let mut state = State::Backslash;
    let mut value: u16 = 0;
    for (offset, ch) in escaped.char_indices() {
        state = match state {
            State::Backslash if ch == '\\' => State::Marker,
            State::Marker if matches!(ch, 'u' | 'U') => {
                value = 0;
                State::Hex(0)
            }
            State::Hex(digits) => {
                let Some(digit) = ch.to_digit(16) else {
                    return Err(DecodeError {
                        offset,
                        found: ch,
                        expected: Expected::HexDigit,
                    });
                };
                value = (value << 4) | digit as u16;
                if digits == 3 {
                    codepoints.push(value);
                    State::Backslash
                } else {
                    State::Hex(digits + 1)
                }
            }
            State::Backslash | State::Marker => {
                let expected = if state == State::Backslash {
                    Expected::Backslash
                } else {
                    Expected::Marker
                };
                return Err(DecodeError {
                    offset,
                    found: ch,
                    expected,
                });
            }
        };
    }
    if state != State::Backslash {
        log::debug!("dropping incomplete codepoint group at the end of {escaped:?}");
    }
    Ok(codepoints)
}

/// Spell code units as `\uNNNN` groups with upper-case hex digits.
pub fn encode(codepoints: &[u16]) -> String {
    let mut out = String::with_capacity(codepoints.len() * GROUP_LEN);
    for cp in codepoints {
        // Writing to a `String` cannot fail.
        let _ = write!(out, "\\u{cp:04X}");
    }
    out
}
