// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+

//! URL decoding sub-state machine.
//!
//! Percent-escapes are decoded in place as the tokenizer scans a token. Every decoded byte, and
//! every raw byte with the high bit set, is fed through a UTF-8 validator that accumulates the
//! current code point. Both halves keep their progress in [`UrlDecoder`], so an escape or a
//! multi-byte sequence may be split across any number of chunks.
//!
//! [`UrlDecoder`]: struct.UrlDecoder.html

use crate::byte::hex_to_byte;
use crate::error::ParseError;

/// Percent-escape progress.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum EscapeState {
    /// Not within an escape.
    Idle,

    /// `%` has been consumed, the high hex digit is expected.
    Percent,

    /// The high hex digit has been consumed, the low hex digit is expected.
    High(u8)
}

/// URL decoder state.
///
/// Only meaningful while a token that permits escapes is being read. Outside of an escape or
/// UTF-8 sequence, the decoder is idle and equal to `UrlDecoder::new()`.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct UrlDecoder {
    /// Code point accumulated from the UTF-8 sequence so far.
    codepoint: u32,

    /// Percent-escape progress.
    escape: EscapeState,

    /// Total length of the current UTF-8 sequence.
    length: u8,

    /// Continuation bytes still expected.
    remaining: u8
}

impl UrlDecoder {
    /// Create a new idle `UrlDecoder`.
    pub fn new() -> UrlDecoder {
        UrlDecoder{ codepoint: 0,
                    escape:    EscapeState::Idle,
                    length:    0,
                    remaining: 0 }
    }

    /// Indicates that neither an escape nor a UTF-8 sequence is in progress.
    pub fn is_idle(&self) -> bool {
        self.escape == EscapeState::Idle && self.remaining == 0
    }

    /// Indicates that a percent-escape is in progress.
    pub fn in_escape(&self) -> bool {
        self.escape != EscapeState::Idle
    }

    /// Retrieve the code point accumulated so far.
    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// Retrieve the percent-escape progress.
    pub fn escape(&self) -> EscapeState {
        self.escape
    }

    /// Begin a percent-escape.
    pub fn begin_escape(&mut self) {
        self.escape = EscapeState::Percent;
    }

    /// Feed a hex digit of the current percent-escape.
    ///
    /// Returns the decoded byte once both digits have been consumed. The decoded byte has not
    /// yet been fed through [`utf8()`](#method.utf8).
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidEncoding`](../error/enum.ParseError.html#variant.InvalidEncoding)
    ///   when `byte` is not a hex digit.
    pub fn escape_digit(&mut self, byte: u8) -> Result<Option<u8>, ParseError> {
        let digit = match hex_to_byte(byte) {
            Some(digit) => digit,
            None => exit_error!(InvalidEncoding, byte)
        };

        match self.escape {
            EscapeState::Percent => {
                self.escape = EscapeState::High(digit);

                Ok(None)
            },
            EscapeState::High(high) => {
                self.escape = EscapeState::Idle;

                Ok(Some(high << 4 | digit))
            },
            EscapeState::Idle => {
                exit_error!(InvalidEncoding, byte)
            }
        }
    }

    /// Feed a decoded or raw byte through the UTF-8 validator.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidEncoding`](../error/enum.ParseError.html#variant.InvalidEncoding)
    ///   on an invalid lead byte, a missing or unexpected continuation byte, an overlong
    ///   encoding, a surrogate, or a code point beyond `U+10FFFF`.
    pub fn utf8(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.remaining == 0 {
            match byte {
                0x00..=0x7F => {
                },
                0xC2..=0xDF => {
                    self.start(byte & 0x1F, 2);
                },
                0xE0..=0xEF => {
                    self.start(byte & 0x0F, 3);
                },
                0xF0..=0xF4 => {
                    self.start(byte & 0x07, 4);
                },
                _ => {
                    exit_error!(InvalidEncoding, byte);
                }
            }

            return Ok(());
        }

        if byte & 0xC0 != 0x80 {
            exit_error!(InvalidEncoding, byte);
        }

        self.codepoint  = self.codepoint << 6 | (byte & 0x3F) as u32;
        self.remaining -= 1;

        if self.remaining > 0 {
            return Ok(());
        }

        let valid = match self.length {
            2 => self.codepoint >= 0x80,
            3 => self.codepoint >= 0x800
                 && (self.codepoint < 0xD800 || self.codepoint > 0xDFFF),
            _ => self.codepoint >= 0x10000 && self.codepoint <= 0x10FFFF
        };

        self.codepoint = 0;
        self.length    = 0;

        if !valid {
            exit_error!(InvalidEncoding, byte);
        }

        Ok(())
    }

    /// Verify that the token ended on a sequence boundary.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidEncoding`](../error/enum.ParseError.html#variant.InvalidEncoding)
    ///   on terminating `byte` when an escape or UTF-8 sequence is incomplete.
    pub fn finish(&mut self, byte: u8) -> Result<(), ParseError> {
        if !self.is_idle() {
            exit_error!(InvalidEncoding, byte);
        }

        Ok(())
    }

    /// Reset the decoder back to its idle state.
    pub fn reset(&mut self) {
        *self = UrlDecoder::new();
    }

    fn start(&mut self, bits: u8, length: u8) {
        self.codepoint = bits as u32;
        self.length    = length;
        self.remaining = length - 1;
    }
}

impl Default for UrlDecoder {
    fn default() -> UrlDecoder {
        UrlDecoder::new()
    }
}
