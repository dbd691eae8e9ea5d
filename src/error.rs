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

//! Tokenizer errors.

use std::{ error,
           fmt };

/// Tokenizer error messages.
///
/// Every error is fatal to the current request. The [`ParseState`](../state/struct.ParseState.html)
/// that produced it must be reset before it is used again.
#[derive(Clone,Copy,PartialEq)]
pub enum ParseError {
    /// The parse state has already failed or completed, and has not been reset.
    Dead,

    /// Invalid percent-escape or UTF-8 sequence on byte `u8`.
    InvalidEncoding(u8),

    /// Invalid header line on byte `u8`.
    MalformedHeader(u8),

    /// Invalid request line on byte `u8`.
    MalformedRequestLine(u8),

    /// A token exceeded the maximum length `usize`.
    TokenTooLong(usize),

    /// The request exceeded the maximum header count `usize`.
    TooManyHeaders(usize),

    /// The request exceeded the maximum path and query parameter count `usize`.
    TooManyParameters(usize)
}

impl ParseError {
    /// Format this for debug and display purposes.
    fn format(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Dead => {
                write!(formatter, "Parse state is dead")
            },
            ParseError::InvalidEncoding(byte) => {
                write!(formatter, "Invalid URL encoding on byte {}", byte)
            },
            ParseError::MalformedHeader(byte) => {
                write!(formatter, "Malformed header on byte {}", byte)
            },
            ParseError::MalformedRequestLine(byte) => {
                write!(formatter, "Malformed request line on byte {}", byte)
            },
            ParseError::TokenTooLong(limit) => {
                write!(formatter, "Token exceeds maximum length of {} bytes", limit)
            },
            ParseError::TooManyHeaders(limit) => {
                write!(formatter, "Request exceeds maximum of {} headers", limit)
            },
            ParseError::TooManyParameters(limit) => {
                write!(formatter, "Request exceeds maximum of {} parameters", limit)
            }
        }
    }

    /// Retrieve the variant name.
    fn name(&self) -> &'static str {
        match *self {
            ParseError::Dead                    => "Dead",
            ParseError::InvalidEncoding(_)      => "InvalidEncoding",
            ParseError::MalformedHeader(_)      => "MalformedHeader",
            ParseError::MalformedRequestLine(_) => "MalformedRequestLine",
            ParseError::TokenTooLong(_)         => "TokenTooLong",
            ParseError::TooManyHeaders(_)       => "TooManyHeaders",
            ParseError::TooManyParameters(_)    => "TooManyParameters"
        }
    }
}

impl fmt::Debug for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "ParseError::{}(", self.name())?;
        self.format(formatter)?;
        write!(formatter, ")")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.format(formatter)
    }
}

impl error::Error for ParseError {
}
