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

//! Known token tables and prefix matching.
//!
//! Request methods and HTTP versions come from a small, fixed set. Rather than collecting them
//! into a buffer, the tokenizer walks a sorted table one byte at a time with a [`Candidate`]
//! cursor. A well-known token is produced straight from the table without allocating, and a
//! mismatch hands the bytes matched so far back to the caller for plain accumulation.
//!
//! [`Candidate`]: struct.Candidate.html

/// Known request methods, sorted.
pub static METHODS: &[&str] = &[
    "CONNECT",
    "DELETE",
    "GET",
    "HEAD",
    "OPTIONS",
    "PATCH",
    "POST",
    "PUT",
    "TRACE"
];

/// Known HTTP versions, sorted.
pub static VERSIONS: &[&str] = &[
    "HTTP/1.0",
    "HTTP/1.1"
];

// -------------------------------------------------------------------------------------------------

/// Prefix match cursor over a table of known tokens.
///
/// Invariant: `0 < position <= table[index].len()`, and the bytes consumed so far equal
/// `table[index][..position]`.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Candidate {
    /// Index of the current candidate within `table`.
    index: usize,

    /// Number of bytes matched.
    position: usize,

    /// Table of known tokens.
    table: &'static [&'static str]
}

impl Candidate {
    /// Start matching `byte` against `table`.
    ///
    /// Returns `None` when no known token begins with `byte`.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_tokenizer::candidate::{ Candidate, METHODS };
    ///
    /// let mut candidate = Candidate::start(METHODS, b'P').unwrap();
    ///
    /// assert!(candidate.advance(b'U'));
    /// assert!(candidate.advance(b'T'));
    /// assert!(candidate.is_exact());
    /// assert_eq!(candidate.token(), "PUT");
    ///
    /// assert!(Candidate::start(METHODS, b'X').is_none());
    /// ```
    pub fn start(table: &'static [&'static str], byte: u8) -> Option<Candidate> {
        table.iter()
             .position(|token| token.as_bytes()[0] == byte)
             .map(|index| Candidate{ index:    index,
                                     position: 1,
                                     table:    table })
    }

    /// Advance the cursor with `byte`.
    ///
    /// When `byte` disagrees with the current candidate, the next table entry sharing the matched
    /// prefix and continuing with `byte` becomes the candidate. Returns `false` when no entry
    /// matches, in which case the cursor is left untouched.
    pub fn advance(&mut self, byte: u8) -> bool {
        let current = self.table[self.index].as_bytes();

        if self.position < current.len() && current[self.position] == byte {
            self.position += 1;

            return true;
        }

        let prefix = &current[..self.position];

        // sorted table: entries sharing a prefix are adjacent, and follow the current one
        for (index, token) in self.table.iter().enumerate().skip(self.index + 1) {
            let token = token.as_bytes();

            if !token.starts_with(prefix) {
                break;
            }

            if token.len() > self.position && token[self.position] == byte {
                self.index     = index;
                self.position += 1;

                return true;
            }
        }

        false
    }

    /// Indicates that the whole candidate has been matched.
    pub fn is_exact(&self) -> bool {
        self.position == self.table[self.index].len()
    }

    /// Retrieve the bytes matched so far.
    pub fn matched(&self) -> &'static [u8] {
        &self.table[self.index].as_bytes()[..self.position]
    }

    /// Retrieve the number of bytes matched so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Retrieve the full candidate token.
    pub fn token(&self) -> &'static str {
        self.table[self.index]
    }
}
