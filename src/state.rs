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

//! Parse state record.

use crate::candidate::Candidate;
use crate::decode::UrlDecoder;
use crate::head::RequestHead;

use std::fmt;

/// Request head parsing phases.
///
/// These phases are in the order that they are processed.
#[derive(Clone,Copy,Debug,PartialEq)]
#[repr(u8)]
pub enum Phase {
    /// Parsing request method.
    Verb,

    /// Parsing request path.
    Path,

    /// Parsing path parameters, after `;`.
    PathParams,

    /// Parsing query parameters, after `?`.
    QueryParams,

    /// Parsing HTTP version.
    Version,

    /// Parsing the end of the request line.
    AfterVersion,

    /// Parsing header name, or the first byte of a header line.
    Header,

    /// Parsing header value.
    HeaderValue,

    /// Parsing has finished successfully.
    Complete
}

impl fmt::Display for Phase {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

// -------------------------------------------------------------------------------------------------

/// Position within the current line.
///
/// Carried across chunk boundaries by the line-oriented phases.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Line {
    /// No byte of the line has been consumed.
    ///
    /// In `Header`, the next byte decides between a new header, a folded continuation of the
    /// previous value, and the blank line ending the head.
    Start,

    /// Skipping white space before a header value.
    Leading,

    /// Within line content.
    Content,

    /// A carriage return has been consumed, and a line feed must follow.
    CarriageReturn
}

// -------------------------------------------------------------------------------------------------

/// Resumable request head parse state.
///
/// One `ParseState` belongs to one connection, and is reused for every request on that
/// connection. It is only ever mutated by [`Tokenizer::advance()`], which receives it by
/// exclusive reference, and it must be [`reset()`] between requests and after any error.
///
/// Several fields are only meaningful during specific phases, as documented on each of them.
/// After `reset()`, the state is equal to `ParseState::new()`.
///
/// [`Tokenizer::advance()`]: ../tokenizer/struct.Tokenizer.html#method.advance
/// [`reset()`]: #method.reset
#[derive(Clone,Debug,PartialEq)]
pub struct ParseState {
    /// Bytes consumed for the current request.
    pub(crate) byte_count: usize,

    /// Prefix match cursor. `Verb` and `Version` only.
    pub(crate) candidate: Option<Candidate>,

    /// Indicates that an error was returned, and the state must be reset.
    pub(crate) dead: bool,

    /// URL decoder. `Path`, `PathParams` and `QueryParams` only.
    pub(crate) decoder: UrlDecoder,

    /// Request head being assembled.
    pub(crate) head: RequestHead,

    /// Headers started in the current request.
    pub(crate) header_count: usize,

    /// Position within the current line. Set when `Version` ends, and read by `Verb`,
    /// `AfterVersion`, `Header` and `HeaderValue`.
    pub(crate) line: Line,

    /// Path and query parameters stored in the current request.
    pub(crate) parameter_count: usize,

    /// Name of the header whose value is being read, or whose value may still be continued by a
    /// folded line. `Header` and `HeaderValue` only.
    pub(crate) pending_header: Option<String>,

    /// Name of the parameter whose value is being read. `PathParams` and `QueryParams` only.
    pub(crate) pending_key: Option<String>,

    /// Current phase.
    pub(crate) phase: Phase,

    /// Raw query string. `QueryParams` only.
    pub(crate) query: Vec<u8>,

    /// Raw path, present only once decoding has made it differ from `token`. `Path` only.
    pub(crate) raw: Option<Vec<u8>>,

    /// Current token, decoded where the phase decodes.
    pub(crate) token: Vec<u8>
}

impl ParseState {
    /// Create a new `ParseState`.
    pub fn new() -> ParseState {
        ParseState{ byte_count:      0,
                    candidate:       None,
                    dead:            false,
                    decoder:         UrlDecoder::new(),
                    head:            RequestHead::new(),
                    header_count:    0,
                    line:            Line::Start,
                    parameter_count: 0,
                    pending_header:  None,
                    pending_key:     None,
                    phase:           Phase::Verb,
                    query:           Vec::new(),
                    raw:             None,
                    token:           Vec::new() }
    }

    /// Retrieve the number of bytes consumed for the current request.
    ///
    /// After an error, this includes the offending byte.
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Retrieve the prefix match cursor.
    pub fn candidate(&self) -> Option<&Candidate> {
        self.candidate.as_ref()
    }

    /// Retrieve the request head assembled so far.
    ///
    /// Once the head is complete, it is handed to the caller by
    /// [`Tokenizer::advance()`](../tokenizer/struct.Tokenizer.html#method.advance) and this is
    /// empty.
    pub fn head(&self) -> &RequestHead {
        &self.head
    }

    /// Retrieve the number of headers started in the current request.
    pub fn header_count(&self) -> usize {
        self.header_count
    }

    /// Indicates that the request head has been completely parsed.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Indicates that an error was returned, and the state must be reset before reuse.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Retrieve the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Retrieve the raw path buffer.
    ///
    /// This is `Some` only while the path is being parsed and decoding has changed it.
    pub fn raw_buffer(&self) -> Option<&[u8]> {
        self.raw.as_ref().map(|raw| raw.as_slice())
    }

    /// Retrieve the current token buffer.
    pub fn token_buffer(&self) -> &[u8] {
        &self.token
    }

    /// Reset the state back to its initial state, ready for the next request.
    ///
    /// Buffers keep their allocations, except the raw path buffer which is dropped.
    pub fn reset(&mut self) {
        self.byte_count      = 0;
        self.candidate       = None;
        self.dead            = false;
        self.header_count    = 0;
        self.line            = Line::Start;
        self.parameter_count = 0;
        self.pending_header  = None;
        self.pending_key     = None;
        self.phase           = Phase::Verb;
        self.raw             = None;
        self.head            = RequestHead::new();

        self.decoder.reset();
        self.query.clear();
        self.token.clear();
    }

    /// Mark the request head as complete.
    pub(crate) fn mark_complete(&mut self) {
        self.phase = Phase::Complete;
    }
}

impl Default for ParseState {
    fn default() -> ParseState {
        ParseState::new()
    }
}
