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

//! Request head tokenizer.

use crate::byte::{ is_header_text,
                   is_token,
                   is_visible_7bit };
use crate::candidate::{ Candidate,
                        METHODS,
                        VERSIONS };
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::fsm::ParserValue;
use crate::head::{ Header,
                   RequestHead };
use crate::state::{ Line,
                    ParseState,
                    Phase };

use byte_slice::ByteStream;
use tracing::debug;

use std::borrow::Cow;
use std::{ mem,
           str };

// -------------------------------------------------------------------------------------------------

/// Convert `buffer` into a `String`, and clear it while keeping its allocation.
///
/// `byte` is reported when `buffer` is not valid UTF-8.
fn take_string(buffer: &mut Vec<u8>, byte: u8) -> Result<String, ParseError> {
    let string = match str::from_utf8(buffer) {
        Ok(string) => string.to_string(),
        Err(_) => exit_error!(InvalidEncoding, byte)
    };

    buffer.clear();

    Ok(string)
}

/// Convert ISO-8859-1 `buffer` into a `String`, and clear it while keeping its allocation.
fn take_latin1(buffer: &mut Vec<u8>) -> String {
    let string = buffer.iter().map(|&byte| byte as char).collect();

    buffer.clear();

    string
}

// -------------------------------------------------------------------------------------------------

/// Tokenizer outcomes.
#[derive(Clone,Debug,PartialEq)]
pub enum Outcome {
    /// The request head is complete.
    ///
    /// # Arguments
    ///
    /// **(0)**: The request head.
    ///
    /// **(1)**: The amount of chunk bytes that were processed. Bytes past this index belong to
    ///          the request body, or to the next pipelined request.
    Completed(RequestHead, usize),

    /// Additional data is expected. Call `advance()` again with the next chunk.
    ///
    /// # Arguments
    ///
    /// **(0)**: The amount of chunk bytes that were processed. This value will always match
    ///          the chunk length.
    Suspended(usize)
}

/// Parameter destinations.
#[derive(Clone,Copy,Debug,PartialEq)]
enum ParamTarget {
    /// Path parameters, after `;`.
    Path,

    /// Query parameters, after `?`.
    Query
}

// -------------------------------------------------------------------------------------------------

/// Request head tokenizer.
///
/// `Tokenizer` holds nothing but its configuration. All progress lives in the
/// [`ParseState`](../state/struct.ParseState.html) passed to [`advance()`](#method.advance), so a
/// single tokenizer can drive any number of connections.
///
/// # Examples
///
/// ```
/// use http_tokenizer::{ Outcome, ParseState, Tokenizer };
///
/// let tokenizer = Tokenizer::new();
/// let mut state = ParseState::new();
///
/// assert_eq!(tokenizer.advance(&mut state, b"GET /foo?bar=1 HT").unwrap(),
///            Outcome::Suspended(17));
///
/// match tokenizer.advance(&mut state, b"TP/1.1\r\nHost: example.com\r\n\r\n").unwrap() {
///     Outcome::Completed(head, length) => {
///         assert_eq!(length, 29);
///         assert_eq!(head.method(), "GET");
///         assert_eq!(head.path(), "/foo");
///         assert_eq!(head.query_params().first("bar"), Some("1"));
///         assert_eq!(head.version(), "HTTP/1.1");
///         assert_eq!(head.header("host"), Some("example.com"));
///     },
///     Outcome::Suspended(_) => panic!()
/// }
///
/// assert!(state.is_complete());
/// ```
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct Tokenizer {
    /// Limits and decoding options.
    config: ParserConfig
}

impl Tokenizer {
    /// Create a new `Tokenizer` with the default configuration.
    pub fn new() -> Tokenizer {
        Tokenizer{ config: ParserConfig::new() }
    }

    /// Create a new `Tokenizer` with `config`.
    pub fn with_config(config: ParserConfig) -> Tokenizer {
        Tokenizer{ config: config }
    }

    /// Retrieve the configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Consume `chunk`, continuing exactly where the previous call on `state` left off.
    ///
    /// If [`Outcome::Suspended`](enum.Outcome.html#variant.Suspended) is returned, the whole
    /// chunk has been consumed and additional data is expected.
    ///
    /// If [`Outcome::Completed`](enum.Outcome.html#variant.Completed) is returned, the request
    /// head has been parsed and `state` is complete. Call
    /// [`ParseState::reset()`](../state/struct.ParseState.html#method.reset) before parsing the
    /// next request on the same connection.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the current request, and leaves `state` dead until it is reset.
    /// Calling `advance()` on a dead or complete state returns
    /// [`ParseError::Dead`](../error/enum.ParseError.html#variant.Dead).
    pub fn advance(&self, state: &mut ParseState, chunk: &[u8]) -> Result<Outcome, ParseError> {
        if state.dead || state.is_complete() {
            return Err(ParseError::Dead);
        }

        let mut context = ByteStream::new(chunk);

        loop {
            match self.dispatch(state, &mut context) {
                Ok(ParserValue::Continue) => {
                },
                Ok(ParserValue::Eos) => {
                    state.byte_count += context.stream_index;

                    return Ok(Outcome::Suspended(context.stream_index));
                },
                Ok(ParserValue::Finished) => {
                    state.byte_count += context.stream_index;

                    let head = mem::replace(&mut state.head, RequestHead::new());

                    debug!(method  = head.method(),
                           path    = head.path(),
                           headers = head.headers().len(),
                           bytes   = state.byte_count,
                           "request head complete");

                    return Ok(Outcome::Completed(head, context.stream_index));
                },
                Err(error) => {
                    state.byte_count += context.stream_index;
                    state.dead        = true;

                    debug!(error  = %error,
                           phase  = ?state.phase,
                           offset = state.byte_count,
                           "request head failed");

                    return Err(error);
                }
            }
        }
    }

    #[inline]
    fn dispatch(&self, state: &mut ParseState, context: &mut ByteStream)
    -> Result<ParserValue, ParseError> {
        match state.phase {
            Phase::Verb         => self.verb(state, context),
            Phase::Path         => self.path(state, context),
            Phase::PathParams   => self.params(state, context, ParamTarget::Path),
            Phase::QueryParams  => self.params(state, context, ParamTarget::Query),
            Phase::Version      => self.version(state, context),
            Phase::AfterVersion => self.after_version(state, context),
            Phase::Header       => self.header(state, context),
            Phase::HeaderValue  => self.header_value(state, context),
            Phase::Complete     => exit_error!(Dead)
        }
    }

    // ---------------------------------------------------------------------------------------------
    // CANDIDATE MATCHING
    // ---------------------------------------------------------------------------------------------

    /// Feed `byte` to the prefix match cursor, falling back to plain accumulation when no known
    /// token in `table` matches.
    #[inline]
    fn match_candidate(&self, state: &mut ParseState, table: &'static [&'static str], byte: u8)
    -> Result<(), ParseError> {
        let limit = self.config.get_max_token_length();

        if let Some(ref mut candidate) = state.candidate {
            if candidate.advance(byte) {
                if candidate.position() > limit {
                    exit_error!(TokenTooLong, limit);
                }

                return Ok(());
            }
        } else if state.token.is_empty() {
            if let Some(candidate) = Candidate::start(table, byte) {
                if candidate.position() > limit {
                    exit_error!(TokenTooLong, limit);
                }

                state.candidate = Some(candidate);

                return Ok(());
            }
        }

        // unknown token, the bytes matched so far become the start of the plain token
        if let Some(candidate) = state.candidate.take() {
            state.token.extend_from_slice(candidate.matched());
        }

        push_bounded!(state.token, byte, limit);

        Ok(())
    }

    /// Finish the token produced by `match_candidate()`.
    ///
    /// A fully matched candidate is borrowed from its table. `byte` is the terminating byte, and
    /// is reported when the token is empty.
    #[inline]
    fn take_candidate(&self, state: &mut ParseState, byte: u8)
    -> Result<Cow<'static, str>, ParseError> {
        match state.candidate.take() {
            Some(candidate) => {
                if candidate.is_exact() {
                    return Ok(Cow::Borrowed(candidate.token()));
                }

                state.token.extend_from_slice(candidate.matched());
            },
            None => {
            }
        }

        if state.token.is_empty() {
            exit_error!(MalformedRequestLine, byte);
        }

        Ok(Cow::Owned(take_string(&mut state.token, byte)?))
    }

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE PHASES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn verb(&self, state: &mut ParseState, context: &mut ByteStream)
    -> Result<ParserValue, ParseError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            let byte = context.byte;

            if state.candidate.is_none() && state.token.is_empty() {
                // empty lines before the request line
                if state.line == Line::CarriageReturn {
                    if byte != b'\n' {
                        exit_error!(MalformedRequestLine, byte);
                    }

                    state.line = Line::Start;

                    continue;
                } else if byte == b'\r' {
                    state.line = Line::CarriageReturn;

                    continue;
                } else if byte == b'\n' {
                    continue;
                }
            }

            if byte == b' ' {
                state.head.method = self.take_candidate(state, byte)?;

                transition!(state, context, Path);
            } else if !is_token(byte) {
                exit_error!(MalformedRequestLine, byte);
            }

            self.match_candidate(state, METHODS, byte)?;
        }
    }

    #[inline]
    fn path(&self, state: &mut ParseState, context: &mut ByteStream)
    -> Result<ParserValue, ParseError> {
        let limit = self.config.get_max_token_length();

        loop {
            if state.raw.is_none() && state.decoder.is_idle() {
                // nothing decoded so far, plain bytes go straight into the token
                collect_bounded!(context, state.token, limit,
                       is_visible_7bit(context.byte)
                    && context.byte != b'%'
                    && context.byte != b';'
                    && context.byte != b'?'
                );
            }

            exit_if_eos!(context);
            bs_next!(context);

            let byte = context.byte;

            if state.decoder.in_escape() {
                self.path_escape(state, byte)?;

                continue;
            }

            match byte {
                b' ' => {
                    self.finish_path(state, byte)?;

                    transition!(state, context, Version);
                },
                b'?' => {
                    self.finish_path(state, byte)?;

                    transition!(state, context, QueryParams);
                },
                b';' => {
                    self.finish_path(state, byte)?;

                    transition!(state, context, PathParams);
                },
                b'%' if self.config.get_decode_url() => {
                    // decoding is about to change the path, keep the raw form from here on
                    if state.raw.is_none() {
                        state.raw = Some(state.token.clone());
                    }

                    if let Some(ref mut raw) = state.raw {
                        push_bounded!(raw, byte, limit);
                    }

                    state.decoder.begin_escape();
                },
                _ => {
                    if byte < 0x80 && !is_visible_7bit(byte) {
                        exit_error!(MalformedRequestLine, byte);
                    }

                    state.decoder.utf8(byte)?;

                    push_bounded!(state.token, byte, limit);

                    if let Some(ref mut raw) = state.raw {
                        push_bounded!(raw, byte, limit);
                    }
                }
            }
        }
    }

    /// Consume a hex digit of a percent-escape within the path.
    #[inline]
    fn path_escape(&self, state: &mut ParseState, byte: u8) -> Result<(), ParseError> {
        let limit = self.config.get_max_token_length();

        if let Some(ref mut raw) = state.raw {
            push_bounded!(raw, byte, limit);
        }

        let decoded = match state.decoder.escape_digit(byte)? {
            Some(decoded) => decoded,
            None => return Ok(())
        };

        state.decoder.utf8(decoded)?;

        if decoded == b'/' && !self.config.get_allow_encoded_slash() {
            // keep the escape as sent
            if let Some(ref raw) = state.raw {
                extend_bounded!(state.token, &raw[raw.len() - 3..], limit);
            }

            // nothing decoded so far
            if state.raw.as_ref().map_or(false, |raw| raw[..] == state.token[..]) {
                state.raw = None;
            }

            return Ok(());
        }

        push_bounded!(state.token, decoded, limit);

        Ok(())
    }

    /// Store the decoded path, along with the raw path when they differ.
    #[inline]
    fn finish_path(&self, state: &mut ParseState, byte: u8) -> Result<(), ParseError> {
        state.decoder.finish(byte)?;

        if state.token.is_empty() {
            exit_error!(MalformedRequestLine, byte);
        }

        state.head.raw_path = match state.raw.take() {
            Some(ref raw) if raw[..] != state.token[..] => {
                Some(String::from_utf8_lossy(raw).into_owned())
            },
            _ => {
                None
            }
        };

        state.head.path = take_string(&mut state.token, byte)?;

        Ok(())
    }

    /// Parse path parameters or query parameters.
    #[inline]
    fn params(&self, state: &mut ParseState, context: &mut ByteStream, target: ParamTarget)
    -> Result<ParserValue, ParseError> {
        let limit = self.config.get_max_token_length();

        loop {
            exit_if_eos!(context);
            bs_next!(context);

            let byte = context.byte;

            if target == ParamTarget::Query && byte != b' ' {
                push_bounded!(state.query, byte, limit);
            }

            if state.decoder.in_escape() {
                if let Some(decoded) = state.decoder.escape_digit(byte)? {
                    state.decoder.utf8(decoded)?;

                    push_bounded!(state.token, decoded, limit);
                }

                continue;
            }

            match byte {
                b' ' => {
                    self.flush_param(state, target, byte)?;

                    if target == ParamTarget::Query {
                        state.head.query_string = String::from_utf8_lossy(&state.query)
                                                  .into_owned();

                        state.query.clear();
                    }

                    transition!(state, context, Version);
                },
                b'?' if target == ParamTarget::Path => {
                    self.flush_param(state, target, byte)?;

                    transition!(state, context, QueryParams);
                },
                b';' if target == ParamTarget::Path => {
                    self.flush_param(state, target, byte)?;
                },
                b'&' if target == ParamTarget::Query => {
                    self.flush_param(state, target, byte)?;
                },
                b'=' if state.pending_key.is_none() => {
                    state.decoder.finish(byte)?;
                    state.pending_key = Some(take_string(&mut state.token, byte)?);
                },
                b'%' => {
                    state.decoder.begin_escape();
                },
                b'+' if target == ParamTarget::Query => {
                    state.decoder.utf8(b' ')?;

                    push_bounded!(state.token, b' ', limit);
                },
                _ => {
                    if byte < 0x80 && !is_visible_7bit(byte) {
                        exit_error!(MalformedRequestLine, byte);
                    }

                    state.decoder.utf8(byte)?;

                    push_bounded!(state.token, byte, limit);
                }
            }
        }
    }

    /// Store the parameter that `byte` terminates.
    ///
    /// A parameter without `=` is stored with an empty value. A parameter with an empty name is
    /// skipped.
    #[inline]
    fn flush_param(&self, state: &mut ParseState, target: ParamTarget, byte: u8)
    -> Result<(), ParseError> {
        state.decoder.finish(byte)?;

        let token = take_string(&mut state.token, byte)?;

        let (key, value) = match state.pending_key.take() {
            Some(key) => (key, token),
            None      => (token, String::new())
        };

        if key.is_empty() {
            return Ok(());
        }

        let max = self.config.get_max_parameters();

        if state.parameter_count >= max {
            exit_error!(TooManyParameters, max);
        }

        state.parameter_count += 1;

        match target {
            ParamTarget::Path  => state.head.path_params.append(key, value),
            ParamTarget::Query => state.head.query_params.append(key, value)
        }

        Ok(())
    }

    #[inline]
    fn version(&self, state: &mut ParseState, context: &mut ByteStream)
    -> Result<ParserValue, ParseError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            let byte = context.byte;

            match byte {
                b' ' | b'\r' | b'\n' => {
                    state.head.version = self.take_candidate(state, byte)?;

                    if byte == b'\n' {
                        state.line = Line::Start;

                        transition!(state, context, Header);
                    } else if byte == b'\r' {
                        state.line = Line::CarriageReturn;
                    } else {
                        state.line = Line::Content;
                    }

                    transition!(state, context, AfterVersion);
                },
                _ => {
                    if !is_visible_7bit(byte) {
                        exit_error!(MalformedRequestLine, byte);
                    }

                    self.match_candidate(state, VERSIONS, byte)?;
                }
            }
        }
    }

    #[inline]
    fn after_version(&self, state: &mut ParseState, context: &mut ByteStream)
    -> Result<ParserValue, ParseError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            let byte = context.byte;

            if state.line == Line::CarriageReturn {
                if byte != b'\n' {
                    exit_error!(MalformedRequestLine, byte);
                }

                state.line = Line::Start;

                transition!(state, context, Header);
            }

            match byte {
                b' ' | b'\t' => {
                },
                b'\r' => {
                    state.line = Line::CarriageReturn;
                },
                b'\n' => {
                    state.line = Line::Start;

                    transition!(state, context, Header);
                },
                _ => {
                    exit_error!(MalformedRequestLine, byte);
                }
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // HEADER PHASES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn header(&self, state: &mut ParseState, context: &mut ByteStream)
    -> Result<ParserValue, ParseError> {
        let limit = self.config.get_max_token_length();

        loop {
            if state.line == Line::Content {
                collect_bounded!(context, state.token, limit, is_token(context.byte));
            }

            exit_if_eos!(context);
            bs_next!(context);

            let byte = context.byte;

            match state.line {
                Line::CarriageReturn => {
                    if byte != b'\n' {
                        exit_error!(MalformedHeader, byte);
                    }

                    self.commit_header(state);

                    exit_finished!(state);
                },
                Line::Start => {
                    match byte {
                        b'\r' => {
                            state.line = Line::CarriageReturn;
                        },
                        b'\n' => {
                            self.commit_header(state);

                            exit_finished!(state);
                        },
                        b' ' | b'\t' => {
                            // folded continuation of the previous header value
                            if state.pending_header.is_none() {
                                exit_error!(MalformedHeader, byte);
                            }

                            if !state.token.is_empty() {
                                push_bounded!(state.token, b' ', limit);
                            }

                            state.line = Line::Leading;

                            transition!(state, context, HeaderValue);
                        },
                        _ => {
                            self.commit_header(state);

                            if !is_token(byte) {
                                exit_error!(MalformedHeader, byte);
                            }

                            push_bounded!(state.token, byte, limit);

                            state.line = Line::Content;
                        }
                    }
                },
                Line::Content | Line::Leading => {
                    if byte != b':' {
                        exit_error!(MalformedHeader, byte);
                    }

                    let max = self.config.get_max_headers();

                    if state.header_count >= max {
                        exit_error!(TooManyHeaders, max);
                    }

                    state.header_count   += 1;
                    state.pending_header  = Some(take_latin1(&mut state.token));
                    state.line            = Line::Leading;

                    transition!(state, context, HeaderValue);
                }
            }
        }
    }

    #[inline]
    fn header_value(&self, state: &mut ParseState, context: &mut ByteStream)
    -> Result<ParserValue, ParseError> {
        let limit = self.config.get_max_token_length();

        loop {
            if state.line == Line::Content {
                collect_bounded!(context, state.token, limit, is_header_text(context.byte));
            }

            exit_if_eos!(context);
            bs_next!(context);

            let byte = context.byte;

            if state.line == Line::CarriageReturn {
                if byte != b'\n' {
                    exit_error!(MalformedHeader, byte);
                }

                trim_trailing_space!(state.token);

                state.line = Line::Start;

                transition!(state, context, Header);
            }

            match byte {
                b'\r' => {
                    state.line = Line::CarriageReturn;
                },
                b'\n' => {
                    trim_trailing_space!(state.token);

                    state.line = Line::Start;

                    transition!(state, context, Header);
                },
                b' ' | b'\t' if state.line == Line::Leading => {
                },
                _ => {
                    if !is_header_text(byte) {
                        exit_error!(MalformedHeader, byte);
                    }

                    push_bounded!(state.token, byte, limit);

                    state.line = Line::Content;
                }
            }
        }
    }

    /// Store the pending header, now that its value can no longer be continued.
    #[inline]
    fn commit_header(&self, state: &mut ParseState) {
        if let Some(name) = state.pending_header.take() {
            let value = take_latin1(&mut state.token);

            state.head.headers.push(Header{ name:  name,
                                            value: value });
        }
    }
}
