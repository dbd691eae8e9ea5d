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

use crate::byte::{ is_token, is_visible_7bit };
use crate::{ Outcome,
             ParseError,
             ParseState,
             Phase,
             RequestHead,
             Tokenizer };

mod header;
mod reset;
mod version;

pub fn control_vec() -> Vec<u8> {
    (0..128).filter(|&x| x < 0x20 || x == 0x7F).collect::<Vec<u8>>()
}

pub fn non_token_vec() -> Vec<u8> {
    (0..255).filter(|&x| !is_token(x)).collect::<Vec<u8>>()
}

pub fn token_vec() -> Vec<u8> {
    (0..128).filter(|&x| is_token(x)).collect::<Vec<u8>>()
}

pub fn visible_7bit_vec() -> Vec<u8> {
    (0..128).filter(|&x| is_visible_7bit(x)).collect::<Vec<u8>>()
}

/// Outcome of feeding a sequence of chunks into a fresh state.
#[derive(Debug,PartialEq)]
pub enum Run {
    /// Head, and total bytes consumed.
    Completed(RequestHead, usize),

    /// Error, and the byte count at which it was raised.
    Failed(ParseError, usize),

    /// Every chunk was consumed. Phase, and total bytes consumed.
    Suspended(Phase, usize)
}

pub fn run(tokenizer: &Tokenizer, chunks: &[&[u8]]) -> Run {
    let mut state = ParseState::new();

    for chunk in chunks {
        match tokenizer.advance(&mut state, chunk) {
            Ok(Outcome::Suspended(length)) => {
                assert_eq!(length, chunk.len());
            },
            Ok(Outcome::Completed(head, length)) => {
                assert!(length <= chunk.len());
                assert!(state.is_complete());

                return Run::Completed(head, state.byte_count());
            },
            Err(error) => {
                assert!(state.is_dead());

                return Run::Failed(error, state.byte_count());
            }
        }
    }

    Run::Suspended(state.phase(), state.byte_count())
}

/// Parse `stream` whole, split at every offset, and one byte at a time. Every run must agree.
pub fn run_split(tokenizer: &Tokenizer, stream: &[u8]) -> Run {
    let whole = run(tokenizer, &[stream]);

    for n in 0..stream.len() + 1 {
        assert_eq!(run(tokenizer, &[&stream[..n], &stream[n..]]), whole,
                   "split at {}", n);
    }

    let bytes = stream.chunks(1).collect::<Vec<&[u8]>>();

    assert_eq!(run(tokenizer, &bytes), whole, "byte by byte");

    whole
}

/// Parse `stream` with the default tokenizer in every split, expecting a complete head.
pub fn head(stream: &[u8]) -> RequestHead {
    head_with(&Tokenizer::new(), stream)
}

pub fn head_with(tokenizer: &Tokenizer, stream: &[u8]) -> RequestHead {
    match run_split(tokenizer, stream) {
        Run::Completed(head, _) => head,
        other => panic!("expected a complete head, found {:?}", other)
    }
}

/// Parse `stream` with the default tokenizer in every split, expecting an error.
pub fn error(stream: &[u8]) -> (ParseError, usize) {
    error_with(&Tokenizer::new(), stream)
}

pub fn error_with(tokenizer: &Tokenizer, stream: &[u8]) -> (ParseError, usize) {
    match run_split(tokenizer, stream) {
        Run::Failed(error, byte_count) => (error, byte_count),
        other => panic!("expected an error, found {:?}", other)
    }
}

/// Feed `stream` as one chunk and expect suspension in `phase`.
pub fn assert_eos(tokenizer: &Tokenizer, state: &mut ParseState, stream: &[u8], phase: Phase) {
    assert_eq!(tokenizer.advance(state, stream), Ok(Outcome::Suspended(stream.len())));
    assert_eq!(state.phase(), phase);
}

/// Feed `stream` as one chunk and expect completion after `length` bytes.
pub fn assert_finished(tokenizer: &Tokenizer, state: &mut ParseState, stream: &[u8],
                       length: usize) -> RequestHead {
    match tokenizer.advance(state, stream) {
        Ok(Outcome::Completed(head, byte_count)) => {
            assert_eq!(byte_count, length);
            assert!(state.is_complete());
            head
        },
        other => panic!("expected a complete head, found {:?}", other)
    }
}
