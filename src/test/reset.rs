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

use crate::test::*;
use crate::{ Outcome, ParseError, ParseState, Phase, Tokenizer };

#[test]
fn after_complete() {
    let tokenizer = Tokenizer::new();
    let mut state = ParseState::new();

    assert_finished(&tokenizer, &mut state, b"GET /?a=1 HTTP/1.1\r\nA: b\r\n\r\n", 28);

    assert_eq!(state.phase(), Phase::Complete);
    assert_eq!(tokenizer.advance(&mut state, b"GET"), Err(ParseError::Dead));

    state.reset();

    assert_eq!(state, ParseState::new());
}

#[test]
fn mid_request() {
    let tokenizer = Tokenizer::new();

    // every phase, with as much in flight as possible
    for stream in &[&b"PO"[..],
                    &b"GET /a%2"[..],
                    &b"GET /a%C3"[..],
                    &b"GET /;k=v"[..],
                    &b"GET /?k=%e"[..],
                    &b"GET / HTTP/1."[..],
                    &b"GET / HTTP/1.1\r"[..],
                    &b"GET / HTTP/1.1\r\nHost: a\r\n"[..],
                    &b"GET / HTTP/1.1\r\nHost: a\r"[..],
                    &b"GET / HTTP/1.1\r\nHo"[..]] {
        let mut state = ParseState::new();

        assert_eq!(tokenizer.advance(&mut state, stream),
                   Ok(Outcome::Suspended(stream.len())));

        assert!(state != ParseState::new());

        state.reset();

        assert_eq!(state, ParseState::new());
    }
}

#[test]
fn after_error() {
    let tokenizer = Tokenizer::new();
    let mut state = ParseState::new();

    assert_eq!(tokenizer.advance(&mut state, b"GET /a%zz"),
               Err(ParseError::InvalidEncoding(b'z')));

    assert!(state.is_dead());
    assert_eq!(state.byte_count(), 8);

    // dead until reset
    assert_eq!(tokenizer.advance(&mut state, b"GET / HTTP/1.1\r\n\r\n"), Err(ParseError::Dead));
    assert_eq!(state.byte_count(), 8);

    state.reset();

    assert_eq!(state, ParseState::new());

    let head = assert_finished(&tokenizer, &mut state, b"GET /b HTTP/1.1\r\n\r\n", 19);

    assert_eq!(head.path(), "/b");
    assert_eq!(head.raw_path(), None);
}

#[test]
fn pipelined() {
    let tokenizer = Tokenizer::new();
    let mut state = ParseState::new();
    let stream = b"GET /a?x=1 HTTP/1.1\r\nA: 1\r\n\r\nPUT /b;y HTTP/1.0\r\nB: 2\r\n\r\n";

    let first = assert_finished(&tokenizer, &mut state, stream, 29);

    state.reset();

    let second = assert_finished(&tokenizer, &mut state, &stream[29..], 27);

    assert_eq!(first, head(&stream[..29]));
    assert_eq!(second, head(&stream[29..]));

    assert_eq!(second.method(), "PUT");
    assert_eq!(second.path(), "/b");
    assert!(second.query_params().is_empty());
    assert_eq!(second.path_params().first("y"), Some(""));
    assert_eq!(second.header("a"), None);
    assert_eq!(second.header("b"), Some("2"));
}
