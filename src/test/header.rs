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
use crate::{ Header, ParseError, ParseState, Phase, Tokenizer };

#[test]
fn headers() {
    let head = head(b"GET / HTTP/1.1\r\n\
                      Host: example.com\r\n\
                      Content-Type: text/plain\r\n\
                      X-Repeat: 1\r\n\
                      x-repeat: 2\r\n\r\n");

    assert_eq!(head.headers(), &[Header::new("Host", "example.com"),
                                 Header::new("Content-Type", "text/plain"),
                                 Header::new("X-Repeat", "1"),
                                 Header::new("x-repeat", "2")][..]);

    assert_eq!(head.header("host"), Some("example.com"));
    assert_eq!(head.header("X-REPEAT"), Some("1"));
    assert_eq!(head.header("missing"), None);
}

#[test]
fn none() {
    let head = head(b"GET / HTTP/1.1\r\n\r\n");

    assert!(head.headers().is_empty());
}

#[test]
fn value_trimmed() {
    let head = head(b"GET / HTTP/1.1\r\nA:   a b \t \r\nB:\t\tc\r\nC:\r\nD: \r\n\r\n");

    assert_eq!(head.header("A"), Some("a b"));
    assert_eq!(head.header("B"), Some("c"));
    assert_eq!(head.header("C"), Some(""));
    assert_eq!(head.header("D"), Some(""));
}

#[test]
fn value_separators() {
    let head = head(b"GET / HTTP/1.1\r\nHost: example.com:8080\r\nX: \"a, b\"; c=d\r\n\r\n");

    assert_eq!(head.header("host"), Some("example.com:8080"));
    assert_eq!(head.header("x"), Some("\"a, b\"; c=d"));
}

#[test]
fn value_latin1() {
    let head = head(b"GET / HTTP/1.1\r\nX: caf\xE9\r\n\r\n");

    assert_eq!(head.header("x"), Some("caf\u{e9}"));
}

#[test]
fn folded() {
    let head = head(b"GET / HTTP/1.1\r\nX-Foo: bar\r\n baz\r\n\t  qux  \r\nY: 1\r\n\r\n");

    assert_eq!(head.header("x-foo"), Some("bar baz qux"));
    assert_eq!(head.header("y"), Some("1"));

    // nothing to join onto
    let head = crate::test::head(b"GET / HTTP/1.1\r\nX:\r\n baz\r\n\r\n");

    assert_eq!(head.header("x"), Some("baz"));
}

#[test]
fn folded_without_header() {
    assert_eq!(error(b"GET / HTTP/1.1\r\n foo: bar\r\n\r\n"),
               (ParseError::MalformedHeader(b' '), 17));
}

#[test]
fn bare_line_feeds() {
    let head = head(b"GET / HTTP/1.1\nA: 1\nB: 2 \n\n");

    assert_eq!(head.header("a"), Some("1"));
    assert_eq!(head.header("b"), Some("2"));
}

#[test]
fn name_byte_check() {
    for byte in non_token_vec() {
        if byte == b':' {
            continue;
        }

        assert_eq!(error(&[b'G', b'E', b'T', b' ', b'/', b' ', b'H', b'T', b'T', b'P', b'/',
                           b'1', b'.', b'1', b'\r', b'\n', b'X', byte]),
                   (ParseError::MalformedHeader(byte), 18));
    }

    assert_eq!(error(b"GET / HTTP/1.1\r\n: foo\r\n\r\n"), (ParseError::MalformedHeader(b':'), 17));
}

#[test]
fn value_byte_check() {
    for byte in control_vec() {
        if byte == b'\t' || byte == b'\r' || byte == b'\n' {
            continue;
        }

        assert_eq!(error(&[b'G', b'E', b'T', b' ', b'/', b' ', b'H', b'T', b'T', b'P', b'/',
                           b'1', b'.', b'1', b'\r', b'\n', b'X', b':', b'a', byte]),
                   (ParseError::MalformedHeader(byte), 20));
    }
}

#[test]
fn lone_carriage_return() {
    assert_eq!(error(b"GET / HTTP/1.1\r\nX: a\rb\r\n\r\n"), (ParseError::MalformedHeader(b'b'), 22));
    assert_eq!(error(b"GET / HTTP/1.1\r\nX: a\r\n\rb"), (ParseError::MalformedHeader(b'b'), 24));
}

#[test]
fn completed_length() {
    let tokenizer = Tokenizer::new();
    let mut state = ParseState::new();

    let head = assert_finished(&tokenizer, &mut state, b"POST / HTTP/1.1\r\nA: 1\r\n\r\nbody", 25);

    assert_eq!(head.method(), "POST");
    assert_eq!(state.byte_count(), 25);
    assert_eq!(state.header_count(), 1);
}

#[test]
fn phases() {
    let tokenizer = Tokenizer::new();
    let mut state = ParseState::new();

    assert_eos(&tokenizer, &mut state, b"GET / HTTP/1.1\r\nHo", Phase::Header);
    assert_eq!(state.token_buffer(), b"Ho");

    assert_eos(&tokenizer, &mut state, b"st:", Phase::HeaderValue);
    assert!(state.token_buffer().is_empty());

    assert_eos(&tokenizer, &mut state, b" x\r\n", Phase::Header);
    assert_eq!(state.token_buffer(), b"x");
    assert!(state.head().headers().is_empty());

    assert_eos(&tokenizer, &mut state, b"A", Phase::Header);
    assert_eq!(state.head().headers(), &[Header::new("Host", "x")][..]);

    let head = assert_finished(&tokenizer, &mut state, b": 1\r\n\r\n", 7);

    assert_eq!(head.headers().len(), 2);
}
