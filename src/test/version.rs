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
use crate::{ ParseError, ParseState, Phase, Tokenizer };

use std::borrow::Cow;

#[test]
fn known() {
    for version in &["HTTP/1.0", "HTTP/1.1"] {
        let head = head(format!("GET / {}\r\n\r\n", version).as_bytes());

        assert_eq!(head.version(), *version);
        assert!(match head.version { Cow::Borrowed(_) => true, Cow::Owned(_) => false });
    }
}

#[test]
fn unknown() {
    let head = head(b"GET / HTTP/2.0\r\n\r\n");

    assert_eq!(head.version(), "HTTP/2.0");
    assert!(match head.version { Cow::Borrowed(_) => false, Cow::Owned(_) => true });

    let head = crate::test::head(b"GET / HTTP/1.\r\n\r\n");

    assert_eq!(head.version(), "HTTP/1.");
}

#[test]
fn line_endings() {
    let head = head(b"GET / HTTP/1.1\n\n");

    assert_eq!(head.version(), "HTTP/1.1");

    let head = crate::test::head(b"GET / HTTP/1.1 \t \r\n\r\n");

    assert_eq!(head.version(), "HTTP/1.1");
}

#[test]
fn missing() {
    assert_eq!(error(b"GET / \r\n\r\n"), (ParseError::MalformedRequestLine(b'\r'), 7));
    assert_eq!(error(b"GET /  HTTP/1.1\r\n\r\n"), (ParseError::MalformedRequestLine(b' '), 7));
}

#[test]
fn byte_check() {
    for byte in control_vec() {
        if byte == b'\r' || byte == b'\n' {
            continue;
        }

        assert_eq!(error(&[b'G', b'E', b'T', b' ', b'/', b' ', b'H', byte]),
                   (ParseError::MalformedRequestLine(byte), 8));
    }

    assert_eq!(error(b"GET / HTTP/1.1\rX"), (ParseError::MalformedRequestLine(b'X'), 16));
    assert_eq!(error(b"GET / HTTP/1.1 x\r\n"), (ParseError::MalformedRequestLine(b'x'), 16));
    assert_eq!(error(b"GET / HTTP/1.1 \r\r\n"), (ParseError::MalformedRequestLine(b'\r'), 17));
}

#[test]
fn phases() {
    let tokenizer = Tokenizer::new();
    let mut state = ParseState::new();

    assert_eos(&tokenizer, &mut state, b"GET / HTTP/1.1", Phase::Version);
    assert_eq!(state.head().version(), "");

    assert_eos(&tokenizer, &mut state, b"\r", Phase::AfterVersion);
    assert_eq!(state.head().version(), "HTTP/1.1");

    assert_eos(&tokenizer, &mut state, b"\n", Phase::Header);
}
