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

//! Feed a pipelined request stream to the tokenizer in small chunks, as a connection would.

extern crate http_tokenizer;

use http_tokenizer::{ Outcome,
                      ParseState,
                      RequestHead,
                      Tokenizer };

use std::env;

const STREAM: &'static [u8] = b"GET /search?q=http+tokenizer&lang=en HTTP/1.1\r\n\
                                Host: example.com\r\n\
                                Accept: text/html\r\n\
                                \r\n\
                                POST /upload;v=2 HTTP/1.1\r\n\
                                Host: example.com\r\n\
                                Content-Type: text/plain\r\n\
                                X-Note: first part\r\n\
                                \x20second part\r\n\
                                \r\n\
                                GET /%E2%9C%93 HTTP/1.0\n\
                                \n\
                                GET /broken%zz HTTP/1.1\r\n\
                                \r\n";

fn print_head(head: &RequestHead) {
    println!("{} {} {}", head.method(), head.path(), head.version());

    if let Some(raw_path) = head.raw_path() {
        println!("  raw path: {}", raw_path);
    }

    for (key, values) in head.path_params() {
        println!("  path param: {} = {:?}", key, values);
    }

    for (key, values) in head.query_params() {
        println!("  query param: {} = {:?}", key, values);
    }

    for header in head.headers() {
        println!("  header: {}: {}", header.name, header.value);
    }
}

fn main() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let chunk_size = env::args().nth(1)
                                .and_then(|arg| arg.parse::<usize>().ok())
                                .unwrap_or(7)
                                .max(1);

    let tokenizer = Tokenizer::new();
    let mut state = ParseState::new();
    let mut chunks = STREAM.chunks(chunk_size);
    let mut chunk = chunks.next().unwrap_or(&[]);

    while !chunk.is_empty() {
        match tokenizer.advance(&mut state, chunk) {
            Ok(Outcome::Suspended(_)) => {
                chunk = chunks.next().unwrap_or(&[]);
            },
            Ok(Outcome::Completed(head, length)) => {
                print_head(&head);

                state.reset();

                // whatever follows belongs to the next request
                chunk = &chunk[length..];

                if chunk.is_empty() {
                    chunk = chunks.next().unwrap_or(&[]);
                }
            },
            Err(error) => {
                println!("error at byte {}: {}", state.byte_count(), error);

                break;
            }
        }
    }
}
