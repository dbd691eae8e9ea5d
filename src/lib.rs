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

//! Resumable, chunk-driven HTTP/1.x request head tokenizer.
//!
//! The request line and headers of a request may arrive in arbitrarily small pieces. A
//! [`Tokenizer`](tokenizer/struct.Tokenizer.html) consumes each piece as it arrives, carrying
//! all progress in a per-connection [`ParseState`](state/struct.ParseState.html), and produces
//! a [`RequestHead`](head/struct.RequestHead.html) once the blank line ending the head has been
//! found. The outcome, or the error and the offset at which it was raised, never depends on
//! how the input was split.

#![crate_name = "http_tokenizer"]

#[macro_use]
extern crate byte_slice;

#[macro_use]
mod fsm;

#[macro_use]
mod collect;

pub mod byte;
pub mod candidate;
pub mod config;
pub mod decode;
pub mod error;
pub mod head;
pub mod state;
pub mod tokenizer;

#[cfg(test)]
mod test;

pub use crate::config::ParserConfig;
pub use crate::error::ParseError;
pub use crate::head::{ Header,
                       Params,
                       RequestHead };
pub use crate::state::{ ParseState,
                        Phase };
pub use crate::tokenizer::{ Outcome,
                            Tokenizer };

/// Crate major version.
pub const VERSION_MAJOR: &'static str = env!("CARGO_PKG_VERSION_MAJOR");

/// Crate minor version.
pub const VERSION_MINOR: &'static str = env!("CARGO_PKG_VERSION_MINOR");

/// Crate patch version.
pub const VERSION_PATCH: &'static str = env!("CARGO_PKG_VERSION_PATCH");
