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

//! Stream collection macros.
//!
//! Every collection is bounded. The limit check happens on the byte that would exceed it, so the
//! error is raised at the same stream offset however the stream has been fragmented.

/// Push `$byte` onto `$buffer`. Exit with `ParseError::TokenTooLong` if `$buffer` already holds
/// `$limit` bytes.
macro_rules! push_bounded {
    ($buffer:expr, $byte:expr, $limit:expr) => ({
        if $buffer.len() >= $limit {
            exit_error!(TokenTooLong, $limit);
        }

        $buffer.push($byte);
    });
}

/// Extend `$buffer` with `$slice`. Exit with `ParseError::TokenTooLong` if the result would hold
/// more than `$limit` bytes.
macro_rules! extend_bounded {
    ($buffer:expr, $slice:expr, $limit:expr) => ({
        if $buffer.len() + $slice.len() > $limit {
            exit_error!(TokenTooLong, $limit);
        }

        $buffer.extend_from_slice($slice);
    });
}

/// Collect all bytes for which `$accept` yields `true` into `$buffer`.
///
/// Exit the collection loop upon finding a byte that isn't accepted, leaving that byte in the
/// stream, or when the stream is exhausted. Exit with `ParseError::TokenTooLong` on the first byte
/// that would grow `$buffer` beyond `$limit`.
macro_rules! collect_bounded {
    ($context:expr, $buffer:expr, $limit:expr, $accept:expr) => ({
        bs_mark!($context);

        loop {
            if bs_is_eos!($context) {
                break;
            }

            bs_next!($context);

            if !$accept {
                bs_replay!($context);

                break;
            }

            if $buffer.len() + bs_slice_length!($context) > $limit {
                exit_error!(TokenTooLong, $limit);
            }
        }

        $buffer.extend_from_slice(bs_slice!($context));
    });
}

/// Remove trailing linear white space from `$buffer`.
macro_rules! trim_trailing_space {
    ($buffer:expr) => ({
        while let Some(&byte) = $buffer.last() {
            if byte == b' ' || byte == b'\t' {
                $buffer.pop();
            } else {
                break;
            }
        }
    });
}
