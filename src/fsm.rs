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

//! Finite state machine macros and enums.

/// Exit the current state function with `ParseError::$error`.
macro_rules! exit_error {
    ($error:ident, $value:expr) => ({
        return Err($crate::error::ParseError::$error($value));
    });

    ($error:ident) => ({
        return Err($crate::error::ParseError::$error);
    });
}

/// Exit the parser loop with `ParserValue::Eos`.
macro_rules! exit_eos {
    () => ({
        return Ok($crate::fsm::ParserValue::Eos);
    });
}

/// Exit the parser loop with `ParserValue::Finished`.
macro_rules! exit_finished {
    ($state:expr) => ({
        $state.mark_complete();

        return Ok($crate::fsm::ParserValue::Finished);
    });
}

/// If the stream is EOS, exit with `ParserValue::Eos`. Otherwise do nothing.
macro_rules! exit_if_eos {
    ($context:expr) => ({
        if bs_is_eos!($context) {
            exit_eos!();
        }
    });
}

/// Set the phase.
macro_rules! set_phase {
    ($state:expr, $phase:ident) => ({
        $state.phase = $crate::state::Phase::$phase;

        tracing::trace!(phase = ?$state.phase, "phase transition");
    });
}

/// Transition to `$phase` and continue the parser loop.
macro_rules! transition {
    ($state:expr, $context:expr, $phase:ident) => ({
        set_phase!($state, $phase);
        bs_mark!($context);

        return Ok($crate::fsm::ParserValue::Continue);
    });
}

// -------------------------------------------------------------------------------------------------

/// State function return values.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum ParserValue {
    /// Continue the parser loop.
    Continue,

    /// The stream has been exhausted, and additional data is expected.
    Eos,

    /// The request head has been completely parsed.
    Finished
}
