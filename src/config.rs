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

//! Tokenizer configuration.

/// Default maximum header count.
pub const DEFAULT_MAX_HEADERS: usize = 200;

/// Default maximum path and query parameter count.
pub const DEFAULT_MAX_PARAMETERS: usize = 1000;

/// Default maximum token length.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 8192;

/// Limits and decoding options applied by a [`Tokenizer`](../tokenizer/struct.Tokenizer.html).
///
/// Every buffer the tokenizer accumulates into is bounded by `max_token_length`, and the number
/// of entries it produces is bounded by `max_headers` and `max_parameters`.
///
/// # Examples
///
/// ```
/// use http_tokenizer::ParserConfig;
///
/// let config = ParserConfig::new()
///              .max_headers(32)
///              .max_token_length(1024);
///
/// assert_eq!(config.get_max_headers(), 32);
/// assert_eq!(config.get_max_token_length(), 1024);
/// assert!(config.get_decode_url());
/// ```
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct ParserConfig {
    /// Decode `%2F` to `/` within the path.
    allow_encoded_slash: bool,

    /// Decode percent-escapes in the path.
    decode_url: bool,

    /// Maximum header count.
    max_headers: usize,

    /// Maximum path and query parameter count.
    max_parameters: usize,

    /// Maximum token length.
    max_token_length: usize
}

impl ParserConfig {
    /// Create a new `ParserConfig` with default limits.
    pub fn new() -> ParserConfig {
        ParserConfig{ allow_encoded_slash: false,
                      decode_url:          true,
                      max_headers:         DEFAULT_MAX_HEADERS,
                      max_parameters:      DEFAULT_MAX_PARAMETERS,
                      max_token_length:    DEFAULT_MAX_TOKEN_LENGTH }
    }

    /// Decode `%2F` to `/` within the path.
    ///
    /// When disabled, the escape is kept as is so that an encoded slash can never alter the
    /// segment structure of the decoded path.
    pub fn allow_encoded_slash(mut self, allow: bool) -> ParserConfig {
        self.allow_encoded_slash = allow;
        self
    }

    /// Decode percent-escapes within the path.
    pub fn decode_url(mut self, decode: bool) -> ParserConfig {
        self.decode_url = decode;
        self
    }

    /// Set the maximum header count.
    pub fn max_headers(mut self, max: usize) -> ParserConfig {
        self.max_headers = max;
        self
    }

    /// Set the maximum path and query parameter count.
    pub fn max_parameters(mut self, max: usize) -> ParserConfig {
        self.max_parameters = max;
        self
    }

    /// Set the maximum token length.
    ///
    /// This applies to the method, the path, the query string, each parameter name and value,
    /// the version, and each header name and value.
    pub fn max_token_length(mut self, max: usize) -> ParserConfig {
        self.max_token_length = max;
        self
    }

    /// Indicates that `%2F` is decoded within the path.
    pub fn get_allow_encoded_slash(&self) -> bool {
        self.allow_encoded_slash
    }

    /// Indicates that percent-escapes are decoded within the path.
    pub fn get_decode_url(&self) -> bool {
        self.decode_url
    }

    /// Retrieve the maximum header count.
    pub fn get_max_headers(&self) -> usize {
        self.max_headers
    }

    /// Retrieve the maximum path and query parameter count.
    pub fn get_max_parameters(&self) -> usize {
        self.max_parameters
    }

    /// Retrieve the maximum token length.
    pub fn get_max_token_length(&self) -> usize {
        self.max_token_length
    }
}

impl Default for ParserConfig {
    fn default() -> ParserConfig {
        ParserConfig::new()
    }
}
