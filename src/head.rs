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

//! Parsed request head.

use std::borrow::Cow;
use std::slice;

/// Ordered multi-map of decoded parameters.
///
/// Keys are kept in order of first appearance, and each key keeps its values in order of
/// appearance. A duplicate key adds a value rather than a new entry.
///
/// # Examples
///
/// ```
/// use http_tokenizer::Params;
///
/// let mut params = Params::new();
///
/// params.append("a".to_string(), "1".to_string());
/// params.append("b".to_string(), "2".to_string());
/// params.append("a".to_string(), "3".to_string());
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("a").unwrap(), &["1", "3"]);
/// assert_eq!(params.first("b"), Some("2"));
/// ```
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Params {
    entries: Vec<(String, Vec<String>)>
}

impl Params {
    /// Create a new, empty `Params`.
    pub fn new() -> Params {
        Params{ entries: Vec::new() }
    }

    /// Append `value` to the values of `key`.
    pub fn append(&mut self, key: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.0 == key) {
            entry.1.push(value);

            return;
        }

        self.entries.push((key, vec![value]));
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Indicates that `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Retrieve the first value of `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|values| values.first()).map(|value| value.as_str())
    }

    /// Retrieve all values of `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.iter()
                    .find(|entry| entry.0 == key)
                    .map(|entry| entry.1.as_slice())
    }

    /// Indicates that there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in order of first appearance.
    pub fn iter(&self) -> ParamsIter {
        ParamsIter{ inner: self.entries.iter() }
    }

    /// Retrieve the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item     = (&'a str, &'a [String]);
    type IntoIter = ParamsIter<'a>;

    fn into_iter(self) -> ParamsIter<'a> {
        self.iter()
    }
}

/// Iterator over the entries of [`Params`](struct.Params.html).
pub struct ParamsIter<'a> {
    inner: slice::Iter<'a, (String, Vec<String>)>
}

impl<'a> Iterator for ParamsIter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<(&'a str, &'a [String])> {
        self.inner.next().map(|entry| (entry.0.as_str(), entry.1.as_slice()))
    }
}

// -------------------------------------------------------------------------------------------------

/// Header name and value.
#[derive(Clone,Debug,PartialEq)]
pub struct Header {
    /// Header name, as sent.
    pub name: String,

    /// Header value, with surrounding white space removed and folded lines joined by a single
    /// space.
    pub value: String
}

impl Header {
    /// Create a new `Header`.
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Header {
        Header{ name:  name.into(),
                value: value.into() }
    }
}

// -------------------------------------------------------------------------------------------------

/// Request head: everything up to and including the blank line that terminates the headers.
#[derive(Clone,Debug,PartialEq)]
pub struct RequestHead {
    /// Request headers, in order of appearance.
    pub(crate) headers: Vec<Header>,

    /// Request method.
    pub(crate) method: Cow<'static, str>,

    /// Decoded path.
    pub(crate) path: String,

    /// Decoded path parameters.
    pub(crate) path_params: Params,

    /// Decoded query parameters.
    pub(crate) query_params: Params,

    /// Raw query string.
    pub(crate) query_string: String,

    /// Raw path, present only when it differs from the decoded path.
    pub(crate) raw_path: Option<String>,

    /// HTTP version.
    pub(crate) version: Cow<'static, str>
}

impl RequestHead {
    /// Create a new, empty `RequestHead`.
    pub fn new() -> RequestHead {
        RequestHead{ headers:      Vec::new(),
                     method:       Cow::Borrowed(""),
                     path:         String::new(),
                     path_params:  Params::new(),
                     query_params: Params::new(),
                     query_string: String::new(),
                     raw_path:     None,
                     version:      Cow::Borrowed("") }
    }

    /// Retrieve the first value of header `name`. The name comparison is case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
                    .find(|header| header.name.eq_ignore_ascii_case(name))
                    .map(|header| header.value.as_str())
    }

    /// Retrieve all headers, in order of appearance.
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Retrieve the request method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Indicates that the method was produced from the known method table, without allocating.
    pub fn is_known_method(&self) -> bool {
        match self.method {
            Cow::Borrowed(_) => true,
            Cow::Owned(_)    => false
        }
    }

    /// Retrieve the decoded path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Retrieve the decoded path parameters.
    pub fn path_params(&self) -> &Params {
        &self.path_params
    }

    /// Retrieve the decoded query parameters.
    pub fn query_params(&self) -> &Params {
        &self.query_params
    }

    /// Retrieve the raw query string, without the leading `?`.
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Retrieve the raw path.
    ///
    /// This is `None` when the raw path is identical to the decoded path.
    pub fn raw_path(&self) -> Option<&str> {
        self.raw_path.as_ref().map(|path| path.as_str())
    }

    /// Retrieve the HTTP version.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for RequestHead {
    fn default() -> RequestHead {
        RequestHead::new()
    }
}
