// Spectra DS3 Rust Library for Bulk Object Storage
// Copyright 2025 Spectra DS3 Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Various utility and helper functions

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Local, TimeZone};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use xmltree::Element;

/// Format of the `Date` request header, also the timestamp that gets signed.
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Formats a time as an HTTP `Date` value with its UTC offset, to the second.
pub fn http_date<Tz: TimeZone>(time: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(HTTP_DATE_FORMAT).to_string()
}

/// Current local time as an HTTP `Date` value
pub fn http_date_now() -> String {
    http_date(Local::now())
}

/// Parses the leading decimal digits of a string as an unsigned integer.
///
/// Leading whitespace is skipped. Returns 0 when there are no digits and
/// saturates at `u64::MAX` on overflow.
pub fn parse_leading_u64(s: &str) -> u64 {
    s.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        })
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes an object key for use in a request path, keeping `/`.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Percent-encodes a query parameter name or value.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ESCAPE).collect()
}

/// Iterates over the child elements of an XML element, skipping text,
/// comments and processing instructions.
pub fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| node.as_element())
}

/// Gets the text of an XML element as is; empty or missing text is `None`.
pub fn get_element_text(element: &Element) -> Option<String> {
    element
        .get_text()
        .filter(|v| !v.is_empty())
        .map(|v| v.into_owned())
}

/// Gets the text of an XML element as a lenient unsigned integer.
pub fn get_element_u64(element: &Element) -> u64 {
    element
        .get_text()
        .map(|v| parse_leading_u64(&v))
        .unwrap_or_default()
}
