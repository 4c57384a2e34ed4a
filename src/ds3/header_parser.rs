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

//! Incremental parser for the status line and headers of an HTTP response.
//!
//! The transport hands over header lines one at a time as they arrive. The
//! parser tolerates the blank line some transports emit before the status
//! line, skips provisional `100 Continue` responses, and restarts when a new
//! status line follows a completed header block (intermediate redirect
//! responses).

use crate::ds3::ordered_map::OrderedMap;
use crate::ds3::utils::parse_leading_u64;
use thiserror::Error;

const PROTOCOL_PREFIX: &str = "HTTP/";
const STATUS_CONTINUE: u16 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HeaderParseError {
    #[error("Unsupported protocol in status line '{0}'")]
    UnsupportedProtocol(String),

    #[error("Invalid status code in status line '{0}'")]
    InvalidStatusCode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserState {
    AwaitingStatusLine,
    ReadingHeaders,
    Done,
}

/// Status and headers of one HTTP exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    pub status_code: u16,
    pub status_message: String,
    pub headers: OrderedMap,
}

impl ResponseMetadata {
    /// Returns the value of a response header, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get_ignore_case(name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[derive(Debug)]
pub struct HeaderParser {
    state: ParserState,
    metadata: ResponseMetadata,
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderParser {
    pub fn new() -> Self {
        HeaderParser {
            state: ParserState::AwaitingStatusLine,
            metadata: ResponseMetadata::default(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Feeds one raw header line (CRLF included or not) into the parser.
    pub fn feed_line(&mut self, raw: &[u8]) -> Result<(), HeaderParseError> {
        let decoded = String::from_utf8_lossy(raw);
        let line = decoded.trim_end();

        match self.state {
            ParserState::AwaitingStatusLine => {
                if line.is_empty() {
                    return Ok(());
                }
                self.parse_status_line(line)
            }
            ParserState::ReadingHeaders => {
                if line.is_empty() {
                    self.state = ParserState::Done;
                } else {
                    self.parse_header(line);
                }
                Ok(())
            }
            ParserState::Done => {
                if line.starts_with(PROTOCOL_PREFIX) {
                    log::debug!("restarting header parse at '{line}'");
                    self.metadata = ResponseMetadata::default();
                    self.state = ParserState::AwaitingStatusLine;
                    self.parse_status_line(line)
                } else {
                    if !line.is_empty() {
                        log::trace!("ignoring header line after end of headers: '{line}'");
                    }
                    Ok(())
                }
            }
        }
    }

    /// Returns the metadata accumulated so far.
    pub fn finish(self) -> ResponseMetadata {
        if self.state != ParserState::Done {
            log::debug!("header block ended in state {:?}", self.state);
        }
        self.metadata
    }

    fn parse_status_line(&mut self, line: &str) -> Result<(), HeaderParseError> {
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some(protocol) if protocol.starts_with(PROTOCOL_PREFIX) => {}
            _ => return Err(HeaderParseError::UnsupportedProtocol(line.to_string())),
        }

        let code = match tokens.next() {
            Some(token) if token.starts_with(|c: char| c.is_ascii_digit()) => token,
            _ => return Err(HeaderParseError::InvalidStatusCode(line.to_string())),
        };
        let status_code = u16::try_from(parse_leading_u64(code))
            .map_err(|_| HeaderParseError::InvalidStatusCode(line.to_string()))?;

        if status_code == STATUS_CONTINUE {
            log::trace!("skipping provisional status line '{line}'");
            return Ok(());
        }

        self.metadata.status_code = status_code;
        self.metadata.status_message = tokens.collect::<Vec<_>>().join(" ");
        self.state = ParserState::ReadingHeaders;
        Ok(())
    }

    fn parse_header(&mut self, line: &str) {
        match line.split_once(": ") {
            Some((name, value)) => {
                self.metadata.headers.insert(name, value);
            }
            None => {
                log::warn!("header line without separator: '{line}'");
                self.metadata.headers.insert(line, "");
            }
        }
    }
}
