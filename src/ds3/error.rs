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

//! Error definitions for DS3 operations

use crate::ds3::header_parser::HeaderParseError;
use std::fmt;
use thiserror::Error;

/// Coarse classification of an [`Error`], one per failure class a caller may
/// want to branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument (client setting, request field or object list) was absent.
    MissingArgs,
    /// The transport could not create a handle for the exchange.
    TransportHandle,
    /// The exchange failed at the transport level.
    FailedRequest,
    /// The response body was not the expected XML document.
    InvalidXml,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingArgs => write!(f, "MISSING_ARGS"),
            ErrorKind::TransportHandle => write!(f, "CURL_HANDLE"),
            ErrorKind::FailedRequest => write!(f, "FAILED_REQUEST"),
            ErrorKind::InvalidXml => write!(f, "INVALID_XML"),
        }
    }
}

/// Error returned by every DS3 operation.
///
/// An operation either yields its full result or exactly one `Error`; partial
/// results are never returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    MissingArgs(String),

    #[error("{0}")]
    TransportHandle(String),

    #[error("{0}")]
    FailedRequest(String),

    /// Carries the raw response text so the caller can see what the server sent.
    #[error("{reason}.  The actual response is: {response}")]
    InvalidXml { reason: String, response: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingArgs(_) => ErrorKind::MissingArgs,
            Error::TransportHandle(_) => ErrorKind::TransportHandle,
            Error::FailedRequest(_) => ErrorKind::FailedRequest,
            Error::InvalidXml { .. } => ErrorKind::InvalidXml,
        }
    }

    pub(crate) fn invalid_xml(reason: impl Into<String>, body: &[u8]) -> Self {
        Error::InvalidXml {
            reason: reason.into(),
            response: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

/// Failure reported by a [`Transport`](crate::ds3::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Handle(String),

    #[error("{0}")]
    Failed(String),

    #[error("{0}")]
    Header(#[from] HeaderParseError),

    #[error("failed to write response body: {0}")]
    BodyWrite(#[from] std::io::Error),
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Handle(m) => Error::TransportHandle(m),
            other => Error::FailedRequest(format!("Request failed: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_xml_message_includes_response() {
        let err = Error::invalid_xml(
            "Expected the root element to be 'ListBucketResult'",
            b"<Error><Code>NoSuchBucket</Code></Error>",
        );
        assert_eq!(err.kind(), ErrorKind::InvalidXml);
        let message = err.to_string();
        assert!(message.starts_with("Expected the root element"));
        assert!(message.ends_with("<Error><Code>NoSuchBucket</Code></Error>"));
    }

    #[test]
    fn test_transport_error_mapping() {
        let err: Error = TransportError::Handle("Failed to create transport handle".into()).into();
        assert_eq!(err.kind(), ErrorKind::TransportHandle);

        let err: Error = TransportError::Failed("connection refused".into()).into();
        assert_eq!(err.kind(), ErrorKind::FailedRequest);
        assert_eq!(err.to_string(), "Request failed: connection refused");

        let err: Error = TransportError::Header(HeaderParseError::UnsupportedProtocol(
            "SPDY/3 200 OK".into(),
        ))
        .into();
        assert_eq!(err.kind(), ErrorKind::FailedRequest);
    }

    #[test]
    fn test_error_kind_codes() {
        assert_eq!(ErrorKind::MissingArgs.to_string(), "MISSING_ARGS");
        assert_eq!(ErrorKind::TransportHandle.to_string(), "CURL_HANDLE");
        assert_eq!(ErrorKind::FailedRequest.to_string(), "FAILED_REQUEST");
        assert_eq!(ErrorKind::InvalidXml.to_string(), "INVALID_XML");
    }
}
