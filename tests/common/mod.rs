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

//! Scripted in-memory transport shared by the integration tests

#![allow(dead_code)]

use spectra::ds3::error::TransportError;
use spectra::ds3::ordered_map::OrderedMap;
use spectra::ds3::transport::{ResponseSink, Transport, TransportRequest};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const ENDPOINT: &str = "http://ds3.test:8080";
pub const ACCESS_ID: &str = "c3BlY3RyYQ==";
pub const SECRET_KEY: &str = "Z2wS8cnV";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Clone, Debug)]
pub enum MockResponse {
    Reply { lines: Vec<String>, body: Vec<u8> },
    Fail(String),
    NoHandle(String),
}

impl MockResponse {
    /// Reply with a status line, headers and body as a raw transport reports them.
    pub fn reply(status: &str, headers: &[(&str, &str)], body: &[u8]) -> Self {
        let mut lines = vec![format!("{status}\r\n")];
        lines.extend(headers.iter().map(|(k, v)| format!("{k}: {v}\r\n")));
        lines.push("\r\n".to_string());
        MockResponse::Reply {
            lines,
            body: body.to_vec(),
        }
    }

    pub fn ok(body: &[u8]) -> Self {
        Self::reply(
            "HTTP/1.1 200 OK",
            &[("Content-Type", "application/xml")],
            body,
        )
    }

    pub fn lines(lines: &[&str], body: &[u8]) -> Self {
        MockResponse::Reply {
            lines: lines.iter().map(|l| format!("{l}\r\n")).collect(),
            body: body.to_vec(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: http::Method,
    pub url: String,
    pub headers: OrderedMap,
    pub body: Option<Vec<u8>>,
    pub declared_length: Option<u64>,
    pub max_redirects: usize,
    pub proxy: Option<String>,
}

#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
    init_calls: AtomicUsize,
    cleanup_calls: AtomicUsize,
}

impl MockTransport {
    pub fn with_responses(responses: Vec<MockResponse>) -> Self {
        MockTransport {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }

    pub fn cleanup_calls(&self) -> usize {
        self.cleanup_calls.load(Ordering::SeqCst)
    }
}

impl Transport for MockTransport {
    fn global_init(&self) -> Result<(), TransportError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn global_cleanup(&self) {
        self.cleanup_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn perform(
        &self,
        request: TransportRequest,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), TransportError> {
        let declared_length = request.body.as_ref().map(|b| b.length());
        let body = match request.body {
            Some(body) => Some(body.read_all()?),
            None => None,
        };
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body,
            declared_length,
            max_redirects: request.max_redirects,
            proxy: request.proxy,
        });

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Failed("no scripted response left".to_string()))?;
        match response {
            MockResponse::Reply { lines, body } => {
                for line in lines {
                    sink.header_line(line.as_bytes())?;
                }
                for chunk in body.chunks(7) {
                    sink.body_chunk(chunk)?;
                }
                Ok(())
            }
            MockResponse::Fail(message) => Err(TransportError::Failed(message)),
            MockResponse::NoHandle(message) => Err(TransportError::Handle(message)),
        }
    }
}
