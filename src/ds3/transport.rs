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

//! HTTP transport used by [`Ds3Client`](crate::ds3::Ds3Client).
//!
//! A [`Transport`] performs one HTTP exchange and reports the response back
//! through a [`ResponseSink`]: the status line and every header line as raw
//! bytes, then the body in chunks. [`ReqwestTransport`] is the default
//! implementation.
//!
//! Some transports need a process-wide setup before their first exchange and
//! a teardown at exit. [`init`] runs the setup once per process, no matter how
//! many clients are built; [`cleanup`] runs the paired teardown.

use crate::ds3::error::TransportError;
use crate::ds3::header_parser::HeaderParseError;
use crate::ds3::ordered_map::OrderedMap;
use http::Method;
use std::fmt;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Default number of redirects a transport follows for one exchange
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

const READ_BUFFER_SIZE: usize = 16 * 1024;

/// Upload body of a request with its declared length
pub struct RequestBody {
    reader: Box<dyn Read + Send>,
    length: u64,
}

impl RequestBody {
    /// Body of `length` bytes read from `reader`
    pub fn sized<R: Read + Send + 'static>(reader: R, length: u64) -> Self {
        RequestBody {
            reader: Box::new(reader),
            length,
        }
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Reader yielding at most the declared length
    pub fn into_reader(self) -> Box<dyn Read + Send> {
        Box::new(self.reader.take(self.length))
    }

    /// Reads the whole body into memory
    pub fn read_all(self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(usize::try_from(self.length).unwrap_or_default());
        self.reader.take(self.length).read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBody")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

/// Fully assembled, signed request handed to a [`Transport`]
#[derive(Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: OrderedMap,
    pub body: Option<RequestBody>,
    pub max_redirects: usize,
    pub proxy: Option<String>,
}

/// Receiver of the response of one exchange
pub trait ResponseSink {
    /// Receives one raw status or header line, CRLF included.
    fn header_line(&mut self, line: &[u8]) -> Result<(), HeaderParseError>;

    /// Receives the next chunk of the response body.
    fn body_chunk(&mut self, chunk: &[u8]) -> io::Result<()>;
}

pub trait Transport: fmt::Debug + Send + Sync {
    /// Process-wide setup, run once before the first exchange.
    fn global_init(&self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Process-wide teardown paired with [`global_init`](Transport::global_init).
    fn global_cleanup(&self) {}

    /// Performs one exchange, reporting the response to `sink`.
    fn perform(
        &self,
        request: TransportRequest,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), TransportError>;
}

/// Settings of [`ReqwestTransport`]
///
/// # Examples
///
/// ```
/// use spectra::ds3::transport::TransportConfig;
/// use std::time::Duration;
///
/// let config = TransportConfig::default()
///     .connect_timeout(Duration::from_secs(5))
///     .timeout(Some(Duration::from_secs(600)));
/// ```
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Timeout for establishing a connection. Default: 30 seconds
    pub connect_timeout: Duration,

    /// Timeout for a whole exchange, body transfer included.
    ///
    /// Bulk transfers move large objects, so there is none by default.
    pub timeout: Option<Duration>,

    /// Skip verification of server certificates. Only meant for testing.
    pub ignore_cert_check: bool,

    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
            ignore_cert_check: false,
            user_agent: format!(
                "Spectra DS3 ({}; {}) spectra-ds3/{}",
                std::env::consts::OS,
                std::env::consts::ARCH,
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl TransportConfig {
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore: bool) -> Self {
        self.ignore_cert_check = ignore;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// [`Transport`] over the blocking reqwest client.
///
/// Redirect limit and proxy are per request, so an HTTP client is built for
/// every exchange.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    config: TransportConfig,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Self {
        ReqwestTransport { config }
    }

    fn http_client(
        &self,
        max_redirects: usize,
        proxy: Option<&str>,
    ) -> Result<reqwest::blocking::Client, TransportError> {
        let mut builder = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(max_redirects))
            .connect_timeout(self.config.connect_timeout)
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent.as_str());

        if let Some(proxy) = proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| TransportError::Handle(format!("Invalid proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if self.config.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
            .build()
            .map_err(|e| TransportError::Handle(format!("Failed to create transport handle: {e}")))
    }
}

impl Transport for ReqwestTransport {
    fn perform(
        &self,
        request: TransportRequest,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), TransportError> {
        let client = self.http_client(request.max_redirects, request.proxy.as_deref())?;

        let mut req = client.request(request.method, &request.url);
        for (name, value) in request.headers.iter() {
            req = req.header(name, value);
        }
        if let Some(body) = request.body {
            let length = body.length();
            req = req.body(reqwest::blocking::Body::sized(body.into_reader(), length));
        }

        let mut response = req
            .send()
            .map_err(|e| TransportError::Failed(e.to_string()))?;

        let status = response.status();
        let status_line = format!(
            "{:?} {} {}\r\n",
            response.version(),
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        );
        sink.header_line(status_line.as_bytes())?;

        for (name, value) in response.headers() {
            let mut line = Vec::with_capacity(name.as_str().len() + value.len() + 4);
            line.extend_from_slice(name.as_str().as_bytes());
            line.extend_from_slice(b": ");
            line.extend_from_slice(value.as_bytes());
            line.extend_from_slice(b"\r\n");
            sink.header_line(&line)?;
        }
        sink.header_line(b"\r\n")?;

        let mut buf = vec![0u8; READ_BUFFER_SIZE];
        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| TransportError::Failed(e.to_string()))?;
            if n == 0 {
                break;
            }
            sink.body_chunk(&buf[..n])?;
        }
        Ok(())
    }
}

struct GlobalState {
    transport: Option<Arc<dyn Transport>>,
}

static GLOBAL: Mutex<GlobalState> = Mutex::new(GlobalState { transport: None });

/// Runs the process-wide setup of `transport` unless a setup already ran.
///
/// Called when a client is built. Safe to call from many threads and for
/// many clients: only the first call after start (or after [`cleanup`])
/// does any work.
pub fn init(transport: &Arc<dyn Transport>) -> Result<(), TransportError> {
    let mut state = GLOBAL.lock().unwrap_or_else(|e| e.into_inner());
    if state.transport.is_some() {
        return Ok(());
    }
    transport.global_init()?;
    state.transport = Some(Arc::clone(transport));
    log::debug!("transport initialized");
    Ok(())
}

/// Runs the process-wide teardown paired with [`init`]. Does nothing when
/// no setup ran.
pub fn cleanup() {
    let mut state = GLOBAL.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(transport) = state.transport.take() {
        transport.global_cleanup();
        log::debug!("transport cleaned up");
    }
}

pub fn is_initialized() -> bool {
    GLOBAL
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .transport
        .is_some()
}
