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

//! DS3 client to perform bucket, object and bulk job operations

use crate::ds3::creds::Credentials;
use crate::ds3::error::Error;
use crate::ds3::header_parser::{HeaderParseError, HeaderParser, ResponseMetadata};
use crate::ds3::ordered_map::OrderedMap;
use crate::ds3::response::FromDs3Response;
use crate::ds3::signer::sign_request;
use crate::ds3::transport::{
    self, RequestBody, ReqwestTransport, ResponseSink, Transport, TransportConfig,
    TransportRequest, DEFAULT_MAX_REDIRECTS,
};
use crate::ds3::types::Ds3Request;
use crate::ds3::utils::http_date_now;
use bytes::{Bytes, BytesMut};
use http::Method;
use std::io::{self, Read, Write};
use std::sync::Arc;

mod buckets;
mod bulk;
mod get_service;
mod objects;

/// Client Builder manufactures a [`Ds3Client`] using given parameters.
///
/// Building a client runs the process-wide setup of its transport the first
/// time; see [`transport::init`].
///
/// # Examples
///
/// ```no_run
/// use spectra::ds3::Ds3ClientBuilder;
/// use spectra::ds3::creds::Credentials;
/// use spectra::ds3::transport::TransportConfig;
/// use std::time::Duration;
///
/// let client = Ds3ClientBuilder::new("https://ds3.example.com")
///     .credentials(Credentials::new("c3BlY3RyYQ==", "secret"))
///     .proxy(Some("http://proxy.example.com:3128"))
///     .max_redirects(3)
///     .transport_config(TransportConfig::default().connect_timeout(Duration::from_secs(5)))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct Ds3ClientBuilder {
    endpoint: String,
    creds: Option<Credentials>,
    proxy: Option<String>,
    max_redirects: usize,
    transport: Option<Arc<dyn Transport>>,
    transport_config: TransportConfig,
}

impl Ds3ClientBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            creds: None,
            proxy: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            transport: None,
            transport_config: TransportConfig::default(),
        }
    }

    pub fn credentials(mut self, creds: Credentials) -> Self {
        self.creds = Some(creds);
        self
    }

    /// Set the proxy all requests go through
    pub fn proxy(mut self, proxy: Option<&str>) -> Self {
        self.proxy = proxy.map(String::from);
        self
    }

    /// Set the number of redirects followed per request. Default: 5
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Use a custom transport instead of [`ReqwestTransport`]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Configure the default [`ReqwestTransport`]. Ignored when a custom
    /// transport is set.
    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.transport_config = config;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<Ds3Client, Error> {
        let endpoint = self.endpoint.trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(Error::MissingArgs("The endpoint of the client is required".into()));
        }
        let creds = self
            .creds
            .ok_or_else(|| Error::MissingArgs("The credentials of the client are required".into()))?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(self.transport_config)),
        };
        transport::init(&transport)?;

        Ok(Ds3Client {
            endpoint,
            creds,
            proxy: self.proxy,
            max_redirects: self.max_redirects,
            transport,
        })
    }
}

/// DS3 client.
///
/// Every operation takes a [`Ds3Request`] built by one of its factory
/// functions, signs it, and performs one synchronous HTTP exchange.
#[derive(Clone, Debug)]
pub struct Ds3Client {
    endpoint: String,
    creds: Credentials,
    proxy: Option<String>,
    max_redirects: usize,
    transport: Arc<dyn Transport>,
}

impl Ds3Client {
    /// Returns a client for the endpoint using the default transport.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use spectra::ds3::Ds3Client;
    /// use spectra::ds3::creds::Credentials;
    ///
    /// let creds = Credentials::new("c3BlY3RyYQ==", "secret");
    /// let client = Ds3Client::new("http://localhost:8080", creds).unwrap();
    /// ```
    pub fn new(endpoint: &str, creds: Credentials) -> Result<Self, Error> {
        Ds3ClientBuilder::new(endpoint).credentials(creds).build()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.creds
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub fn set_proxy(&mut self, proxy: Option<&str>) {
        self.proxy = proxy.map(String::from);
    }

    pub fn set_max_redirects(&mut self, max_redirects: usize) {
        self.max_redirects = max_redirects;
    }

    /// Full URL of a request path, query parameters in insertion order
    pub fn build_url(&self, path: &str, query_params: &OrderedMap) -> String {
        let mut url = format!("{}{}", self.endpoint, path);
        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.to_query_string());
        }
        url
    }

    /// Performs one HTTP exchange for a request.
    ///
    /// PUT and POST requests upload `body`, limited to the declared length of
    /// the request; other verbs never carry a body. The response body goes
    /// to `writer` when one is given, and is returned in the [`Exchange`]
    /// otherwise.
    pub fn execute(
        &self,
        request: Ds3Request,
        body: Option<Box<dyn Read + Send>>,
        writer: Option<&mut dyn Write>,
    ) -> Result<Exchange, Error> {
        log::debug!("{request}");
        let (method, path, mut headers, query_params, length) = request.into_parts();

        let url = self.build_url(&path, &query_params);
        let date = http_date_now();
        sign_request(&self.creds, &method, &path, &mut headers, &date)?;

        let body = match method {
            Method::PUT | Method::POST => body.map(|reader| RequestBody::sized(reader, length)),
            _ => {
                if body.is_some() {
                    log::warn!("ignoring request body of {method} request");
                }
                None
            }
        };

        log::debug!("{method} {url}");
        let mut sink = ExchangeSink::new(writer);
        self.transport.perform(
            TransportRequest {
                method,
                url,
                headers,
                body,
                max_redirects: self.max_redirects,
                proxy: self.proxy.clone(),
            },
            &mut sink,
        )?;

        let exchange = sink.finish();
        log::debug!(
            "response {} {}",
            exchange.metadata.status_code,
            exchange.metadata.status_message
        );
        Ok(exchange)
    }

    /// Performs an exchange and decodes the XML response body.
    pub(crate) fn execute_xml<T: FromDs3Response>(
        &self,
        request: Ds3Request,
        body: Option<Box<dyn Read + Send>>,
    ) -> Result<T, Error> {
        let exchange = self.execute(request, body, None)?;
        T::from_xml(&exchange.body)
    }
}

/// Outcome of one HTTP exchange
#[derive(Clone, Debug, Default)]
pub struct Exchange {
    /// Response body; empty when it was streamed to a writer
    pub body: Bytes,
    pub metadata: ResponseMetadata,
}

struct ExchangeSink<'a> {
    parser: HeaderParser,
    writer: Option<&'a mut dyn Write>,
    buffer: BytesMut,
}

impl<'a> ExchangeSink<'a> {
    fn new(writer: Option<&'a mut dyn Write>) -> Self {
        ExchangeSink {
            parser: HeaderParser::new(),
            writer,
            buffer: BytesMut::new(),
        }
    }

    fn finish(self) -> Exchange {
        Exchange {
            body: self.buffer.freeze(),
            metadata: self.parser.finish(),
        }
    }
}

impl ResponseSink for ExchangeSink<'_> {
    fn header_line(&mut self, line: &[u8]) -> Result<(), HeaderParseError> {
        self.parser.feed_line(line)
    }

    fn body_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.write_all(chunk),
            None => {
                self.buffer.extend_from_slice(chunk);
                Ok(())
            }
        }
    }
}
