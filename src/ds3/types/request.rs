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

//! Ds3Request struct, one outbound DS3 operation

use crate::ds3::ordered_map::OrderedMap;
use crate::ds3::types::BulkObjectList;
use http::Method;
use std::fmt;

/// One outbound DS3 operation.
///
/// Built by the factory functions (`Ds3Request::get_service()`,
/// `Ds3Request::put_object()`, `Ds3Request::bulk_put()`, ...) and consumed by
/// the matching [`Ds3Client`](crate::ds3::Ds3Client) method. Only the bulk
/// factories attach an object list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ds3Request {
    method: Method,
    path: String,
    headers: OrderedMap,
    query_params: OrderedMap,
    length: u64,
    pub(crate) object_list: Option<BulkObjectList>,
}

impl Ds3Request {
    pub(crate) fn new(method: Method, path: String) -> Self {
        Ds3Request {
            method,
            path,
            headers: OrderedMap::new(),
            query_params: OrderedMap::new(),
            length: 0,
            object_list: None,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The URL path, which is also the signed resource
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &OrderedMap {
        &self.headers
    }

    pub fn query_params(&self) -> &OrderedMap {
        &self.query_params
    }

    /// Declared length of the request body in bytes
    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn object_list(&self) -> Option<&BulkObjectList> {
        self.object_list.as_ref()
    }

    /// Adds a request header; a later value for the same name replaces the earlier one.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds a query parameter; a later value for the same name replaces the earlier one.
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name, value);
        self
    }

    pub(crate) fn with_length(mut self, length: u64) -> Self {
        self.length = length;
        self
    }

    pub(crate) fn with_object_list(mut self, list: BulkObjectList) -> Self {
        self.object_list = Some(list);
        self
    }

    pub(crate) fn set_length(&mut self, length: u64) {
        self.length = length;
    }

    /// Splits the request into the parts the executor needs.
    pub(crate) fn into_parts(self) -> (Method, String, OrderedMap, OrderedMap, u64) {
        (
            self.method,
            self.path,
            self.headers,
            self.query_params,
            self.length,
        )
    }
}

impl fmt::Display for Ds3Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Verb: {}", self.method)?;
        write!(f, "Path: {}", self.path)
    }
}
