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

//! Decoders turning response bodies into DS3 types

mod bucket;
mod bulk;
mod service;

use crate::ds3::error::Error;

/// Decoding of an XML response body into a typed value.
///
/// Decoders fail with [`Error::InvalidXml`] when the body is not XML or its
/// root element is not the expected one. Unknown elements and attributes
/// are logged and skipped.
pub trait FromDs3Response: Sized {
    /// Name of the expected root element
    const ROOT: &'static str;

    fn from_xml(body: &[u8]) -> Result<Self, Error>;
}
