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

//! Factory functions producing [`Ds3Request`](crate::ds3::types::Ds3Request) values.
//!
//! Every factory is pure: it only assembles the verb, path and parameters of
//! the request. Signing and network activity happen when the request is
//! handed to a [`Ds3Client`](crate::ds3::Ds3Client) method.

mod bucket;
mod bulk;
mod object;
mod service;

use crate::ds3::utils::urlencode_object_key;

/// Prefix of the DS3 specific REST resources
pub const REST_PREFIX: &str = "/_rest_";

pub(crate) fn bucket_path(bucket: &str) -> String {
    format!("/{bucket}")
}

pub(crate) fn object_path(bucket: &str, object: &str) -> String {
    format!("/{}/{}", bucket, urlencode_object_key(object))
}

pub(crate) fn bulk_path(bucket: &str) -> String {
    format!("{REST_PREFIX}/bucket/{bucket}")
}
