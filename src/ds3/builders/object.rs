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

use crate::ds3::builders::object_path;
use crate::ds3::types::Ds3Request;
use http::Method;

impl Ds3Request {
    pub fn get_object(bucket: &str, object: &str) -> Self {
        Ds3Request::new(Method::GET, object_path(bucket, object))
    }

    /// Request uploading `length` bytes as the content of an object
    pub fn put_object(bucket: &str, object: &str, length: u64) -> Self {
        Ds3Request::new(Method::PUT, object_path(bucket, object)).with_length(length)
    }

    pub fn delete_object(bucket: &str, object: &str) -> Self {
        Ds3Request::new(Method::DELETE, object_path(bucket, object))
    }

    pub fn head_object(bucket: &str, object: &str) -> Self {
        Ds3Request::new(Method::HEAD, object_path(bucket, object))
    }
}
