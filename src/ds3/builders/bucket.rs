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

use crate::ds3::builders::bucket_path;
use crate::ds3::types::Ds3Request;
use http::Method;

impl Ds3Request {
    /// Request listing the objects of a bucket.
    ///
    /// Listing options (`prefix`, `marker`, `max-keys`, `delimiter`) can be
    /// added with [`with_query_param`](Ds3Request::with_query_param).
    pub fn get_bucket(bucket: &str) -> Self {
        Ds3Request::new(Method::GET, bucket_path(bucket))
    }

    pub fn put_bucket(bucket: &str) -> Self {
        Ds3Request::new(Method::PUT, bucket_path(bucket))
    }

    pub fn delete_bucket(bucket: &str) -> Self {
        Ds3Request::new(Method::DELETE, bucket_path(bucket))
    }
}
