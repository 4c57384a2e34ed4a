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

use crate::ds3::builders::bulk_path;
use crate::ds3::header_constants::{OPERATION, START_BULK_GET, START_BULK_PUT};
use crate::ds3::types::{BulkObjectList, Ds3Request};
use http::Method;

impl Ds3Request {
    /// Request starting a bulk get job for the listed objects.
    ///
    /// The object list is serialized into the request body when the request
    /// is sent with [`Ds3Client::bulk`](crate::ds3::Ds3Client::bulk).
    pub fn bulk_get(bucket: &str, objects: BulkObjectList) -> Self {
        Self::start_bulk(bucket, START_BULK_GET, objects)
    }

    /// Request starting a bulk put job for the listed objects.
    pub fn bulk_put(bucket: &str, objects: BulkObjectList) -> Self {
        Self::start_bulk(bucket, START_BULK_PUT, objects)
    }

    fn start_bulk(bucket: &str, operation: &str, objects: BulkObjectList) -> Self {
        Ds3Request::new(Method::PUT, bulk_path(bucket))
            .with_query_param(OPERATION, operation)
            .with_object_list(objects)
    }
}
