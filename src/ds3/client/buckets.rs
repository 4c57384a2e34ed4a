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

use super::Ds3Client;
use crate::ds3::error::Error;
use crate::ds3::header_parser::ResponseMetadata;
use crate::ds3::types::{BucketListing, Ds3Request};

impl Ds3Client {
    /// Lists the objects of a bucket
    pub fn get_bucket(&self, request: Ds3Request) -> Result<BucketListing, Error> {
        self.execute_xml(request, None)
    }

    /// Creates a bucket. The returned metadata tells whether the server
    /// accepted it.
    pub fn put_bucket(&self, request: Ds3Request) -> Result<ResponseMetadata, Error> {
        Ok(self.execute(request, None, None)?.metadata)
    }

    pub fn delete_bucket(&self, request: Ds3Request) -> Result<ResponseMetadata, Error> {
        Ok(self.execute(request, None, None)?.metadata)
    }
}
