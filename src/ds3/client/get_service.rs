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
use crate::ds3::types::{Ds3Request, ServiceListing};

impl Ds3Client {
    /// Lists the buckets of the user.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use spectra::ds3::Ds3Client;
    /// use spectra::ds3::creds::Credentials;
    /// use spectra::ds3::types::Ds3Request;
    ///
    /// let client = Ds3Client::new("http://localhost:8080", Credentials::new("id", "key")).unwrap();
    /// let listing = client.get_service(Ds3Request::get_service()).unwrap();
    /// for bucket in &listing.buckets {
    ///     println!("{:?} created {:?}", bucket.name, bucket.creation_date);
    /// }
    /// ```
    pub fn get_service(&self, request: Ds3Request) -> Result<ServiceListing, Error> {
        self.execute_xml(request, None)
    }
}
