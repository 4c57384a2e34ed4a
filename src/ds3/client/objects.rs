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
use crate::ds3::types::Ds3Request;
use std::io::{Read, Write};

impl Ds3Client {
    /// Downloads an object, streaming its content into `writer`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use spectra::ds3::Ds3Client;
    /// use spectra::ds3::creds::Credentials;
    /// use spectra::ds3::types::Ds3Request;
    /// use std::fs::File;
    ///
    /// let client = Ds3Client::new("http://localhost:8080", Credentials::new("id", "key")).unwrap();
    /// let mut file = File::create("/tmp/beach.jpg").unwrap();
    /// let metadata = client
    ///     .get_object(Ds3Request::get_object("photos", "vacation/beach.jpg"), &mut file)
    ///     .unwrap();
    /// assert!(metadata.is_success());
    /// ```
    pub fn get_object(
        &self,
        request: Ds3Request,
        writer: &mut dyn Write,
    ) -> Result<ResponseMetadata, Error> {
        Ok(self.execute(request, None, Some(writer))?.metadata)
    }

    /// Uploads the content of `reader` as an object.
    ///
    /// Exactly the length declared by [`Ds3Request::put_object`] is read and
    /// sent.
    pub fn put_object<R: Read + Send + 'static>(
        &self,
        request: Ds3Request,
        reader: R,
    ) -> Result<ResponseMetadata, Error> {
        Ok(self.execute(request, Some(Box::new(reader)), None)?.metadata)
    }

    pub fn delete_object(&self, request: Ds3Request) -> Result<ResponseMetadata, Error> {
        Ok(self.execute(request, None, None)?.metadata)
    }

    /// Fetches the metadata of an object without its content
    pub fn head_object(&self, request: Ds3Request) -> Result<ResponseMetadata, Error> {
        Ok(self.execute(request, None, None)?.metadata)
    }
}
