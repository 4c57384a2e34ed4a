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
use crate::ds3::types::{BulkJobManifest, Ds3Request};
use crate::ds3::xml::encode_bulk_manifest;
use bytes::Bytes;
use std::io::Cursor;

impl Ds3Client {
    /// Starts a bulk get or bulk put job.
    ///
    /// The object list attached by [`Ds3Request::bulk_get`] or
    /// [`Ds3Request::bulk_put`] is sent as a `MasterObjectList` document. The
    /// server answers with the job manifest, which splits the objects into
    /// the chunks the client transfers afterwards.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use spectra::ds3::Ds3Client;
    /// use spectra::ds3::creds::Credentials;
    /// use spectra::ds3::types::{BulkObject, BulkObjectList, Ds3Request};
    ///
    /// let client = Ds3Client::new("http://localhost:8080", Credentials::new("id", "key")).unwrap();
    /// let objects = BulkObjectList::new(vec![
    ///     BulkObject::new("logs/2015-01-01.gz", 1_048_576),
    ///     BulkObject::new("logs/2015-01-02.gz", 2_097_152),
    /// ]);
    /// let manifest = client.bulk(Ds3Request::bulk_put("archive", objects)).unwrap();
    /// for chunk in &manifest.chunks {
    ///     println!("chunk {:?}: {} objects", chunk.chunk_number, chunk.len());
    /// }
    /// ```
    pub fn bulk(&self, mut request: Ds3Request) -> Result<BulkJobManifest, Error> {
        let document = match request.object_list.take() {
            Some(list) if !list.is_empty() => encode_bulk_manifest(&list),
            _ => {
                return Err(Error::MissingArgs(
                    "The bulk command requires a list of objects to process".into(),
                ));
            }
        };
        log::trace!("bulk request document: {document}");

        let body = Bytes::from(document);
        request.set_length(body.len() as u64);
        self.execute_xml(request, Some(Box::new(Cursor::new(body))))
    }
}
