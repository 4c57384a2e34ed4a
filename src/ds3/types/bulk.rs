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

//! Bulk job types.
//!
//! A [`BulkObjectList`] is both the outbound payload of a bulk request and one
//! chunk of the [`BulkJobManifest`] the server answers with. Only chunks
//! received from the server carry a server id and a chunk number.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkObject {
    /// Object name. Empty when a manifest entry carries no `Name` attribute.
    pub name: String,
    pub size: u64,
}

impl BulkObject {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        BulkObject {
            name: name.into(),
            size,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkObjectList {
    pub objects: Vec<BulkObject>,
    pub server_id: Option<String>,
    pub chunk_number: Option<u64>,
}

impl BulkObjectList {
    pub fn new(objects: Vec<BulkObject>) -> Self {
        BulkObjectList {
            objects,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Sum of the sizes of all objects in the list
    pub fn total_size(&self) -> u64 {
        self.objects.iter().map(|o| o.size).sum()
    }
}

impl FromIterator<BulkObject> for BulkObjectList {
    fn from_iter<I: IntoIterator<Item = BulkObject>>(iter: I) -> Self {
        BulkObjectList::new(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Decoded `MasterObjectList` document, response of [bulk()](crate::ds3::client::Ds3Client::bulk)
pub struct BulkJobManifest {
    pub job_id: Option<String>,
    pub chunks: Vec<BulkObjectList>,
}

impl BulkJobManifest {
    /// Number of objects across all chunks
    pub fn object_count(&self) -> usize {
        self.chunks.iter().map(BulkObjectList::len).sum()
    }

    /// Iterates over the objects of all chunks in chunk order
    pub fn objects(&self) -> impl Iterator<Item = &BulkObject> {
        self.chunks.iter().flat_map(|c| c.objects.iter())
    }
}
