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

//! Listing types: Owner, Bucket, ServiceListing, ObjectEntry, BucketListing

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Owner of a bucket or an object
pub struct Owner {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Contains the bucket name and creation date
pub struct Bucket {
    pub name: Option<String>,
    pub creation_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Decoded `ListAllMyBucketsResult` document, response of [get_service()](crate::ds3::client::Ds3Client::get_service)
pub struct ServiceListing {
    pub owner: Option<Owner>,
    pub buckets: Vec<Bucket>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// An object listed in a bucket
pub struct ObjectEntry {
    pub name: Option<String>,
    pub etag: Option<String>,
    pub last_modified: Option<String>,
    pub storage_class: Option<String>,
    pub size: u64,
    pub owner: Option<Owner>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Decoded `ListBucketResult` document, response of [get_bucket()](crate::ds3::client::Ds3Client::get_bucket)
pub struct BucketListing {
    pub name: Option<String>,
    pub creation_date: Option<String>,
    pub marker: Option<String>,
    pub next_marker: Option<String>,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<u64>,
    pub is_truncated: bool,
    pub objects: Vec<ObjectEntry>,
    /// Key prefixes rolled up by the delimiter of the listing
    pub common_prefixes: Vec<String>,
}

impl BucketListing {
    /// Total size in bytes of the listed objects
    pub fn total_size(&self) -> u64 {
        self.objects.iter().map(|o| o.size).sum()
    }
}
