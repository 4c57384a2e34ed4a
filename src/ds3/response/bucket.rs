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

use crate::ds3::error::Error;
use crate::ds3::response::FromDs3Response;
use crate::ds3::types::{BucketListing, ObjectEntry};
use crate::ds3::utils::{child_elements, get_element_text, get_element_u64};
use crate::ds3::xml::{decode_owner, parse_document};
use xmltree::Element;

fn decode_object(element: &Element) -> ObjectEntry {
    let mut object = ObjectEntry::default();
    for child in child_elements(element) {
        match child.name.as_str() {
            "Key" => object.name = get_element_text(child),
            "ETag" => object.etag = get_element_text(child),
            "LastModified" => object.last_modified = get_element_text(child),
            "StorageClass" => object.storage_class = get_element_text(child),
            "Size" => object.size = get_element_u64(child),
            "Owner" => object.owner = Some(decode_owner(child)),
            other => log::warn!("Unknown element in Contents: '{other}'"),
        }
    }
    object
}

impl FromDs3Response for BucketListing {
    const ROOT: &'static str = "ListBucketResult";

    fn from_xml(body: &[u8]) -> Result<Self, Error> {
        let root = parse_document(body, Self::ROOT)?;

        let mut listing = BucketListing::default();
        for child in child_elements(&root) {
            match child.name.as_str() {
                "Contents" => listing.objects.push(decode_object(child)),
                "CommonPrefixes" => listing.common_prefixes.extend(
                    child_elements(child)
                        .filter(|e| e.name == "Prefix")
                        .filter_map(get_element_text),
                ),
                "CreationDate" => listing.creation_date = get_element_text(child),
                "IsTruncated" => {
                    listing.is_truncated = get_element_text(child).as_deref() == Some("true")
                }
                "Marker" => listing.marker = get_element_text(child),
                "MaxKeys" => listing.max_keys = Some(get_element_u64(child)),
                "Name" => listing.name = get_element_text(child),
                "Delimiter" => listing.delimiter = get_element_text(child),
                "NextMarker" => listing.next_marker = get_element_text(child),
                "Prefix" => listing.prefix = get_element_text(child),
                other => log::warn!("Unknown element in {}: '{other}'", Self::ROOT),
            }
        }
        Ok(listing)
    }
}
