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
use crate::ds3::types::{Bucket, ServiceListing};
use crate::ds3::utils::{child_elements, get_element_text};
use crate::ds3::xml::{decode_owner, parse_document};
use xmltree::Element;

fn decode_bucket(element: &Element) -> Bucket {
    let mut bucket = Bucket::default();
    for child in child_elements(element) {
        match child.name.as_str() {
            "Name" => bucket.name = get_element_text(child),
            "CreationDate" => bucket.creation_date = get_element_text(child),
            other => log::warn!("Unknown element in Bucket: '{other}'"),
        }
    }
    bucket
}

impl FromDs3Response for ServiceListing {
    const ROOT: &'static str = "ListAllMyBucketsResult";

    fn from_xml(body: &[u8]) -> Result<Self, Error> {
        let root = parse_document(body, Self::ROOT)?;

        let mut listing = ServiceListing::default();
        for child in child_elements(&root) {
            match child.name.as_str() {
                "Owner" => listing.owner = Some(decode_owner(child)),
                "Buckets" => {
                    for bucket in child_elements(child) {
                        if bucket.name == "Bucket" {
                            listing.buckets.push(decode_bucket(bucket));
                        } else {
                            log::warn!("Unknown element in Buckets: '{}'", bucket.name);
                        }
                    }
                }
                other => log::warn!("Unknown element in {}: '{other}'", Self::ROOT),
            }
        }
        Ok(listing)
    }
}
