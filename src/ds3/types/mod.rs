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

//! Core DS3 types

pub mod basic_types;
pub mod bulk;
pub mod request;

pub use basic_types::{Bucket, BucketListing, ObjectEntry, Owner, ServiceListing};
pub use bulk::{BulkJobManifest, BulkObject, BulkObjectList};
pub use request::Ds3Request;
