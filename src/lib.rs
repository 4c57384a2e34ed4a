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

//! # Spectra DS3 Rust SDK (`spectra-ds3`)
//!
//! This crate provides a strongly-typed, blocking interface to DS3 bulk object
//! storage servers, which speak an S3-compatible REST dialect extended with
//! bulk job operations.
//!
//! Every supported operation has a request factory on [`ds3::types::Ds3Request`]
//! (e.g. [`Ds3Request::get_service`](ds3::types::Ds3Request::get_service),
//! [`Ds3Request::bulk_put`](ds3::types::Ds3Request::bulk_put)) and a matching
//! entry point on [`ds3::Ds3Client`] that signs, sends and decodes it.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use spectra::ds3::Ds3Client;
//! use spectra::ds3::creds::Credentials;
//! use spectra::ds3::types::Ds3Request;
//!
//! let creds = Credentials::new("access_id", "secret_key");
//! let client = Ds3Client::new("http://localhost:8080", creds).unwrap();
//!
//! let listing = client.get_service(Ds3Request::get_service()).unwrap();
//! for bucket in &listing.buckets {
//!     println!("bucket: {:?}", bucket.name);
//! }
//!
//! spectra::ds3::cleanup();
//! ```
//!
//! ## Design
//! - Requests are immutable values built by factories and consumed by exactly one call
//! - Each call performs exactly one synchronous HTTP exchange
//! - Requests are signed with the `AWS <id>:<signature>` HMAC-SHA1 scheme
//! - Responses are decoded into plain structs; errors are returned as `Result<T, Error>`

pub mod ds3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
