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

//! Implementation of the DS3 bulk object storage client

pub mod builders;
pub mod client;
pub mod creds;
pub mod error;
pub mod header_constants;
pub mod header_parser;
pub mod ordered_map;
pub mod response;
pub mod signer;
pub mod transport;
pub mod types;
pub mod utils;
pub mod xml;

#[cfg(test)]
mod signer_tests;

pub use client::{Ds3Client, Ds3ClientBuilder};
pub use transport::cleanup;
