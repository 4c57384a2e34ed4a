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

pub const AUTHORIZATION: &str = "Authorization";
pub const DATE: &str = "Date";

pub const X_AMZ_PREFIX: &str = "x-amz-";

/// Query parameter selecting the bulk operation on `/_rest_/bucket/{bucket}`.
pub const OPERATION: &str = "operation";
pub const START_BULK_GET: &str = "start_bulk_get";
pub const START_BULK_PUT: &str = "start_bulk_put";
