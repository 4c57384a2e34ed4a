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

//! Credentials used to sign requests

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
/// Credentials contain the access id and the secret key of a DS3 user
pub struct Credentials {
    access_id: String,
    secret_key: String,
}

impl Credentials {
    /// Returns credentials with given access id and secret key
    ///
    /// # Examples
    ///
    /// ```
    /// use spectra::ds3::creds::Credentials;
    /// let creds = Credentials::new("c3BlY3RyYQ==", "secret");
    /// assert_eq!(creds.access_id(), "c3BlY3RyYQ==");
    /// ```
    pub fn new(access_id: &str, secret_key: &str) -> Credentials {
        Credentials {
            access_id: access_id.to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_id", &self.access_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
