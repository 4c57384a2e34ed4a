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

//! HMAC-SHA1 request signing for the DS3 API

use crate::ds3::creds::Credentials;
use crate::ds3::error::Error;
use crate::ds3::header_constants::{AUTHORIZATION, DATE, X_AMZ_PREFIX};
use crate::ds3::ordered_map::OrderedMap;
use crate::ds3::utils::b64encode;
use hmac::{Hmac, Mac};
use http::Method;
use sha1::Sha1;
use std::collections::BTreeMap;

/// Returns HMAC-SHA1 hash for given key and data
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha1>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns the canonicalized `x-amz-*` header block of a request.
///
/// Names are lower-cased and sorted, each header contributes `name:value\n`.
/// Values of headers whose names only differ in case are joined by `,`.
pub fn canonicalized_amz_headers(headers: &OrderedMap) -> String {
    let mut amz: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for (name, value) in headers.iter() {
        let name = name.to_lowercase();
        if name.starts_with(X_AMZ_PREFIX) {
            amz.entry(name).or_default().push(value.trim());
        }
    }

    amz.iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect()
}

/// Returns the string to sign of a request
pub fn string_to_sign(
    method: &Method,
    resource: &str,
    date: &str,
    content_type: &str,
    content_md5: &str,
    amz_headers: &str,
) -> Result<String, Error> {
    if resource.is_empty() {
        return Err(Error::MissingArgs(
            "The resource path of the request is required to sign it".into(),
        ));
    }
    if date.is_empty() {
        return Err(Error::MissingArgs(
            "The date of the request is required to sign it".into(),
        ));
    }

    // StringToSign =
    //   HTTP-Verb + '\n' +
    //   Content-MD5 + '\n' +
    //   Content-Type + '\n' +
    //   Date + '\n' +
    //   CanonicalizedAmzHeaders +
    //   CanonicalizedResource
    Ok(format!(
        "{}\n{}\n{}\n{}\n{}{}",
        method, content_md5, content_type, date, amz_headers, resource
    ))
}

/// Returns the base64 encoded signature of a request
pub fn sign(
    creds: &Credentials,
    method: &Method,
    resource: &str,
    date: &str,
    content_type: &str,
    content_md5: &str,
    amz_headers: &str,
) -> Result<String, Error> {
    let string_to_sign = string_to_sign(
        method,
        resource,
        date,
        content_type,
        content_md5,
        amz_headers,
    )?;
    log::trace!("string to sign: {string_to_sign:?}");
    Ok(b64encode(hmac_sha1(
        creds.secret_key().as_bytes(),
        string_to_sign.as_bytes(),
    )))
}

/// Returns the `Authorization` header value for a signature
pub fn authorization(access_id: &str, signature: &str) -> String {
    format!("AWS {access_id}:{signature}")
}

/// Signs a request and adds the `Date` and `Authorization` headers to it.
///
/// Content-Type and Content-MD5 are signed as empty strings.
pub fn sign_request(
    creds: &Credentials,
    method: &Method,
    resource: &str,
    headers: &mut OrderedMap,
    date: &str,
) -> Result<(), Error> {
    let amz_headers = canonicalized_amz_headers(headers);
    let signature = sign(creds, method, resource, date, "", "", &amz_headers)?;
    headers.insert(DATE, date);
    headers.insert(AUTHORIZATION, authorization(creds.access_id(), &signature));
    Ok(())
}
