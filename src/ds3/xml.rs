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

//! XML helpers shared by the response decoders, and the bulk manifest encoder

use crate::ds3::error::Error;
use crate::ds3::types::{BulkObjectList, Owner};
use crate::ds3::utils::{child_elements, get_element_text};
use quick_xml::escape::escape;
use xmltree::{Element, ParserConfig};

pub const MASTER_OBJECT_LIST: &str = "MasterObjectList";
pub const OBJECTS: &str = "Objects";
pub const OBJECT: &str = "Object";

const PARSE_FAILURE: &str = "Failed to parse response document";

/// Parses a response body and checks the name of its root element.
///
/// Whitespace-only text is kept, so leaf values come back exactly as sent.
pub(crate) fn parse_document(body: &[u8], root: &str) -> Result<Element, Error> {
    let config = ParserConfig::new().whitespace_to_characters(true);
    let element = Element::parse_with_config(body, config).map_err(|e| {
        log::debug!("unparseable response document: {e}");
        Error::invalid_xml(PARSE_FAILURE, body)
    })?;
    if element.name != root {
        return Err(Error::invalid_xml(
            format!("Expected the root element to be '{root}'"),
            body,
        ));
    }
    Ok(element)
}

/// Decodes an `Owner` element wherever it occurs
pub(crate) fn decode_owner(element: &Element) -> Owner {
    let mut owner = Owner::default();
    for child in child_elements(element) {
        match child.name.as_str() {
            "ID" => owner.id = get_element_text(child),
            "DisplayName" => owner.display_name = get_element_text(child),
            other => log::warn!("Unknown element in Owner: '{other}'"),
        }
    }
    owner
}

/// Escapes an attribute value. Tab, newline and carriage return become
/// character references, as parsers turn the raw characters into spaces.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in escape(value).chars() {
        match c {
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Serializes an object list into the body of a bulk request.
///
/// Objects keep the order of the list. The declared length of the request is
/// the byte length of the returned document.
pub fn encode_bulk_manifest(list: &BulkObjectList) -> String {
    let mut data = String::from("<?xml version=\"1.0\"?>\n<MasterObjectList>\n  <Objects>\n");
    for object in &list.objects {
        data.push_str("    <Object Name=\"");
        data.push_str(&escape_attribute(&object.name));
        data.push_str("\" Size=\"");
        data.push_str(&object.size.to_string());
        data.push_str("\"/>\n");
    }
    data.push_str("  </Objects>\n</MasterObjectList>\n");
    data
}
