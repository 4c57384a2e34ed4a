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

//! Decoder of the `MasterObjectList` bulk job manifest.
//!
//! The manifest carries its data in attributes: `JobId` on the root,
//! `ServerId` and `ChunkNumber` on every `Objects` chunk, `Name` and `Size`
//! on every `Object`.

use crate::ds3::error::Error;
use crate::ds3::response::FromDs3Response;
use crate::ds3::types::{BulkJobManifest, BulkObject, BulkObjectList};
use crate::ds3::utils::{child_elements, parse_leading_u64};
use crate::ds3::xml::{parse_document, MASTER_OBJECT_LIST, OBJECT, OBJECTS};
use xmltree::Element;

fn decode_object(element: &Element) -> BulkObject {
    let mut name = None;
    let mut size = 0;
    for (key, value) in &element.attributes {
        match key.as_str() {
            "Name" => name = Some(value.clone()),
            "Size" => size = parse_leading_u64(value),
            other => log::warn!("Unknown attribute in {OBJECT}: '{other}'"),
        }
    }
    let name = name.unwrap_or_else(|| {
        log::warn!("{OBJECT} element without a Name attribute");
        String::new()
    });
    BulkObject { name, size }
}

fn decode_chunk(element: &Element) -> BulkObjectList {
    let mut chunk = BulkObjectList::default();
    for (key, value) in &element.attributes {
        match key.as_str() {
            "ServerId" => chunk.server_id = Some(value.clone()),
            "ChunkNumber" => chunk.chunk_number = Some(parse_leading_u64(value)),
            other => log::warn!("Unknown attribute in {OBJECTS}: '{other}'"),
        }
    }
    for child in child_elements(element) {
        if child.name == OBJECT {
            chunk.objects.push(decode_object(child));
        } else {
            log::warn!("Unknown element in {OBJECTS}: '{}'", child.name);
        }
    }
    chunk
}

impl FromDs3Response for BulkJobManifest {
    const ROOT: &'static str = MASTER_OBJECT_LIST;

    fn from_xml(body: &[u8]) -> Result<Self, Error> {
        let root = parse_document(body, Self::ROOT)?;

        let mut manifest = BulkJobManifest::default();
        for (key, value) in &root.attributes {
            match key.as_str() {
                "JobId" => manifest.job_id = Some(value.clone()),
                other => log::warn!("Unknown attribute in {}: '{other}'", Self::ROOT),
            }
        }
        for child in child_elements(&root) {
            if child.name == OBJECTS {
                manifest.chunks.push(decode_chunk(child));
            } else {
                log::warn!("Unknown element in {}: '{}'", Self::ROOT, child.name);
            }
        }
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds3::error::ErrorKind;
    use crate::ds3::xml::encode_bulk_manifest;
    use quickcheck::{Arbitrary, Gen};

    const MANIFEST: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<MasterObjectList JobId="4a1b9e42-7f3b-4f4c-9f2a-0c1e7d1c3b11">
  <Objects ServerId="192.168.56.101" ChunkNumber="0">
    <Object Name="a" Size="10"/>
    <Object Name="b" Size="20"/>
  </Objects>
  <Objects ServerId="192.168.56.102" ChunkNumber="1">
    <Object Name="c" Size="30"></Object>
  </Objects>
</MasterObjectList>"#;

    #[test]
    fn test_decode_manifest() {
        let manifest = BulkJobManifest::from_xml(MANIFEST).unwrap();
        assert_eq!(
            manifest.job_id.as_deref(),
            Some("4a1b9e42-7f3b-4f4c-9f2a-0c1e7d1c3b11")
        );
        assert_eq!(manifest.chunks.len(), 2);
        assert_eq!(manifest.object_count(), 3);

        let first = &manifest.chunks[0];
        assert_eq!(first.server_id.as_deref(), Some("192.168.56.101"));
        assert_eq!(first.chunk_number, Some(0));
        assert_eq!(
            first.objects,
            vec![BulkObject::new("a", 10), BulkObject::new("b", 20)]
        );

        let second = &manifest.chunks[1];
        assert_eq!(second.chunk_number, Some(1));
        assert_eq!(second.objects, vec![BulkObject::new("c", 30)]);
    }

    #[test]
    fn test_object_count_independent_of_chunking() {
        let body = br#"<MasterObjectList JobId="j">
  <Objects ChunkNumber="0"><Object Name="a" Size="10"/></Objects>
  <Objects ChunkNumber="1"><Object Name="b" Size="20"/></Objects>
  <Objects ChunkNumber="2"><Object Name="c" Size="30"/></Objects>
</MasterObjectList>"#;
        let manifest = BulkJobManifest::from_xml(body).unwrap();
        assert_eq!(manifest.chunks.len(), 3);
        assert_eq!(manifest.object_count(), 3);
    }

    #[test]
    fn test_unknown_elements_and_attributes_are_skipped() {
        let body = br#"<MasterObjectList JobId="j" Priority="HIGH">
  <Status><Detail>in progress</Detail></Status>
  <Objects ChunkNumber="7" NodeId="n1">
    <Object Name="x" Size="5" InCache="false"/>
    <Blob Offset="0"/>
    <Object Size="6"/>
  </Objects>
  <Objects/>
</MasterObjectList>"#;
        let manifest = BulkJobManifest::from_xml(body).unwrap();
        assert_eq!(manifest.job_id.as_deref(), Some("j"));
        assert_eq!(manifest.chunks.len(), 2);
        let chunk = &manifest.chunks[0];
        assert_eq!(chunk.chunk_number, Some(7));
        assert_eq!(chunk.server_id, None);
        assert_eq!(
            chunk.objects,
            vec![BulkObject::new("x", 5), BulkObject::new("", 6)]
        );
        assert!(manifest.chunks[1].is_empty());
    }

    #[test]
    fn test_object_without_name_decodes_to_empty_name() {
        let body = br#"<MasterObjectList><Objects><Object Size="6"/><Object Name="" Size="7"/></Objects></MasterObjectList>"#;
        let manifest = BulkJobManifest::from_xml(body).unwrap();
        assert_eq!(manifest.object_count(), 2);
        assert_eq!(
            manifest.chunks[0].objects,
            vec![BulkObject::new("", 6), BulkObject::new("", 7)]
        );
    }

    #[test]
    fn test_manifest_without_job_id() {
        let manifest = BulkJobManifest::from_xml(b"<MasterObjectList/>").unwrap();
        assert_eq!(manifest, BulkJobManifest::default());
    }

    #[test]
    fn test_wrong_root() {
        let err = BulkJobManifest::from_xml(b"<Error><Code>InvalidRequest</Code></Error>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidXml);
        assert!(err.to_string().contains("'MasterObjectList'"));
        assert!(err.to_string().contains("<Code>InvalidRequest</Code>"));
    }

    #[test]
    fn test_malformed_document() {
        for body in [
            &b""[..],
            b"plain text",
            b"<MasterObjectList><Objects></MasterObjectList>",
            b"<MasterObjectList JobId=\"j\"><Objects>",
        ] {
            let err = BulkJobManifest::from_xml(body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidXml, "body {body:?}");
        }
    }

    #[test]
    fn test_encoded_manifest_decodes() {
        let list = BulkObjectList::new(vec![
            BulkObject::new("a", 10),
            BulkObject::new("b", 20),
            BulkObject::new("c", 30),
        ]);
        let manifest = BulkJobManifest::from_xml(encode_bulk_manifest(&list).as_bytes()).unwrap();
        assert_eq!(manifest.job_id, None);
        assert_eq!(manifest.object_count(), 3);
        assert_eq!(manifest.chunks[0].objects, list.objects);
    }

    #[test]
    fn test_control_whitespace_in_names_survives() {
        let list = BulkObjectList::new(vec![
            BulkObject::new("a\tb\nc", 1),
            BulkObject::new("line\r\n", 2),
        ]);
        let manifest = BulkJobManifest::from_xml(encode_bulk_manifest(&list).as_bytes()).unwrap();
        assert_eq!(manifest.chunks[0].objects, list.objects);
    }

    #[derive(Clone, Debug)]
    struct ObjectName(String);

    impl Arbitrary for ObjectName {
        fn arbitrary(g: &mut Gen) -> Self {
            let chars = String::arbitrary(g)
                .chars()
                .filter(|c| c.is_alphanumeric() || "&<>\"' /._-\t\n\r".contains(*c))
                .collect();
            ObjectName(chars)
        }
    }

    quickcheck! {
        fn prop_manifest_round_trip(objects: Vec<(ObjectName, u64)>) -> bool {
            let list = BulkObjectList::new(
                objects
                    .into_iter()
                    .map(|(name, size)| BulkObject::new(name.0, size))
                    .collect(),
            );
            let xml = encode_bulk_manifest(&list);
            match BulkJobManifest::from_xml(xml.as_bytes()) {
                Ok(manifest) => manifest.chunks.len() == 1 && manifest.chunks[0].objects == list.objects,
                Err(_) => false,
            }
        }
    }
}
