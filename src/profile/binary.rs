use std::path::Path;

use serde_json::Value;

use super::record::{ProfileRecord, TagValue};
use crate::error::AppResult;
use crate::exiftool::MetadataSource;

pub const BINARY_PLACEHOLDER: &str = "use -b option to extract";

pub fn needs_binary_fetch(value: &TagValue) -> bool {
    value
        .payload_text()
        .is_some_and(|text| text.contains(BINARY_PLACEHOLDER))
}

pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn resolve_binary_tags<S: MetadataSource>(
    source: &S,
    path: &Path,
    record: &mut ProfileRecord,
) -> AppResult<()> {
    let pending: Vec<String> = record
        .iter()
        .filter(|(_, value)| needs_binary_fetch(value))
        .map(|(name, _)| name.to_string())
        .collect();

    for name in pending {
        println!("   Extracting binary data from tag {name} ...");
        let bytes = source.extract_binary(path, &name)?;
        if let Some(value) = record.get_mut(&name) {
            value.set_payload(Value::String(hex_dump(&bytes)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;

    struct StaticBytes {
        bytes: Vec<u8>,
        fetched: RefCell<Vec<String>>,
    }

    impl StaticBytes {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.to_vec(),
                fetched: RefCell::new(Vec::new()),
            }
        }
    }

    impl MetadataSource for StaticBytes {
        fn extract_all(&self, _path: &Path, _include_hex_ids: bool) -> AppResult<ProfileRecord> {
            Ok(ProfileRecord::new())
        }

        fn extract_binary(&self, _path: &Path, tag: &str) -> AppResult<Vec<u8>> {
            self.fetched.borrow_mut().push(tag.to_string());
            Ok(self.bytes.clone())
        }
    }

    fn placeholder() -> Value {
        json!(format!("(Binary data 16 bytes, {BINARY_PLACEHOLDER})"))
    }

    #[test]
    fn renders_bytes_as_spaced_hex_pairs() {
        assert_eq!(hex_dump(&[0x00, 0x0f, 0xff]), "00 0f ff");
        assert_eq!(hex_dump(&[0xde, 0xad, 0xbe, 0xef]), "de ad be ef");
        assert_eq!(hex_dump(&[]), "");
    }

    #[test]
    fn detects_placeholders_in_both_value_shapes() {
        let bare = TagValue::Scalar(placeholder());
        let wrapped = TagValue::Identified {
            id: json!("0x12"),
            val: placeholder(),
        };

        assert!(needs_binary_fetch(&bare));
        assert!(needs_binary_fetch(&wrapped));
        assert!(!needs_binary_fetch(&TagValue::Scalar(json!("RGB"))));
        assert!(!needs_binary_fetch(&TagValue::Scalar(json!(2240))));
    }

    #[test]
    fn replaces_placeholders_with_hex_dumps() {
        let source = StaticBytes::new(&[0xca, 0xfe]);
        let mut record = ProfileRecord::new();
        record.insert("RedTRC", TagValue::Scalar(placeholder()));
        record.insert("ColorSpace", TagValue::Scalar(json!("RGB")));

        resolve_binary_tags(&source, Path::new("a.icc"), &mut record)
            .expect("binary resolution should succeed");

        assert_eq!(
            record.get("RedTRC"),
            Some(&TagValue::Scalar(json!("ca fe")))
        );
        assert_eq!(
            record.get("ColorSpace"),
            Some(&TagValue::Scalar(json!("RGB")))
        );
        assert_eq!(*source.fetched.borrow(), vec!["RedTRC".to_string()]);
    }

    #[test]
    fn zero_byte_payloads_become_empty_strings() {
        let source = StaticBytes::new(&[]);
        let mut record = ProfileRecord::new();
        record.insert("DeviceMfgDesc", TagValue::Scalar(placeholder()));

        resolve_binary_tags(&source, Path::new("a.icc"), &mut record)
            .expect("binary resolution should succeed");

        assert_eq!(
            record.get("DeviceMfgDesc"),
            Some(&TagValue::Scalar(json!("")))
        );
    }

    #[test]
    fn hex_id_values_keep_their_id_after_resolution() {
        let source = StaticBytes::new(&[0x01, 0x02]);
        let mut record = ProfileRecord::new();
        record.insert(
            "BlueTRC",
            TagValue::Identified {
                id: json!("0x62545243"),
                val: placeholder(),
            },
        );

        resolve_binary_tags(&source, Path::new("a.icc"), &mut record)
            .expect("binary resolution should succeed");

        assert_eq!(
            record.get("BlueTRC"),
            Some(&TagValue::Identified {
                id: json!("0x62545243"),
                val: json!("01 02"),
            })
        );
    }

    #[test]
    fn untouched_records_skip_the_source_entirely() {
        let source = StaticBytes::new(&[0xff]);
        let mut record = ProfileRecord::new();
        record.insert("ColorSpace", TagValue::Scalar(json!("RGB")));

        resolve_binary_tags(&source, Path::new("a.icc"), &mut record)
            .expect("binary resolution should succeed");

        assert!(source.fetched.borrow().is_empty());
    }
}
