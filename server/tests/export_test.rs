//! Integration tests for the export request format.
//!
//! These tests mirror the JSON a value source posts to `/flows` and check
//! the packets the engine produces from it.

use flowexport_engine::{
    ExportPacket, FieldSpec, FieldValue, InformationElement, RecordGroup, SequenceCounter,
    Template,
};
use serde_json::json;
use std::sync::Arc;

/// Test helper to build the engine group a request group describes.
fn group_from_json(template: &serde_json::Value, rows: &serde_json::Value) -> RecordGroup {
    let template: Template = serde_json::from_value(template.clone()).unwrap();
    let template = Arc::new(template);
    let mut group = RecordGroup::new(Arc::clone(&template));
    for row in rows.as_array().unwrap() {
        let values = row
            .as_array()
            .unwrap()
            .iter()
            .zip(template.fields())
            .map(|(v, f)| FieldValue::from_json(v, f).unwrap())
            .collect();
        group.add_record(values).unwrap();
    }
    group
}

#[cfg(test)]
mod request_tests {
    use super::*;

    #[test]
    fn test_nsg_flow_tuple_batch() {
        let template = json!({
            "id": 256,
            "fields": [
                {"elementId": 150, "size": 4},
                {"elementId": 8, "size": 4},
                {"elementId": 12, "size": 4},
                {"elementId": 7, "size": 2},
                {"elementId": 11, "size": 2},
                {"elementId": 4, "size": 1},
                {"elementId": 82, "size": 16}
            ]
        });
        let rows = json!([
            [1706745600, "10.0.0.4", "13.67.143.118", 44931, 443, 6, "nic-web-01"],
            [1706745601, "10.0.0.4", "13.67.143.118", 44932, 443, 6, "nic-web-01"],
            [1706745602, "10.0.0.5", "8.8.8.8", 53011, 53, 17, "nic-dns"]
        ]);

        let group = group_from_json(&template, &rows);
        assert_eq!(group.record_count(), 3);

        // 4+4+4+2+2+1+16 = 33 field bytes, padded to 36
        for record in group.records() {
            assert_eq!(record.raw_len(), 33);
            assert_eq!(record.encoded_len(), 40);
        }

        let packet = SequenceCounter::new(1).next_packet().with_group(group);
        let bytes = packet.encode(1706745700).unwrap();
        assert_eq!(bytes.len(), 20 + 36 + 3 * 40);
        assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]), 4);
    }

    #[test]
    fn test_template_json_shape() {
        let template = Template::new(300)
            .with_field(InformationElement::SourceIPv4Address, 4)
            .with_field(40_000u16, 8);

        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(
            json,
            json!({
                "id": 300,
                "fields": [
                    {"elementId": 8, "size": 4},
                    {"elementId": 40000, "size": 8}
                ]
            })
        );
    }

    #[test]
    fn test_field_spec_lookup() {
        let spec = FieldSpec::new(12u16, 4).unwrap();
        assert_eq!(spec.element(), Some(InformationElement::DestinationIPv4Address));
        assert!(spec.is_ipv4_address());
    }

    #[test]
    fn test_multiple_batches_share_template() {
        let template = json!({"id": 260, "fields": [{"elementId": 7, "size": 2}]});
        let mut counter = SequenceCounter::new(9);

        let first = counter
            .next_packet()
            .with_group(group_from_json(&template, &json!([[80]])));
        let second = counter
            .next_packet()
            .with_group(group_from_json(&template, &json!([[443], [8443]])));

        let a = first.encode(0).unwrap();
        let b = second.encode(0).unwrap();

        assert_eq!(&a[12..16], &[0, 0, 0, 0]);
        assert_eq!(&b[12..16], &[0, 0, 0, 1]);
        // template flowset identical in both packets
        assert_eq!(a[20..32], b[20..32]);
    }

    #[test]
    fn test_empty_packet() {
        let packet = ExportPacket::new(0, 0);
        assert_eq!(packet.count(), 0);
        assert_eq!(packet.encode(0).unwrap().len(), 20);
    }
}
