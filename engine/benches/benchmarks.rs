//! Performance benchmarks for flowexport-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flowexport_engine::{
    value, ExportPacket, FieldSpec, FieldValue, InformationElement as IE, Record, RecordGroup,
    Template,
};
use std::sync::Arc;

fn create_flow_template() -> Arc<Template> {
    Arc::new(
        Template::new(256)
            .with_field(IE::SourceIPv4Address, 4)
            .with_field(IE::DestinationIPv4Address, 4)
            .with_field(IE::SourceTransportPort, 2)
            .with_field(IE::DestinationTransportPort, 2)
            .with_field(IE::ProtocolIdentifier, 1)
            .with_field(IE::PacketDeltaCount, 4)
            .with_field(IE::OctetDeltaCount, 8)
            .with_field(IE::FlowStartSeconds, 4)
            .with_field(IE::FlowEndSeconds, 4)
            .with_field(IE::InterfaceName, 16),
    )
}

fn create_flow(i: u32) -> Vec<FieldValue> {
    vec![
        FieldValue::Ipv4([10, 0, (i >> 8) as u8, i as u8].into()),
        FieldValue::Ipv4([10, 1, 0, 1].into()),
        ((40_000 + i % 20_000) as u16).into(),
        443u16.into(),
        6u8.into(),
        (i % 100).into(),
        u64::from(i).saturating_mul(1_500).into(),
        1_706_745_600u32.into(),
        1_706_745_660u32.into(),
        "eth0".into(),
    ]
}

fn bench_value_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_encoding");

    group.bench_function("u32", |b| {
        let field = FieldSpec::new(IE::PacketDeltaCount, 4).unwrap();
        let v = FieldValue::U32(123_456);
        b.iter(|| value::encode(black_box(&field), black_box(&v)))
    });

    group.bench_function("text", |b| {
        let field = FieldSpec::new(IE::InterfaceName, 16).unwrap();
        let v = FieldValue::from("eth0");
        b.iter(|| value::encode(black_box(&field), black_box(&v)))
    });

    group.bench_function("from_json", |b| {
        let field = FieldSpec::new(IE::SourceIPv4Address, 4).unwrap();
        let v = serde_json::json!("192.168.10.20");
        b.iter(|| FieldValue::from_json(black_box(&v), black_box(&field)))
    });

    group.finish();
}

fn bench_record_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_construction");
    let template = create_flow_template();

    group.bench_function("flow_record", |b| {
        b.iter(|| Record::new(Arc::clone(&template), black_box(create_flow(7))))
    });

    group.finish();
}

fn bench_packet_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("packet_encoding");

    for size in [1u32, 10, 20].iter() {
        group.bench_with_input(BenchmarkId::new("encode", size), size, |b, &size| {
            let mut records = RecordGroup::new(create_flow_template());
            for i in 0..size {
                records.add_record(create_flow(i)).unwrap();
            }
            let packet = ExportPacket::new(1, 0).with_group(records);

            b.iter(|| packet.encode(black_box(1_706_745_600)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_value_encoding,
    bench_record_construction,
    bench_packet_encoding,
);
criterion_main!(benches);
