use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use inflow_core::Row;
use inflow_vendors::extract_vendor_references;
use serde_json::{Value, json};

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => panic!("bench fixture must be an object"),
    }
}

fn payload_shapes() -> Vec<(&'static str, Row)> {
    vec![
        (
            "scalar",
            row(json!({"vendorCode": "V1", "vendorName": "Acme"})),
        ),
        (
            "array_of_objects",
            row(json!({
                "vendors": [
                    {"vendorCode": "V1", "vendorName": "Acme"},
                    {"vendorCode": "V2", "vendorName": "Globex"},
                    {"vendorCode": "V3"}
                ]
            })),
        ),
        (
            "truncated_payload",
            row(json!({
                "vendorDetails": r#"[{"vendorCode":"V1","vendorName":"Acme"},{"vendorCode":"V2"#
            })),
        ),
        (
            "free_text_fallback",
            row(json!({
                "itemCode": "AB001",
                "remarks": "restocked from KL204 and MN77 consignments"
            })),
        ),
    ]
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("vendor_extraction");
    for (name, fixture) in payload_shapes() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(name), &fixture, |b, fixture| {
            b.iter(|| extract_vendor_references(black_box(fixture)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
