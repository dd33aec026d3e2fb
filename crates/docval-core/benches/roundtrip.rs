//! Import/export throughput on a synthetic nested document.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use docval_core::{export, import, JsonValue};
use serde_json::json;

/// A document with `rows` uniform records plus some nesting, roughly the
/// shape of a serialized settings/state dump.
fn synthetic_document(rows: usize) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = (0..rows)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("node-{i}"),
                "flags": [true, false, i % 3 == 0],
                "meta": {"depth": 3, "weight": i as f64 * 0.5, "note": null},
            })
        })
        .collect();
    json!({"entries": entries, "count": rows})
}

fn bench_roundtrip(c: &mut Criterion) {
    let doc = synthetic_document(256);

    c.bench_function("import_256_rows", |b| {
        b.iter(|| {
            let value: JsonValue = import(black_box(&doc)).unwrap();
            value
        })
    });

    let value: JsonValue = import(&doc).unwrap();
    c.bench_function("export_256_rows", |b| {
        b.iter(|| {
            let back: serde_json::Value = export(black_box(&value), &mut ()).unwrap();
            back
        })
    });
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
