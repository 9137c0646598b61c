//! Parser micro-benchmarks
//!
//! Measures tokenization throughput for representative path shapes.

use criterion::{Criterion, criterion_group, criterion_main};
use dotpath::parse;
use std::hint::black_box;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_dotted_identifiers", |b| {
        b.iter(|| parse(black_box("service.endpoints.primary.host")))
    });

    c.bench_function("parse_mixed_segments", |b| {
        b.iter(|| parse(black_box("users[12].accounts['primary-account'].balance")))
    });

    c.bench_function("parse_rejects_invalid", |b| {
        b.iter(|| parse(black_box("users[12].accounts[primary].balance")))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
