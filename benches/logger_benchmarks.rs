//! Criterion benchmarks for telemetry

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;
use telemetry::prelude::*;
use telemetry::{format_record, Record};

fn null_emitter() -> Emitter {
    Emitter::new(WriterSink::new(io::sink()))
}

// ============================================================================
// Emitter Benchmarks
// ============================================================================

fn bench_emitter_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitter_derivation");
    group.throughput(Throughput::Elements(1));

    let out = null_emitter();

    group.bench_function("with_level", |b| {
        b.iter(|| black_box(out.info()));
    });

    group.bench_function("with_field", |b| {
        b.iter(|| black_box(out.with_field("user_id", 12345)));
    });

    group.bench_function("with_content", |b| {
        b.iter(|| black_box(out.with_content("Test message")));
    });

    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let out = null_emitter();

    group.bench_function("info", |b| {
        let info = out.info();
        b.iter(|| info.log(black_box("Info message")));
    });

    group.bench_function("custom_level", |b| {
        let major = out.with_level(Level::custom("MAJOR"));
        b.iter(|| major.log(black_box("Major message")));
    });

    group.bench_function("with_metadata", |b| {
        let tagged = out
            .with_field("user_id", 12345)
            .with_field("action", "login")
            .with_field("success", true)
            .info();
        b.iter(|| tagged.log(black_box("User logged in")));
    });

    group.bench_function("formatting_disabled", |b| {
        let raw = out.with_settings(Settings::new().with_formatting_disabled(true));
        b.iter(|| raw.log(black_box("raw bytes")));
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_format_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_record");

    let settings = Settings::default();
    let meta = Metadata::new().with_field("request_id", "abc-123");

    for size in [16usize, 256, 4096] {
        let content = vec![b'x'; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| {
                let record = Record::new(&Level::Info, &meta, content);
                black_box(format_record(&settings, &record))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Transaction Benchmarks
// ============================================================================

fn bench_transaction_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction_flush");

    let out = null_emitter().info();

    for entries in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(BenchmarkId::from_parameter(entries), &entries, |b, &entries| {
            b.iter(|| {
                let mut tx = Transaction::begin();
                for i in 0..entries {
                    tx.append(&out.with_content(format!("step {}", i)));
                }
                black_box(tx.flush())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_emitter_derivation,
    bench_emit,
    bench_format_record,
    bench_transaction_flush,
);
criterion_main!(benches);
