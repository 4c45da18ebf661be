//! Criterion benchmarks for full-message codec throughput: measure, write
//! and parse of a representative record over heap buffers.
//!
//! Run with:
//!   cargo bench --bench codec

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pbwire::buffer::{BufferedData, SequentialData};
use pbwire::codec::{Codec, DEFAULT_MAX_DEPTH};

mod models {
    include!("../e2e/models.rs");
}

use models::{everything_sample, Timestamp, EVERYTHING, TIMESTAMP};

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let small = Timestamp {
        seconds: 5678,
        nanos: 1234,
    };
    let large = everything_sample();

    let small_size = TIMESTAMP.measure_record(&small);
    let large_size = EVERYTHING.measure_record(&large);

    // ── measure ─────────────────────────────────────────────────────────────
    group.bench_function("measure/timestamp", |b| {
        b.iter(|| TIMESTAMP.measure_record(&small))
    });
    group.bench_function("measure/everything", |b| {
        b.iter(|| EVERYTHING.measure_record(&large))
    });

    // ── write ───────────────────────────────────────────────────────────────
    group.throughput(Throughput::Bytes(small_size as u64));
    group.bench_with_input(BenchmarkId::new("write", "timestamp"), &small, |b, m| {
        let mut buf = BufferedData::allocate(small_size);
        b.iter(|| {
            buf.reset();
            TIMESTAMP.write(m, &mut buf).unwrap();
            buf.position()
        })
    });
    group.throughput(Throughput::Bytes(large_size as u64));
    group.bench_with_input(BenchmarkId::new("write", "everything"), &large, |b, m| {
        let mut buf = BufferedData::allocate(large_size);
        b.iter(|| {
            buf.reset();
            EVERYTHING.write(m, &mut buf).unwrap();
            buf.position()
        })
    });

    // ── parse ───────────────────────────────────────────────────────────────
    let small_bytes = TIMESTAMP.to_bytes(&small).unwrap();
    group.throughput(Throughput::Bytes(small_size as u64));
    group.bench_with_input(
        BenchmarkId::new("parse", "timestamp"),
        &small_bytes,
        |b, raw| {
            b.iter(|| {
                TIMESTAMP
                    .parse(&mut raw.open(), false, true, DEFAULT_MAX_DEPTH)
                    .unwrap()
            })
        },
    );

    let large_bytes = EVERYTHING.to_bytes(&large).unwrap();
    group.throughput(Throughput::Bytes(large_size as u64));
    group.bench_with_input(
        BenchmarkId::new("parse", "everything"),
        &large_bytes,
        |b, raw| {
            b.iter(|| {
                EVERYTHING
                    .parse(&mut raw.open(), false, true, DEFAULT_MAX_DEPTH)
                    .unwrap()
            })
        },
    );

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
