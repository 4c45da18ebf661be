//! Criterion benchmarks for the varint codec and the hashing sink.
//!
//! Run with:
//!   cargo bench --bench varint

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pbwire::buffer::{
    BufferedData, HashingData, ReadableSequentialData, SequentialData, WritableSequentialData,
};
use pbwire::varint;

/// A deterministic mix of small, medium and large values.
fn sample_values(n: usize) -> Vec<u64> {
    (0..n as u64)
        .map(|i| match i % 4 {
            0 => i % 128,
            1 => (i << 7) | 0x55,
            2 => (i << 21) | 0xAAAA,
            _ => i.wrapping_mul(0x9E37_79B9_7F4A_7C15),
        })
        .collect()
}

fn bench_varint(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint");

    for &count in &[1_024usize, 16_384] {
        let values = sample_values(count);
        let encoded_len: usize = values.iter().map(|&v| varint::size_of_unsigned(v)).sum();

        // ── encode into a reusable buffer ───────────────────────────────────
        group.throughput(Throughput::Bytes(encoded_len as u64));
        group.bench_with_input(BenchmarkId::new("encode", count), &values, |b, values| {
            let mut buf = BufferedData::allocate(encoded_len);
            b.iter(|| {
                buf.reset();
                for &v in values {
                    buf.write_var_u64(v).unwrap();
                }
                buf.position()
            })
        });

        // ── decode via the contiguous fast path ─────────────────────────────
        let mut buf = BufferedData::allocate(encoded_len);
        for &v in &values {
            buf.write_var_u64(v).unwrap();
        }
        group.throughput(Throughput::Bytes(encoded_len as u64));
        group.bench_with_input(BenchmarkId::new("decode", count), &count, |b, &count| {
            b.iter(|| {
                buf.reset();
                let mut acc = 0u64;
                for _ in 0..count {
                    acc = acc.wrapping_add(buf.read_var_u64().unwrap());
                }
                acc
            })
        });

        // ── size computation alone ──────────────────────────────────────────
        group.bench_with_input(BenchmarkId::new("size_of", count), &values, |b, values| {
            b.iter(|| values.iter().map(|&v| varint::size_of_unsigned(v)).sum::<usize>())
        });
    }

    group.finish();
}

fn bench_hashing_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashing_sink");

    for &size in &[4_096usize, 65_536] {
        let payload: Vec<u8> = (0..size).map(|i| i as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("xxh3", size), &payload, |b, payload| {
            b.iter(|| {
                let mut sink = HashingData::xxh3();
                sink.write_slice(payload).unwrap();
                sink.hash()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_varint, bench_hashing_sink);
criterion_main!(benches);
