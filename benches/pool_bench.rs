//! Benchmarks for bytepool.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bytepool::{BytePool, Cursor};

fn bench_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("building");

    for count in [1_000usize, 100_000] {
        group.throughput(Throughput::Bytes((count * 8) as u64));
        group.bench_function(format!("emit_octa_{}", count), |b| {
            b.iter(|| {
                let mut pool = BytePool::new();
                pool.use_big_endian();
                for i in 0..count {
                    pool.emit_octa(black_box(i as u64));
                }
                black_box(pool.size())
            });
        });

        group.throughput(Throughput::Bytes(count as u64));
        group.bench_function(format!("emit_byte_{}", count), |b| {
            b.iter(|| {
                let mut pool = BytePool::new();
                for i in 0..count {
                    pool.emit_byte(black_box(i as u8));
                }
                black_box(pool.size())
            });
        });
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    let pool = BytePool::new_big_endian(&data);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("parse_tetras", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(&pool);
            let mut sum = 0u64;
            while !cursor.eof() {
                sum = sum.wrapping_add(u64::from(cursor.parse_unsigned_tetra().unwrap()));
            }
            black_box(sum)
        });
    });

    group.bench_function("peek_then_skip", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(&pool);
            let mut sum = 0u64;
            while !cursor.eof() {
                sum = sum.wrapping_add(u64::from(cursor.peek_unsigned_byte().unwrap()));
                cursor.skip(1);
            }
            black_box(sum)
        });
    });

    group.finish();
}

fn bench_patching(c: &mut Criterion) {
    let mut group = c.benchmark_group("patching");
    let size = 64 * 1024;
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("tweak_every_tetra", |b| {
        b.iter(|| {
            let mut pool = BytePool::new_little_endian(black_box(&data));
            let mut offset = 0;
            while offset + 4 <= pool.size() {
                pool.tweak_unsigned_tetra(offset, |v| v.wrapping_mul(31)).unwrap();
                offset += 4;
            }
            black_box(pool.size())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_building, bench_parsing, bench_patching);
criterion_main!(benches);
