use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use memxfer_bytes::AlignedBuf;
use std::hint::black_box;

const SIZES: [usize; 5] = [16, 100, 1000, 10000, 100000];

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_vs_stdlib");

    for &size in &SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let src = AlignedBuf::filled(size + 8, 0x5A);

        // Offsets 0/0 share long alignment, 1/2 only byte alignment.
        for (from, to) in [(0, 0), (1, 2)] {
            let mut dst = AlignedBuf::zeroed(size + 8);

            group.bench_function(BenchmarkId::new(format!("memxfer_copy_{from}_{to}"), size), |b| {
                b.iter(|| unsafe {
                    memxfer::copy(black_box(src.ptr_at(from)), dst.mut_ptr_at(to), size);
                });
            });

            group.bench_function(
                BenchmarkId::new(format!("stdlib_copy_{from}_{to}"), size),
                |b| {
                    b.iter(|| unsafe {
                        std::ptr::copy(black_box(src.ptr_at(from)), dst.mut_ptr_at(to), size);
                    });
                },
            );
        }

        // Overlapping shift by one long.
        let mut buf = AlignedBuf::filled(size + 8, 0x11);
        group.bench_function(BenchmarkId::new("memxfer_copy_overlap", size), |b| {
            b.iter(|| unsafe {
                let base = buf.as_mut_ptr();
                memxfer::copy(black_box(base), base.add(8), size);
            });
        });
    }

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_vs_stdlib");

    for &size in &SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let mut dst = AlignedBuf::zeroed(size + 8);

        group.bench_function(BenchmarkId::new("memxfer_fill", size), |b| {
            b.iter(|| unsafe { memxfer::fill(dst.mut_ptr_at(3), size, black_box(0xA5)) });
        });

        group.bench_function(BenchmarkId::new("stdlib_write_bytes", size), |b| {
            b.iter(|| unsafe { dst.mut_ptr_at(3).write_bytes(black_box(0xA5), size) });
        });
    }

    group.finish();
}

fn bench_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_swapped");

    for &size in &SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let src = AlignedBuf::filled(size, 0x3C);
        let mut dst = AlignedBuf::zeroed(size);
        let extent = size / 8 * 8;

        for width in [2, 4, 8] {
            group.bench_with_input(BenchmarkId::new(format!("width_{width}"), size), &width, |b, &w| {
                b.iter(|| unsafe {
                    memxfer::copy_swapped(black_box(src.as_ptr()), dst.as_mut_ptr(), extent, w)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_copy, bench_fill, bench_swap);
criterion_main!(benches);
