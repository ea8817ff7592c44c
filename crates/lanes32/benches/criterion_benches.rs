//! Criterion benchmarks for the vector operation surface.
//!
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, Criterion};
use lanes32::{B32x4, F32x4, I32x4};
use std::hint::black_box;

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
    let b = F32x4::splat(3.0);

    group.bench_function("f32_add", |bencher| {
        bencher.iter(|| black_box(black_box(a) + black_box(b)))
    });

    group.bench_function("f32_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });

    let i = I32x4::new(1, -2, 3, -4);
    group.bench_function("i32_neg", |bencher| {
        bencher.iter(|| black_box(-black_box(i)))
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mask = B32x4::from_bools([true, false, true, false]);
    let a = F32x4::splat(1.0);
    let b = F32x4::splat(2.0);

    c.bench_function("select_f32", |bencher| {
        bencher.iter(|| black_box(black_box(mask).select(black_box(a), black_box(b))))
    });
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");

    let v = F32x4::new(1.0, -2.0, 3.0, -4.0);
    group.bench_function("f32_hmax", |bencher| {
        bencher.iter(|| black_box(black_box(v).hmax()))
    });
    group.bench_function("f32_hadd", |bencher| {
        bencher.iter(|| black_box(black_box(v).hadd()))
    });

    let i = I32x4::new(1, -2, 3, -4);
    group.bench_function("i32_hmin", |bencher| {
        bencher.iter(|| black_box(black_box(i).hmin()))
    });

    group.finish();
}

fn bench_lerp(c: &mut Criterion) {
    let a = F32x4::splat(0.0);
    let b = F32x4::splat(10.0);

    c.bench_function("lerp", |bencher| {
        bencher.iter(|| black_box(black_box(a).lerp(black_box(b), black_box(0.25))))
    });
}

criterion_group!(
    benches,
    bench_arithmetic,
    bench_select,
    bench_reductions,
    bench_lerp
);
criterion_main!(benches);
