use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vector_math::{Vector, Vector3, Vector4};

pub fn bench_add_vector3(c: &mut Criterion) {
    let a = Vector3::new(1.0_f32, 2.0, 3.0);
    let b = Vector3::new(4.0_f32, 5.0, 6.0);
    c.bench_function("add_vector3", |bencher| {
        bencher.iter(|| black_box(&a) + black_box(&b));
    });
}

pub fn bench_dot_vector4(c: &mut Criterion) {
    let a = Vector4::new(1.0_f64, 2.0, 3.0, 4.0);
    let b = Vector4::new(5.0_f64, 6.0, 7.0, 8.0);
    c.bench_function("dot_vector4", |bencher| {
        bencher.iter(|| black_box(&a).dot(black_box(&b)));
    });
}

pub fn bench_cross_vector3(c: &mut Criterion) {
    let a = Vector3::new(1.0_f32, 2.0, 3.0);
    let b = Vector3::new(4.0_f32, 5.0, 6.0);
    c.bench_function("cross_vector3", |bencher| {
        bencher.iter(|| black_box(&a).cross(black_box(&b)));
    });
}

pub fn bench_cross_dynamic_vector(c: &mut Criterion) {
    let a = Vector::new3(1.0_f32, 2.0, 3.0);
    let b = Vector::new3(4.0_f32, 5.0, 6.0);
    c.bench_function("cross_dynamic_vector", |bencher| {
        bencher.iter(|| black_box(&a).cross(black_box(&b)));
    });
}

pub fn bench_add_dynamic_vector(c: &mut Criterion) {
    let a = Vector::new4(1_i64, 2, 3, 4);
    let b = Vector::new4(5_i64, 6, 7, 8);
    c.bench_function("add_dynamic_vector", |bencher| {
        bencher.iter(|| black_box(&a).try_add(black_box(&b)));
    });
}

criterion_group!(
    benches,
    bench_add_vector3,
    bench_dot_vector4,
    bench_cross_vector3,
    bench_cross_dynamic_vector,
    bench_add_dynamic_vector
);
criterion_main!(benches);
