use detfloat::{
    calc_pi, cos_vec, generate_numbers, pi, reciprocal_vec, sin_vec,
    sqrt_vec, tan_vec, LOGISTIC_R, NEWTON_ITERS,
};

fn inputs() -> Vec<f64> {
    generate_numbers(4096, LOGISTIC_R, 0.5, 987654)
}

fn test_pi() {
    black_box(calc_pi(5));
}

fn test_reciprocal(xs: &[f64]) {
    black_box(reciprocal_vec(xs, NEWTON_ITERS));
}

fn test_sqrt(xs: &[f64]) {
    black_box(sqrt_vec(xs, NEWTON_ITERS));
}

fn test_sin_cos(angles: &[f64]) {
    black_box(sin_vec(angles));
    black_box(cos_vec(angles));
}

fn test_tan(angles: &[f64]) {
    black_box(tan_vec(angles));
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let xs = inputs();
    let angles: Vec<f64> = xs.iter().map(|x| (x - 0.5) * pi()).collect();
    c.bench_function("test_pi", |b| b.iter(test_pi));
    c.bench_function("test_reciprocal", |b| b.iter(|| test_reciprocal(&xs)));
    c.bench_function("test_sqrt", |b| b.iter(|| test_sqrt(&xs)));
    c.bench_function("test_sin_cos", |b| b.iter(|| test_sin_cos(&angles)));
    c.bench_function("test_tan", |b| b.iter(|| test_tan(&angles)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
