use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lyra_complex::{Complex, Input};

fn normalize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("pair", |b| {
        b.iter(|| Complex::make(black_box((3.0, 2.0))).unwrap());
    });

    group.bench_function("polar", |b| {
        b.iter(|| Complex::make(black_box(Input::Polar { abs: 2.0, arg: 0.75 })).unwrap());
    });

    group.bench_function("text_simple", |b| {
        b.iter(|| Complex::make(black_box("3+2i")).unwrap());
    });

    group.bench_function("text_many_terms", |b| {
        b.iter(|| Complex::make(black_box("1.5 + 2i - 0.25 + 3.75i - i + 10")).unwrap());
    });

    group.finish();
}

fn operations_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    let z = Complex::new(0.3, -1.2).unwrap();
    let w = Complex::new(2.0, 0.5).unwrap();

    group.bench_function("mul_div", |b| {
        b.iter(|| black_box(z).mul(w).unwrap().div(w).unwrap());
    });

    group.bench_function("pow", |b| {
        b.iter(|| black_box(z).pow(w).unwrap());
    });

    group.bench_function("inverse_trig", |b| {
        b.iter(|| {
            let z = black_box(z);
            (z.asin().unwrap(), z.acos().unwrap(), z.atan().unwrap())
        });
    });

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(z).to_string());
    });

    group.finish();
}

criterion_group!(benches, normalize_benchmark, operations_benchmark);
criterion_main!(benches);
