use criterion::{Criterion, black_box, criterion_group, criterion_main};
use polyinfer_core::{Evaluate, Evaluator, make_evaluator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEGREE: usize = 31;
const POINTS: usize = 1024;

fn fixtures() -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(7);
    let coefficients = (0..=DEGREE).map(|_| rng.random_range(-1.0..1.0)).collect();
    let xs = (0..POINTS).map(|_| rng.random_range(-1.0..1.0)).collect();
    (coefficients, xs)
}

fn bench_closure(c: &mut Criterion) {
    let (coefficients, xs) = fixtures();
    let f = make_evaluator(coefficients);

    c.bench_function("make_evaluator/closure", move |b| {
        b.iter(|| {
            let sum: f64 = xs.iter().map(|&x| f(black_box(x))).sum();
            black_box(sum);
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let (coefficients, xs) = fixtures();
    let evaluator = Evaluator::new(coefficients);

    c.bench_function("evaluator/batch_evaluate", move |b| {
        b.iter(|| {
            black_box(evaluator.batch_evaluate(black_box(&xs)));
        });
    });
}

criterion_group!(benches, bench_closure, bench_batch);
criterion_main!(benches);
